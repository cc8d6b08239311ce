// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::list_store_files;
use crate::provider::JsonConfigInfoProvider;
use crate::provider::configuration::ProviderConfiguration;

fn provider() -> JsonConfigInfoProvider {
    JsonConfigInfoProvider::new(
        ProviderConfiguration::builder()
            .config_name_field("name")
            .config_author_field("author")
            .config_version_field("version")
            .configs_version_field("rules_version")
            .build()
            .unwrap(),
    )
}

#[test]
fn test_list_store_files_filters_by_suffix() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("b.json"), "{}").unwrap();
    std::fs::write(temp.path().join("a.json"), "{}").unwrap();
    std::fs::write(temp.path().join("notes.txt"), "x").unwrap();
    std::fs::create_dir(temp.path().join("nested")).unwrap();
    std::fs::write(temp.path().join("nested/c.json"), "{}").unwrap();

    let files = list_store_files(temp.path(), &provider()).unwrap();
    let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.json", "b.json"]);
}

#[test]
fn test_list_store_files_missing_dir() {
    let temp = tempfile::tempdir().unwrap();
    assert!(list_store_files(&temp.path().join("absent"), &provider()).is_err());
}
