// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::revise::{read_input_with, write_files};
use crate::cli::revise::RevisionArgs;
use crate::provider::ConfigInfo;

fn args(file: &str) -> RevisionArgs {
    RevisionArgs {
        file: PathBuf::from(file),
        committer: "alice".to_string(),
        write_dir: None,
    }
}

fn info(files: &[(&str, &str)]) -> ConfigInfo {
    ConfigInfo {
        version: 2,
        old_version: 1,
        commit_message: "Updating rule: foo to version: 2".to_string(),
        branch_name: None,
        files_content: files
            .iter()
            .map(|(name, content)| ((*name).to_string(), (*content).to_string()))
            .collect::<BTreeMap<_, _>>(),
        committer: "alice".to_string(),
    }
}

#[tokio::test]
async fn test_write_files_creates_nested_dirs() {
    let temp = tempfile::tempdir().unwrap();
    let info = info(&[("cases/foo.json", "{\"version\": 2}")]);

    let written = write_files(&info, temp.path()).await.unwrap();

    assert_eq!(written, vec![temp.path().join("cases/foo.json")]);
    let content = tokio::fs::read_to_string(&written[0]).await.unwrap();
    assert_eq!(content, "{\"version\": 2}");
}

#[tokio::test]
async fn test_write_files_refuses_parent_components() {
    let temp = tempfile::tempdir().unwrap();
    let info = info(&[("../escape.json", "{}")]);

    assert!(write_files(&info, temp.path()).await.is_err());
    assert!(!temp.path().parent().unwrap().join("escape.json").exists());
}

#[tokio::test]
async fn test_read_input_dash_reads_stdin() {
    let stdin: &[u8] = br#"{"rule_name":"foo","rule_version":1}"#;
    let raw = read_input_with(&args("-"), stdin).await.unwrap();
    assert_eq!(raw, r#"{"rule_name":"foo","rule_version":1}"#);
}

#[tokio::test]
async fn test_read_input_file_ignores_stdin() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("foo.json");
    tokio::fs::write(&path, "{\"rule_version\": 3}").await.unwrap();

    let stdin: &[u8] = b"not used";
    let raw = read_input_with(&args(path.to_str().unwrap()), stdin)
        .await
        .unwrap();
    assert_eq!(raw, "{\"rule_version\": 3}");
}

#[tokio::test]
async fn test_read_input_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("absent.json");
    let stdin: &[u8] = b"";
    let err = read_input_with(&args(path.to_str().unwrap()), stdin)
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("failed to read "));
}
