// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigLoader, Settings};
use crate::config::types::ConfigKind;
use crate::logging::LogLevel;
use crate::provider::configuration::ProviderConfiguration;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.log.output_log_level, LogLevel::INFO);
    assert_eq!(settings.log.file_log_level, LogLevel::TRACE);
    assert!(settings.log.log_file.is_none());
    assert_eq!(settings.provider.kind, ConfigKind::Rule);
    assert_eq!(settings.provider.config_name_field.as_deref(), Some("rule_name"));
    assert_eq!(settings.provider.config_name_prefix_field, None);
    assert_eq!(settings.provider.config_author_field.as_deref(), Some("rule_author"));
    assert_eq!(settings.provider.config_version_field.as_deref(), Some("rule_version"));
    assert_eq!(settings.provider.configs_version_field.as_deref(), Some("rules_version"));
    assert_eq!(settings.provider.config_filename_format, "%s.json");
    assert_eq!(settings.provider.release_filename, "rules.json");
    assert_eq!(settings.provider.store_file_suffix, "json");
    assert_eq!(settings.provider.name_pattern, "^[a-zA-Z0-9_-]+$");
}

#[test]
fn test_default_settings_build_a_provider() {
    let settings = Settings::default();
    assert!(ProviderConfiguration::from_settings(&settings.provider).is_ok());
}

#[test]
fn test_config_kind_parse() {
    assert_eq!("rule".parse::<ConfigKind>().unwrap(), ConfigKind::Rule);
    assert_eq!("Test-Case".parse::<ConfigKind>().unwrap(), ConfigKind::TestCase);
    assert_eq!(
        "admin_config".parse::<ConfigKind>().unwrap(),
        ConfigKind::AdminConfig
    );
    let err = "policy".parse::<ConfigKind>().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'provider.kind': expected 'rule', 'test_case', or 'admin_config', got 'policy'"
    );
}

#[test]
fn test_config_kind_labels() {
    let labels: Vec<_> = [ConfigKind::Rule, ConfigKind::TestCase, ConfigKind::AdminConfig]
        .into_iter()
        .map(|k| (k.to_string(), k.singular(), k.plural()))
        .collect();
    insta::assert_debug_snapshot!(labels, @r#"
    [
        (
            "rule",
            "rule",
            "rules",
        ),
        (
            "test_case",
            "test case",
            "test cases",
        ),
        (
            "admin_config",
            "admin config",
            "admin configs",
        ),
    ]
    "#);
}

#[test]
fn test_parse_provider_section() {
    let settings = Settings::parse(
        r#"
[provider]
kind = "admin_config"
config_name_field = "config_name"
config_name_prefix_field = "config_prefix"
release_filename = "admin_config.json"
"#,
    )
    .unwrap();

    assert_eq!(settings.provider.kind, ConfigKind::AdminConfig);
    assert_eq!(
        settings.provider.config_name_field.as_deref(),
        Some("config_name")
    );
    assert_eq!(
        settings.provider.config_name_prefix_field.as_deref(),
        Some("config_prefix")
    );
    assert_eq!(settings.provider.release_filename, "admin_config.json");
    // untouched keys keep their defaults
    assert_eq!(
        settings.provider.config_author_field.as_deref(),
        Some("rule_author")
    );
    assert_eq!(settings.provider.config_filename_format, "%s.json");
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(Settings::parse("[provider]\nbogus = 1\n").is_err());
    assert!(Settings::parse("[unknown]\nx = 1\n").is_err());
}

#[test]
fn test_parse_rejects_invalid_log_level() {
    assert!(Settings::parse("[log]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_loader_later_sources_override() {
    let settings = ConfigLoader::new()
        .add_toml_str("[provider]\nrelease_filename = \"first.json\"\n")
        .add_toml_str("[provider]\nrelease_filename = \"second.json\"\n")
        .build()
        .unwrap();
    assert_eq!(settings.provider.release_filename, "second.json");
}

#[test]
fn test_loader_set_override() {
    let settings = ConfigLoader::new()
        .add_toml_str("[log]\noutput_log_level = 2\n")
        .set("log.output_log_level", 4)
        .unwrap()
        .set("provider.kind", "test_case")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(settings.log.output_log_level, LogLevel::DEBUG);
    assert_eq!(settings.provider.kind, ConfigKind::TestCase);
}

#[test]
fn test_loader_tracks_files() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("confrev.toml");
    std::fs::write(&path, "[provider]\nstore_file_suffix = \".json\"\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&path)
        .add_toml_file_optional(temp.path().join("missing.toml"));
    assert_eq!(loader.loaded_files().len(), 1);
    assert!(loader.format_loaded_files()[0].starts_with("1. [file] "));

    let settings = loader.build().unwrap();
    assert_eq!(settings.provider.store_file_suffix, ".json");
}

#[test]
fn test_missing_required_file_fails() {
    let temp = tempfile::tempdir().unwrap();
    assert!(Settings::from_file(temp.path().join("absent.toml")).is_err());
}

#[test]
fn test_format_options() {
    let settings = Settings::default();
    let options = settings.format_options();
    insta::assert_snapshot!(options.join("\n"), @r"
    log.file_log_level              = 5
    log.output_log_level            = 3
    provider.config_author_field    = rule_author
    provider.config_filename_format = %s.json
    provider.config_name_field      = rule_name
    provider.config_version_field   = rule_version
    provider.configs_version_field  = rules_version
    provider.kind                   = rule
    provider.name_pattern           = ^[a-zA-Z0-9_-]+$
    provider.release_filename       = rules.json
    provider.store_file_suffix      = json
    ");
}

#[test]
fn test_loader_env_vars_address_sections() {
    let vars = [
        ("CONFREV_PROVIDER__KIND", "test_case"),
        ("CONFREV_PROVIDER__RELEASE_FILENAME", "test_cases.json"),
        ("CONFREV_LOG__OUTPUT_LOG_LEVEL", "4"),
        ("OTHER_PROVIDER__KIND", "admin_config"),
    ]
    .map(|(key, value)| (key.to_string(), value.to_string()));

    let settings = ConfigLoader::new()
        .add_toml_str("[provider]\nrelease_filename = \"rules.json\"\n")
        .with_env_vars("CONFREV", vars)
        .build()
        .unwrap();
    assert_eq!(settings.provider.kind, ConfigKind::TestCase);
    assert_eq!(settings.provider.release_filename, "test_cases.json");
    assert_eq!(settings.log.output_log_level, LogLevel::DEBUG);
}

#[test]
fn test_loader_env_ignores_cli_variables() {
    let vars = [
        ("CONFREV_COMMITTER", "bob"),
        ("CONFREV_PROVIDERX", "1"),
        ("CONFREV_LOG", "3"),
    ]
    .map(|(key, value)| (key.to_string(), value.to_string()));

    let settings = ConfigLoader::new()
        .with_env_vars("CONFREV", vars)
        .build()
        .unwrap();
    assert_eq!(settings.provider.kind, ConfigKind::Rule);
    assert_eq!(settings.log.output_log_level, LogLevel::INFO);
}
