// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ArtifactKind, ConfigError, RevisionError, RevisionResult};

#[test]
fn test_malformed_message_per_artifact() {
    let config = RevisionError::malformed(ArtifactKind::Config);
    let release = RevisionError::malformed(ArtifactKind::Release);

    insta::assert_snapshot!(config.to_string(), @"Wrong config json file format");
    insta::assert_snapshot!(release.to_string(), @"Wrong config release json file format");
}

#[test]
fn test_invalid_name_carries_candidate() {
    let err = RevisionError::InvalidName {
        name: "bad name_x".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"Wrong config name: bad name_x");
}

#[test]
fn test_missing_file_display() {
    let err = RevisionError::MissingFile {
        filename: "rules.json".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"Missing filename: rules.json");
}

#[test]
fn test_config_error_converts_into_revision_error() {
    let err: RevisionError = ConfigError::missing("config_name_field").into();
    assert!(matches!(err, RevisionError::Configuration(_)));
    insta::assert_snapshot!(
        err.to_string(),
        @"configuration error: missing required argument 'config_name_field' for the provider"
    );
}

#[test]
fn test_revision_result_size() {
    // Configuration is boxed so the result stays small.
    let size = std::mem::size_of::<RevisionResult<()>>();
    assert!(size <= 32, "RevisionResult<()> is {size} bytes, expected <= 32");
}

#[test]
fn test_load_error_cause_printed_once() {
    let err = ConfigError::from(config::ConfigError::Message("unknown field `committer`".to_string()));
    insta::assert_snapshot!(err.to_string(), @"failed to load settings");

    let chain = format!("{:#}", anyhow::Error::from(err));
    insta::assert_snapshot!(chain, @"failed to load settings: unknown field `committer`");
}

#[test]
fn test_invalid_pattern_message_is_neutral() {
    let source = regex::Regex::new("[").unwrap_err();
    let err = ConfigError::InvalidPattern {
        pattern: r#""rule_version"\s*:\s*["#.to_string(),
        source: Box::new(source),
    };
    insta::assert_snapshot!(err.to_string(), @r#"invalid pattern '"rule_version"\s*:\s*['"#);
    assert!(std::error::Error::source(&err).is_some());
}
