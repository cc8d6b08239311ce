// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings types.
//!
//! ```text
//! Settings: LogSettings, ProviderSettings
//! ConfigKind: Rule (default) | TestCase | AdminConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Artifact kind used to label commit messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKind {
    #[default]
    Rule,
    TestCase,
    AdminConfig,
}

impl ConfigKind {
    /// Singular label, e.g. `test case`.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Rule => "rule",
            Self::TestCase => "test case",
            Self::AdminConfig => "admin config",
        }
    }

    /// Plural label, e.g. `test cases`.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Rule => "rules",
            Self::TestCase => "test cases",
            Self::AdminConfig => "admin configs",
        }
    }
}

impl std::fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rule => write!(f, "rule"),
            Self::TestCase => write!(f, "test_case"),
            Self::AdminConfig => write!(f, "admin_config"),
        }
    }
}

impl std::str::FromStr for ConfigKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "rule" => Ok(Self::Rule),
            "test_case" => Ok(Self::TestCase),
            "admin_config" => Ok(Self::AdminConfig),
            _ => Err(ConfigError::invalid(
                "provider.kind",
                format!("expected 'rule', 'test_case', or 'admin_config', got '{s}'"),
            )),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Field names, templates and patterns for the JSON provider.
///
/// Field names are optional here so a missing one surfaces as a
/// [`ConfigError::MissingField`] from the provider factory rather than a
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderSettings {
    /// Label used in commit messages.
    pub kind: ConfigKind,
    /// Key holding the config name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name_field: Option<String>,
    /// Key holding the optional config name prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name_prefix_field: Option<String>,
    /// Key holding the author (last committer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_author_field: Option<String>,
    /// Key holding the per-config version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_version_field: Option<String>,
    /// Key holding the aggregate release version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs_version_field: Option<String>,
    /// Filename template, `%s` is replaced by the qualified name.
    pub config_filename_format: String,
    /// Fixed filename of the release manifest.
    pub release_filename: String,
    /// Suffix identifying store files.
    pub store_file_suffix: String,
    /// Full-match pattern for candidate names.
    pub name_pattern: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ConfigKind::default(),
            config_name_field: Some("rule_name".to_string()),
            config_name_prefix_field: None,
            config_author_field: Some("rule_author".to_string()),
            config_version_field: Some("rule_version".to_string()),
            configs_version_field: Some("rules_version".to_string()),
            config_filename_format: DEFAULT_FILENAME_FORMAT.to_string(),
            release_filename: DEFAULT_RELEASE_FILENAME.to_string(),
            store_file_suffix: DEFAULT_STORE_FILE_SUFFIX.to_string(),
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
        }
    }
}

/// Default filename template for config files.
pub const DEFAULT_FILENAME_FORMAT: &str = "%s.json";
/// Default release manifest filename.
pub const DEFAULT_RELEASE_FILENAME: &str = "rules.json";
/// Default store file suffix.
pub const DEFAULT_STORE_FILE_SUFFIX: &str = "json";
/// Default name validation pattern.
pub const DEFAULT_NAME_PATTERN: &str = "^[a-zA-Z0-9_-]+$";
