// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings management for confrev.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local confrev.toml (cwd)
//! 3. --settings FILE (repeatable)
//! 4. CONFREV_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CONFREV_PROVIDER__KIND=test_case           → provider.kind = "test_case"
//! CONFREV_PROVIDER__RELEASE_FILENAME=x.json  → provider.release_filename = "x.json"
//! CONFREV_LOG__OUTPUT_LOG_LEVEL=4            → log.output_log_level = 4
//! ```
//!
//! # Example
//!
//! ```toml
//! [provider]
//! kind = "rule"
//! config_name_field = "rule_name"
//! config_author_field = "rule_author"
//! config_version_field = "rule_version"
//! configs_version_field = "rules_version"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

use loader::ConfigLoader;
use types::{LogSettings, ProviderSettings};

/// Complete application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Logging options.
    pub log: LogSettings,
    /// Provider field names and templates.
    pub provider: ProviderSettings,
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use confrev::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file("confrev.toml")
    ///     .with_env_prefix("CONFREV")
    ///     .build()?;
    /// # Ok::<(), confrev::error::ConfigError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format settings for display, one `key = value` line each, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_log_options(&mut options);
        self.format_provider_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_log_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "log.output_log_level".into(),
            self.log.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "log.file_log_level".into(),
            self.log.file_log_level.as_u8().to_string(),
        );
        if let Some(path) = &self.log.log_file {
            options.insert("log.log_file".into(), path.display().to_string());
        }
    }

    fn format_provider_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |v: &Option<String>| v.clone().unwrap_or_default();
        let provider = &self.provider;

        options.insert("provider.kind".into(), provider.kind.to_string());
        options.insert(
            "provider.config_name_field".into(),
            fmt(&provider.config_name_field),
        );
        if provider.config_name_prefix_field.is_some() {
            options.insert(
                "provider.config_name_prefix_field".into(),
                fmt(&provider.config_name_prefix_field),
            );
        }
        options.insert(
            "provider.config_author_field".into(),
            fmt(&provider.config_author_field),
        );
        options.insert(
            "provider.config_version_field".into(),
            fmt(&provider.config_version_field),
        );
        options.insert(
            "provider.configs_version_field".into(),
            fmt(&provider.configs_version_field),
        );
        options.insert(
            "provider.config_filename_format".into(),
            provider.config_filename_format.clone(),
        );
        options.insert(
            "provider.release_filename".into(),
            provider.release_filename.clone(),
        );
        options.insert(
            "provider.store_file_suffix".into(),
            provider.store_file_suffix.clone(),
        );
        options.insert(
            "provider.name_pattern".into(),
            provider.name_pattern.clone(),
        );
    }
}
