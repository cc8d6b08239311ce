// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable provider configuration and its validating factory.
//!
//! ```text
//! ProviderConfiguration::builder()          ProviderSettings ([provider])
//!   .config_name_field("rule_name")                 |
//!   .config_author_field(..)                        v
//!   ...                                     from_settings()
//!   .build() ----------------+----------------------'
//!                            v
//!          Result<ProviderConfiguration, ConfigError>
//!            field names, filename template, release filename,
//!            suffix, NamePattern, FieldPatch x3, CommitTemplates
//! ```
//!
//! A value of this type is always complete: every regex is compiled and every
//! required field name is present.

use bon::bon;

use crate::config::types::{
    ConfigKind, DEFAULT_FILENAME_FORMAT, DEFAULT_NAME_PATTERN, DEFAULT_RELEASE_FILENAME,
    DEFAULT_STORE_FILE_SUFFIX, ProviderSettings,
};
use crate::error::ConfigError;

use super::commit::CommitTemplates;
use super::metadata::ConfigFields;
use super::name::NamePattern;
use super::patch::FieldPatch;

/// Placeholder replaced by the qualified name in the filename template.
pub const FILENAME_PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone)]
pub struct ProviderConfiguration {
    config_name_field: String,
    config_name_prefix_field: Option<String>,
    config_author_field: String,
    config_version_field: String,
    configs_version_field: String,
    config_filename_format: String,
    release_filename: String,
    store_file_suffix: String,
    name_pattern: NamePattern,
    config_version_patch: FieldPatch,
    config_author_patch: FieldPatch,
    release_version_patch: FieldPatch,
    templates: CommitTemplates,
}

#[bon]
impl ProviderConfiguration {
    /// Validate the arguments and derive patterns and templates.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingField`] if a required field name was not supplied.
    /// - [`ConfigError::InvalidValue`] if a supplied value is empty, or the
    ///   filename template does not hold exactly one `%s`.
    /// - [`ConfigError::InvalidPattern`] if the name pattern does not compile.
    #[builder]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        #[builder(into)] config_name_field: Option<String>,
        #[builder(into)] config_name_prefix_field: Option<String>,
        #[builder(into)] config_author_field: Option<String>,
        #[builder(into)] config_version_field: Option<String>,
        #[builder(into)] configs_version_field: Option<String>,
        #[builder(into, default = DEFAULT_FILENAME_FORMAT.to_string())]
        config_filename_format: String,
        #[builder(into, default = DEFAULT_RELEASE_FILENAME.to_string())] release_filename: String,
        #[builder(into, default = DEFAULT_STORE_FILE_SUFFIX.to_string())]
        store_file_suffix: String,
        #[builder(into, default = DEFAULT_NAME_PATTERN.to_string())] name_pattern: String,
        #[builder(default)] kind: ConfigKind,
    ) -> Result<Self, ConfigError> {
        let config_name_field = required(config_name_field, "config_name_field")?;
        let config_author_field = required(config_author_field, "config_author_field")?;
        let config_version_field = required(config_version_field, "config_version_field")?;
        let configs_version_field = required(configs_version_field, "configs_version_field")?;
        let config_name_prefix_field = config_name_prefix_field
            .map(|field| non_empty(field, "config_name_prefix_field"))
            .transpose()?;

        let config_filename_format = non_empty(config_filename_format, "config_filename_format")?;
        if config_filename_format.matches(FILENAME_PLACEHOLDER).count() != 1 {
            return Err(ConfigError::invalid(
                "config_filename_format",
                format!("expected exactly one '{FILENAME_PLACEHOLDER}' in '{config_filename_format}'"),
            ));
        }
        let release_filename = non_empty(release_filename, "release_filename")?;
        let store_file_suffix = non_empty(store_file_suffix, "store_file_suffix")?;

        let name_pattern = NamePattern::new(&name_pattern)?;
        let config_version_patch = FieldPatch::version(&config_version_field)?;
        let config_author_patch = FieldPatch::author(&config_author_field)?;
        let release_version_patch = FieldPatch::version(&configs_version_field)?;

        Ok(Self {
            config_name_field,
            config_name_prefix_field,
            config_author_field,
            config_version_field,
            configs_version_field,
            config_filename_format,
            release_filename,
            store_file_suffix,
            name_pattern,
            config_version_patch,
            config_author_patch,
            release_version_patch,
            templates: CommitTemplates::for_kind(kind),
        })
    }
}

impl ProviderConfiguration {
    /// Build from the `[provider]` settings section.
    ///
    /// # Errors
    ///
    /// Same as [`ProviderConfiguration::builder`].
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, ConfigError> {
        Self::builder()
            .maybe_config_name_field(settings.config_name_field.clone())
            .maybe_config_name_prefix_field(settings.config_name_prefix_field.clone())
            .maybe_config_author_field(settings.config_author_field.clone())
            .maybe_config_version_field(settings.config_version_field.clone())
            .maybe_configs_version_field(settings.configs_version_field.clone())
            .config_filename_format(settings.config_filename_format.clone())
            .release_filename(settings.release_filename.clone())
            .store_file_suffix(settings.store_file_suffix.clone())
            .name_pattern(settings.name_pattern.clone())
            .kind(settings.kind)
            .build()
    }

    #[must_use]
    pub fn config_fields(&self) -> ConfigFields<'_> {
        ConfigFields {
            name: &self.config_name_field,
            prefix: self.config_name_prefix_field.as_deref(),
            author: &self.config_author_field,
            version: &self.config_version_field,
        }
    }

    #[must_use]
    pub fn configs_version_field(&self) -> &str {
        &self.configs_version_field
    }

    #[must_use]
    pub fn release_filename(&self) -> &str {
        &self.release_filename
    }

    #[must_use]
    pub fn store_file_suffix(&self) -> &str {
        &self.store_file_suffix
    }

    #[must_use]
    pub const fn name_pattern(&self) -> &NamePattern {
        &self.name_pattern
    }

    #[must_use]
    pub const fn config_version_patch(&self) -> &FieldPatch {
        &self.config_version_patch
    }

    #[must_use]
    pub const fn config_author_patch(&self) -> &FieldPatch {
        &self.config_author_patch
    }

    #[must_use]
    pub const fn release_version_patch(&self) -> &FieldPatch {
        &self.release_version_patch
    }

    #[must_use]
    pub const fn templates(&self) -> &CommitTemplates {
        &self.templates
    }

    /// Render the filename template for a qualified config name.
    #[must_use]
    pub fn config_filename(&self, qualified_name: &str) -> String {
        self.config_filename_format
            .replacen(FILENAME_PLACEHOLDER, qualified_name, 1)
    }
}

fn required(value: Option<String>, key: &str) -> Result<String, ConfigError> {
    value
        .ok_or_else(|| ConfigError::missing(key))
        .and_then(|value| non_empty(value, key))
}

fn non_empty(value: String, key: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        Err(ConfigError::invalid(key, "must not be empty"))
    } else {
        Ok(value)
    }
}
