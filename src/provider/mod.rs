// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config and release revision requests.
//!
//! ```text
//! config_info(committer, raw)
//!   metadata::extract_config_metadata
//!     --> name::candidate_name --> NamePattern::validate
//!     --> patch::next_version
//!     --> FieldPatch::apply_first (version, then author if committer changed)
//!     --> CommitTemplates::config_message
//!     --> ConfigInfo { files_content: { "<prefix-name>.json": text } }
//!
//! release_info(committer, raw)
//!   metadata::extract_release_version
//!     --> patch::next_version --> FieldPatch::apply_first (release version)
//!     --> CommitTemplates::release + release_branch_name
//!     --> ConfigInfo { files_content: { "rules.json": text } }
//! ```
//!
//! All operations are pure: no I/O, no shared mutable state. A single
//! [`JsonConfigInfoProvider`] can serve any number of threads.

pub mod commit;
pub mod configuration;
pub mod metadata;
pub mod name;
pub mod patch;


use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ArtifactKind, RevisionError, RevisionResult};

use commit::release_branch_name;
use configuration::ProviderConfiguration;
use metadata::{extract_config_metadata, extract_release_version};
use name::{candidate_name, qualified_name};
use patch::next_version;

/// Result of a config or release update, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInfo {
    pub version: u64,
    pub old_version: u64,
    pub commit_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    /// Filename to full file content.
    pub files_content: BTreeMap<String, String>,
    pub committer: String,
}

/// A file as listed by the config store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEditorFile {
    pub file_name: String,
    pub content: String,
}

impl ConfigEditorFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// How callers must treat file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileContentType {
    /// Opaque text; never round-trip it through a structured writer.
    RawText,
}

impl std::fmt::Display for FileContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RawText => write!(f, "raw text"),
        }
    }
}

/// Operations a config store needs before committing a change.
pub trait ConfigInfoProvider: Send + Sync {
    /// Validate a config and produce its next revision.
    ///
    /// # Errors
    ///
    /// [`RevisionError::MalformedConfig`] or [`RevisionError::InvalidName`].
    fn config_info(&self, committer: &str, config: &str) -> RevisionResult<ConfigInfo>;

    /// Produce the next revision of the release manifest.
    ///
    /// # Errors
    ///
    /// [`RevisionError::MalformedConfig`] if the release version is unreadable.
    fn release_info(&self, committer: &str, release: &str) -> RevisionResult<ConfigInfo>;

    /// Current release version found in a store listing.
    ///
    /// # Errors
    ///
    /// [`RevisionError::MissingFile`] if the release file is not listed,
    /// [`RevisionError::MalformedConfig`] if its version is unreadable.
    fn release_version(&self, files: &[ConfigEditorFile]) -> RevisionResult<u64>;

    fn file_content_type(&self) -> FileContentType;

    fn is_store_file(&self, filename: &str) -> bool;

    fn is_release_file(&self, filename: &str) -> bool;
}

/// [`ConfigInfoProvider`] for JSON configs edited in place.
#[derive(Debug, Clone)]
pub struct JsonConfigInfoProvider {
    configuration: ProviderConfiguration,
}

impl JsonConfigInfoProvider {
    #[must_use]
    pub const fn new(configuration: ProviderConfiguration) -> Self {
        Self { configuration }
    }

    #[must_use]
    pub const fn configuration(&self) -> &ProviderConfiguration {
        &self.configuration
    }

    /// [`ConfigInfoProvider::release_info`] with an explicit branch timestamp.
    ///
    /// # Errors
    ///
    /// [`RevisionError::MalformedConfig`] if the release version is unreadable.
    pub fn release_info_at(
        &self,
        committer: &str,
        release: &str,
        timestamp: NaiveDateTime,
    ) -> RevisionResult<ConfigInfo> {
        let cfg = &self.configuration;
        let old_version = extract_release_version(release, cfg.configs_version_field())?;
        let version =
            next_version(old_version).ok_or_else(|| RevisionError::malformed(ArtifactKind::Release))?;

        let updated = cfg
            .release_version_patch()
            .apply_first(release, &Value::from(version));

        let branch_name = release_branch_name(version, committer, timestamp);
        info!(
            committer,
            old_version,
            version,
            branch = %branch_name,
            "Prepared release update"
        );

        Ok(ConfigInfo {
            version,
            old_version,
            commit_message: cfg.templates().release(version),
            branch_name: Some(branch_name),
            files_content: BTreeMap::from([(
                cfg.release_filename().to_string(),
                updated.into_owned(),
            )]),
            committer: committer.to_string(),
        })
    }
}

impl ConfigInfoProvider for JsonConfigInfoProvider {
    fn config_info(&self, committer: &str, config: &str) -> RevisionResult<ConfigInfo> {
        let cfg = &self.configuration;
        let metadata = extract_config_metadata(config, cfg.config_fields())?;

        let candidate = candidate_name(&metadata.name, metadata.prefix.as_deref());
        cfg.name_pattern().validate(&candidate)?;

        let name = qualified_name(&metadata.name, metadata.prefix.as_deref());
        let old_version = metadata.version;
        let version =
            next_version(old_version).ok_or_else(|| RevisionError::malformed(ArtifactKind::Config))?;

        let mut updated = cfg
            .config_version_patch()
            .apply_first(config, &Value::from(version))
            .into_owned();

        // The author field records the last committer.
        if metadata.author != committer {
            debug!(
                author = %metadata.author,
                committer,
                "Replacing author with committer"
            );
            updated = cfg
                .config_author_patch()
                .apply_first(&updated, &Value::from(committer))
                .into_owned();
        }

        info!(
            committer,
            name = %name,
            old_version,
            version,
            "Prepared config update"
        );

        Ok(ConfigInfo {
            version,
            old_version,
            commit_message: cfg.templates().config_message(&name, old_version, version),
            branch_name: None,
            files_content: BTreeMap::from([(cfg.config_filename(&name), updated)]),
            committer: committer.to_string(),
        })
    }

    fn release_info(&self, committer: &str, release: &str) -> RevisionResult<ConfigInfo> {
        self.release_info_at(committer, release, Local::now().naive_local())
    }

    fn release_version(&self, files: &[ConfigEditorFile]) -> RevisionResult<u64> {
        let release_filename = self.configuration.release_filename();
        let release = files
            .iter()
            .find(|file| file.file_name == release_filename)
            .ok_or_else(|| RevisionError::MissingFile {
                filename: release_filename.to_string(),
            })?;

        extract_release_version(&release.content, self.configuration.configs_version_field())
    }

    fn file_content_type(&self) -> FileContentType {
        FileContentType::RawText
    }

    fn is_store_file(&self, filename: &str) -> bool {
        filename.ends_with(self.configuration.store_file_suffix())
    }

    fn is_release_file(&self, filename: &str) -> bool {
        filename == self.configuration.release_filename()
    }
}
