// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit message and branch name rendering.
//!
//! | Situation          | Message                                       |
//! |--------------------|-----------------------------------------------|
//! | old version == 0   | `Adding new <kind>: <name>`                   |
//! | old version > 0    | `Updating <kind>: <name> to version: <new>`   |
//! | release            | `<kinds> released to version: <new>`          |
//!
//! Release branches: `ver_<new>_by_<committer>_on_<timestamp>`.

use chrono::NaiveDateTime;

use crate::config::types::ConfigKind;

/// Timestamp layout for branch names; avoids `:` which git refs reject.
pub const BRANCH_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Commit message templates for one artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitTemplates {
    kind: ConfigKind,
}

impl CommitTemplates {
    #[must_use]
    pub const fn for_kind(kind: ConfigKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub const fn kind(&self) -> ConfigKind {
        self.kind
    }

    #[must_use]
    pub fn new_config(&self, name: &str) -> String {
        format!("Adding new {}: {name}", self.kind.singular())
    }

    #[must_use]
    pub fn update_config(&self, name: &str, new_version: u64) -> String {
        format!(
            "Updating {}: {name} to version: {new_version}",
            self.kind.singular()
        )
    }

    #[must_use]
    pub fn release(&self, new_version: u64) -> String {
        format!(
            "{} released to version: {new_version}",
            self.kind.plural()
        )
    }

    /// Message for a config update, picking "new" when there was no prior version.
    #[must_use]
    pub fn config_message(&self, name: &str, old_version: u64, new_version: u64) -> String {
        if old_version == 0 {
            self.new_config(name)
        } else {
            self.update_config(name, new_version)
        }
    }
}

/// Branch name for a release update.
#[must_use]
pub fn release_branch_name(new_version: u64, committer: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "ver_{new_version}_by_{committer}_on_{}",
        timestamp.format(BRANCH_TIMESTAMP_FORMAT)
    )
}
