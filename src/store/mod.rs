// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local directory listing of a config store.
//!
//! Only the top level of the directory is read. Hidden files and
//! `.gitignore`d entries are skipped.

use std::path::Path;

use anyhow::Context;
use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::error::Result;
use crate::provider::{ConfigEditorFile, ConfigInfoProvider};

/// Lists the files in `dir` that `provider` accepts as store files, sorted by name.
///
/// # Errors
///
/// Returns an error if `dir` is not a directory or a store file cannot be read.
pub fn list_store_files(
    dir: &Path,
    provider: &dyn ConfigInfoProvider,
) -> Result<Vec<ConfigEditorFile>> {
    if !dir.is_dir() {
        anyhow::bail!("store directory not found: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(dir).max_depth(Some(1)).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable store entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 filename");
            continue;
        };
        if !provider.is_store_file(file_name) {
            continue;
        }

        let content = std::fs::read_to_string(entry.path())
            .with_context(|| format!("failed to read {}", entry.path().display()))?;
        files.push(ConfigEditorFile::new(file_name, content));
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    debug!(dir = %dir.display(), count = files.len(), "listed store files");
    Ok(files)
}

#[cfg(test)]
mod tests;
