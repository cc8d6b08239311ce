// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Revision commands.
//!
//! ```text
//! config/release:  read FILE|stdin --> provider --> ConfigInfo JSON on stdout
//!                                                   (+ files under --write DIR)
//! release-version: list DIR --> provider.release_version --> number on stdout
//! list:            list DIR --> store filenames on stdout
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info};

use crate::cli::revise::{RevisionArgs, StoreArgs};
use crate::error::Result;
use crate::provider::{ConfigInfo, ConfigInfoProvider};
use crate::store::list_store_files;

/// Handler for the `config` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the config is rejected, or
/// the output files cannot be written.
pub async fn run_config_command(args: &RevisionArgs, provider: &dyn ConfigInfoProvider) -> Result<()> {
    let raw = read_input(args).await?;
    let info = provider
        .config_info(&args.committer, &raw)
        .with_context(|| format!("rejected config {}", args.file.display()))?;
    emit(&info, args.write_dir.as_deref()).await
}

/// Handler for the `release` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the release manifest is
/// rejected, or the output files cannot be written.
pub async fn run_release_command(args: &RevisionArgs, provider: &dyn ConfigInfoProvider) -> Result<()> {
    let raw = read_input(args).await?;
    let info = provider
        .release_info(&args.committer, &raw)
        .with_context(|| format!("rejected release {}", args.file.display()))?;
    emit(&info, args.write_dir.as_deref()).await
}

/// Handler for the `release-version` command.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed, holds no release file,
/// or the release file is malformed.
pub fn run_release_version_command(args: &StoreArgs, provider: &dyn ConfigInfoProvider) -> Result<()> {
    let files = list_store_files(&args.dir, provider)?;
    let version = provider
        .release_version(&files)
        .with_context(|| format!("no release version in {}", args.dir.display()))?;
    println!("{version}");
    Ok(())
}

/// Handler for the `list` command.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn run_list_command(args: &StoreArgs, provider: &dyn ConfigInfoProvider) -> Result<()> {
    let files = list_store_files(&args.dir, provider)?;
    if files.is_empty() {
        println!("No store files found");
        return Ok(());
    }
    for file in &files {
        let marker = if provider.is_release_file(&file.file_name) {
            " (release)"
        } else {
            ""
        };
        println!("{}{marker}", file.file_name);
    }
    Ok(())
}

async fn read_input(args: &RevisionArgs) -> Result<String> {
    read_input_with(args, tokio::io::stdin()).await
}

/// Reads the submitted text from `args.file`, or from `stdin` when the file is `-`.
pub(crate) async fn read_input_with<R>(args: &RevisionArgs, mut stdin: R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    if args.reads_stdin() {
        let mut raw = String::new();
        stdin
            .read_to_string(&mut raw)
            .await
            .context("failed to read stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(&args.file)
            .await
            .with_context(|| format!("failed to read {}", args.file.display()))
    }
}

async fn emit(info: &ConfigInfo, write_dir: Option<&Path>) -> Result<()> {
    if let Some(dir) = write_dir {
        let written = write_files(info, dir).await?;
        info!(count = written.len(), dir = %dir.display(), "Wrote revised files");
    }
    let json = serde_json::to_string_pretty(info).context("failed to serialize config info")?;
    println!("{json}");
    Ok(())
}

/// Writes every `files_content` entry of `info` under `dir`.
///
/// # Errors
///
/// Returns an error if a filename escapes `dir` or a file cannot be written.
pub async fn write_files(info: &ConfigInfo, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(info.files_content.len());
    for (name, content) in &info.files_content {
        let relative = Path::new(name);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            anyhow::bail!("refusing to write outside {}: {name}", dir.display());
        }

        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, content)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "wrote file");
        written.push(path);
    }
    Ok(written)
}
