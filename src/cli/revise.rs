// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Revision command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `config` and `release` commands.
#[derive(Debug, Clone, Args)]
pub struct RevisionArgs {
    /// File holding the submitted JSON text; `-` reads stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Identity of the user requesting the change.
    #[arg(short = 'u', long = "committer", value_name = "USER", env = "CONFREV_COMMITTER")]
    pub committer: String,

    /// Writes the resulting files into this directory.
    #[arg(short = 'w', long = "write", value_name = "DIR")]
    pub write_dir: Option<PathBuf>,
}

impl RevisionArgs {
    /// Whether the input comes from stdin.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

/// Arguments for commands that inspect a store directory.
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Store directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}
