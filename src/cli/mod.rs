// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for confrev using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! confrev [global options] <command>
//! config <FILE> --committer USER [--write DIR]
//! release <FILE> --committer USER [--write DIR]
//! release-version <DIR>
//! list <DIR>
//! options
//! settings
//! version
//! ```

pub mod global;
pub mod revise;


use crate::cli::global::GlobalOptions;
use crate::cli::revise::{RevisionArgs, StoreArgs};
use clap::{Parser, Subcommand};

/// Config Revision Mutator
///
/// Bumps versions of JSON configs and release manifests in place and prints
/// the commit metadata for the change.
#[derive(Debug, Parser)]
#[command(
    name = "confrev",
    author,
    version,
    about = "Config revision mutator",
    long_about = "confrev Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Prepares the next revision of a JSON config or release manifest:\n\
                  the version is bumped, the author becomes the committer, and all\n\
                  other bytes are left as they were. The result is printed as JSON\n\
                  for the component that performs the commit.",
    after_help = "SETTINGS FILES:\n\n\
                  confrev reads `confrev.toml` from the current directory if present.\n\
                  Additional files can be given with --settings; later files override\n\
                  earlier ones. CONFREV_<SECTION>__<KEY> environment variables and\n\
                  --set overrides are applied last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all settings and their values.
    Options,

    /// Lists the settings files used.
    Settings,

    /// Prepares the next revision of a config file.
    Config(RevisionArgs),

    /// Prepares the next revision of the release manifest.
    Release(RevisionArgs),

    /// Prints the current release version of a store directory.
    #[command(name = "release-version")]
    ReleaseVersion(StoreArgs),

    /// Lists the store files of a directory.
    List(StoreArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
