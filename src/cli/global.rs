// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --settings FILE   ← Additional settings files (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← Enables file logging
//! --set KEY=VAL     ← Direct settings override
//!
//! Precedence: CLI flags > --set > env > --settings > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML settings file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "settings", value_name = "FILE", action = clap::ArgAction::Append)]
    pub settings: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'provider.kind=test_case'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables loading `confrev.toml` from the current directory.
    #[arg(long = "no-default-settings")]
    pub no_default_settings: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` settings overrides.
    ///
    /// Malformed `--set` entries (no `=`) are returned in the second vector.
    #[must_use]
    pub fn to_settings_overrides(&self) -> (Vec<(String, String)>, Vec<String>) {
        let mut overrides = Vec::new();
        let mut rejected = Vec::new();

        for option in &self.options {
            match option.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    overrides.push((key.trim().to_string(), value.to_string()));
                }
                _ => rejected.push(option.clone()),
            }
        }

        if let Some(level) = self.log_level {
            overrides.push(("log.output_log_level".to_string(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("log.file_log_level".to_string(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("log.log_file".to_string(), path.display().to_string()));
        }

        (overrides, rejected)
    }
}
