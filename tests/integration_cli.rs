// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use confrev::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["confrev", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["confrev", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["confrev"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_settings_and_options() {
    let cli = Cli::try_parse_from(["confrev", "--no-default-settings", "settings"]).unwrap();
    assert!(cli.global.no_default_settings);
    assert!(matches!(cli.command, Some(Command::Settings)));

    let cli = Cli::try_parse_from(["confrev", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
}

// =============================================================================
// Revision Commands
// =============================================================================

#[test]
fn cli_config_requires_committer() {
    // CONFREV_COMMITTER may satisfy the argument when set in the environment.
    if std::env::var_os("CONFREV_COMMITTER").is_none() {
        assert!(Cli::try_parse_from(["confrev", "config", "rule.json"]).is_err());
    }
}

#[test]
fn cli_config_with_write_dir() {
    let cli = Cli::try_parse_from([
        "confrev",
        "config",
        "rules/dns.json",
        "--committer",
        "alice",
        "-w",
        "out",
    ])
    .unwrap();
    let Some(Command::Config(args)) = cli.command else {
        panic!("expected config command");
    };
    assert_eq!(args.file, PathBuf::from("rules/dns.json"));
    assert_eq!(args.committer, "alice");
    assert_eq!(args.write_dir, Some(PathBuf::from("out")));
}

#[test]
fn cli_list_with_dir() {
    let cli = Cli::try_parse_from(["confrev", "list", "store"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.dir, PathBuf::from("store"));
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["confrev", "deploy"]).is_err());
}
