// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Provider --> Command Dispatch
//!   Config | Release | ReleaseVersion | List | Options | Settings
//! ```

use std::process::ExitCode;

use anyhow::Context;
use confrev::cli::global::GlobalOptions;
use confrev::cli::{self, Command};
use confrev::cmd::revise::{
    run_config_command, run_list_command, run_release_command, run_release_version_command,
};
use confrev::cmd::settings::{run_options_command, run_settings_command};
use confrev::config::Settings;
use confrev::config::loader::ConfigLoader;
use confrev::logging::{LogConfig, LogLevel, init_logging};
use confrev::provider::JsonConfigInfoProvider;
use confrev::provider::configuration::ProviderConfiguration;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_SETTINGS_FILE: &str = "confrev.toml";
const ENV_PREFIX: &str = "CONFREV";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let settings = match load_settings(&cli.global) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&settings);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &settings).await
}

fn build_log_config(settings: &Settings) -> LogConfig {
    LogConfig::builder()
        .with_console_level(settings.log.output_log_level)
        .with_file_level(settings.log.file_log_level)
        .maybe_with_log_file(
            settings
                .log
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_show_target(settings.log.output_log_level == LogLevel::DUMP)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, settings: &Settings) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(settings);
            Ok(())
        }
        Some(Command::Settings) => {
            let loader = build_settings_loader(&cli.global);
            run_settings_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Config(args)) => match build_provider(settings) {
            Ok(provider) => run_config_command(args, &provider).await,
            Err(e) => Err(e),
        },
        Some(Command::Release(args)) => match build_provider(settings) {
            Ok(provider) => run_release_command(args, &provider).await,
            Err(e) => Err(e),
        },
        Some(Command::ReleaseVersion(args)) => build_provider(settings)
            .and_then(|provider| run_release_version_command(args, &provider)),
        Some(Command::List(args)) => {
            build_provider(settings).and_then(|provider| run_list_command(args, &provider))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_settings_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = Settings::builder();
    if !global.no_default_settings {
        loader = loader.add_toml_file_optional(DEFAULT_SETTINGS_FILE);
    }
    for path in &global.settings {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_settings(global: &GlobalOptions) -> confrev::error::Result<Settings> {
    let (overrides, rejected) = global.to_settings_overrides();
    if let Some(option) = rejected.first() {
        anyhow::bail!("invalid --set option '{option}', expected KEY=VALUE");
    }

    let mut loader = build_settings_loader(global);
    for (key, value) in overrides {
        loader = loader
            .set(&key, value)
            .with_context(|| format!("invalid override for '{key}'"))?;
    }
    Ok(loader.build()?)
}

fn build_provider(settings: &Settings) -> confrev::error::Result<JsonConfigInfoProvider> {
    let configuration = ProviderConfiguration::from_settings(&settings.provider)
        .context("invalid [provider] settings")?;
    Ok(JsonConfigInfoProvider::new(configuration))
}
