// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set()
//!        |
//!        v
//!    build() --> Settings
//! ```

use std::path::PathBuf;

use super::Settings;
use crate::error::ConfigError;

/// Builder for loading settings from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: Option<(String, config::Map<String, String>)>,
    files: Vec<(String, PathBuf)>,
}

/// Settings sections that environment variables may address.
const ENV_SECTIONS: &[&str] = &["log", "provider"];

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML settings file to the loader.
    ///
    /// The file is read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` returns an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables from the process environment.
    ///
    /// Other variables sharing the prefix, such as `CONFREV_COMMITTER`, are
    /// left to the CLI.
    #[must_use]
    pub fn with_env_prefix(self, prefix: &str) -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        self.with_env_vars(prefix, vars)
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables from `vars`.
    #[must_use]
    pub fn with_env_vars<I>(mut self, prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let head = format!("{}_", prefix.to_ascii_lowercase());
        let settings_vars = vars
            .into_iter()
            .filter(|(key, _)| is_settings_var(&head, key))
            .collect();
        self.env = Some((prefix.to_string(), settings_vars));
        self
    }

    /// Sets a settings override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(
        mut self,
        key: &str,
        value: T,
    ) -> std::result::Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required settings files are missing.
    /// - Settings files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged sources cannot be deserialized into [`Settings`].
    pub fn build(self) -> std::result::Result<Settings, ConfigError> {
        let builder = match self.env {
            Some((prefix, vars)) => self.builder.add_source(
                config::Environment::with_prefix(&prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

fn is_settings_var(head: &str, key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.strip_prefix(head).is_some_and(|rest| {
        ENV_SECTIONS.iter().any(|section| {
            rest.strip_prefix(section)
                .is_some_and(|tail| tail.starts_with("__"))
        })
    })
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
