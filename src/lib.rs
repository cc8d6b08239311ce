// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        config / release / list
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |         provider          |
//!              | metadata  name  patch     |
//!              | commit    configuration   |
//!              '-------------+-------------'
//!                            |
//!                          store
//!                     (dir listing)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use confrev::provider::configuration::ProviderConfiguration;
//! use confrev::provider::{ConfigInfoProvider, JsonConfigInfoProvider};
//!
//! let provider = JsonConfigInfoProvider::new(
//!     ProviderConfiguration::builder()
//!         .config_name_field("name")
//!         .config_author_field("author")
//!         .config_version_field("version")
//!         .configs_version_field("rules_version")
//!         .build()?,
//! );
//!
//! let info = provider.config_info("bob", r#"{"name":"foo","author":"alice","version":3}"#)?;
//! assert_eq!(info.version, 4);
//! assert_eq!(info.commit_message, "Updating rule: foo to version: 4");
//! assert_eq!(
//!     info.files_content["foo.json"],
//!     r#"{"name":"foo","author": "bob","version": 4}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod store;
