// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config, release, release-version, list, options, settings
//! ```

pub mod revise;
pub mod settings;

#[cfg(test)]
mod tests;
