// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-place field rewriting.
//!
//! The submitted text is never re-serialized. A [`FieldPatch`] locates the
//! first `"key": value` span and swaps it for `"key": <new value>`; every
//! other byte is copied through untouched.
//!
//! ```text
//! {"rule_name": "foo",  "rule_version" :3, ...}
//!                       '---------------'
//!                              |
//!                              v
//! {"rule_name": "foo",  "rule_version": 4, ...}
//! ```
//!
//! A pattern that matches nothing leaves the text as it was.

use std::borrow::Cow;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::error::ConfigError;

/// Next version after `current`, `None` on overflow.
#[must_use]
pub const fn next_version(current: u64) -> Option<u64> {
    current.checked_add(1)
}

/// Rewrites the value of one top-level-looking key.
#[derive(Debug, Clone)]
pub struct FieldPatch {
    field: String,
    pattern: Regex,
}

impl FieldPatch {
    /// Patch for `"field": <digits>`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the derived pattern does not compile.
    pub fn version(field: &str) -> Result<Self, ConfigError> {
        Self::with_value_pattern(field, r"\d+")
    }

    /// Patch for `"field": "<string>"`, escaped quotes included.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the derived pattern does not compile.
    pub fn author(field: &str) -> Result<Self, ConfigError> {
        Self::with_value_pattern(field, r#""(?:[^"\\]|\\.)*""#)
    }

    fn with_value_pattern(field: &str, value_pattern: &str) -> Result<Self, ConfigError> {
        let source = format!(r#""{}"\s*:\s*{value_pattern}"#, regex::escape(field));
        let pattern = Regex::new(&source).map_err(|e| ConfigError::InvalidPattern {
            pattern: source.clone(),
            source: Box::new(e),
        })?;
        Ok(Self {
            field: field.to_string(),
            pattern,
        })
    }

    /// The key this patch rewrites.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The compiled search pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Replacement text for the matched span, e.g. `"rule_version": 4`.
    #[must_use]
    pub fn replacement(&self, value: &serde_json::Value) -> String {
        format!("{}: {value}", serde_json::Value::from(self.field.as_str()))
    }

    /// Replace the first match in `text` with `"field": value`.
    ///
    /// Returns the input borrowed when nothing matches.
    #[must_use]
    pub fn apply_first<'t>(&self, text: &'t str, value: &serde_json::Value) -> Cow<'t, str> {
        let replacement = self.replacement(value);
        let patched = self.pattern.replacen(text, 1, NoExpand(&replacement));
        if matches!(patched, Cow::Borrowed(_)) {
            debug!(field = %self.field, "field pattern did not match, text left unchanged");
        }
        patched
    }
}
