// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config name rules.
//!
//! ```text
//! name="foo" prefix="team"
//!   candidate_name  --> "foo_team"   (checked against the pattern)
//!   qualified_name  --> "team-foo"   (commit message and filename)
//! ```

use regex::Regex;

use crate::error::{ConfigError, RevisionError, RevisionResult};

/// Name used for pattern validation: `name_prefix`, or `name` alone.
#[must_use]
pub fn candidate_name(name: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{name}_{prefix}"),
        None => name.to_string(),
    }
}

/// Name used for commit messages and filenames: `prefix-name`, or `name` alone.
#[must_use]
pub fn qualified_name(name: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}-{name}"),
        None => name.to_string(),
    }
}

/// Compiled full-match name pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    anchored: Regex,
}

impl NamePattern {
    /// Compile `pattern` so that only whole-string matches are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let anchored =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source: Box::new(e),
            })?;
        Ok(Self {
            source: pattern.to_string(),
            anchored,
        })
    }

    /// The pattern as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.anchored.is_match(candidate)
    }

    /// Check `candidate` against the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RevisionError::InvalidName`] carrying the candidate on mismatch.
    pub fn validate(&self, candidate: &str) -> RevisionResult<()> {
        if self.is_match(candidate) {
            Ok(())
        } else {
            Err(RevisionError::InvalidName {
                name: candidate.to_string(),
            })
        }
    }
}
