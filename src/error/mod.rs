// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            RevisionError
//!                  |
//!   +--------+-----+------+-------------+
//!   |        |            |             |
//!   v        v            v             v
//! Malformed InvalidName MissingFile Configuration
//! (config |  (candidate) (release     Box<ConfigError>
//!  release)               filename)
//!
//! ConfigError (factory / settings time):
//!   MissingField, InvalidValue, InvalidPattern, Load
//! ```
//!
//! Request-time failures are [`RevisionError`]; the binary and command layer
//! wraps everything in `anyhow` via [`Result`].

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`RevisionError`].
pub type RevisionResult<T> = std::result::Result<T, RevisionError>;

/// Which artifact a malformed payload was submitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A single versioned config (rule).
    Config,
    /// The aggregate release manifest.
    Release,
}

impl ArtifactKind {
    /// Message used when a payload of this kind fails extraction.
    #[must_use]
    pub const fn malformed_message(self) -> &'static str {
        match self {
            Self::Config => "Wrong config json file format",
            Self::Release => "Wrong config release json file format",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Release => write!(f, "release"),
        }
    }
}

/// Errors returned by the revision operations.
#[derive(Debug, Error)]
pub enum RevisionError {
    /// Payload is not a JSON object or a required field is missing or mistyped.
    #[error("{}", .artifact.malformed_message())]
    MalformedConfig { artifact: ArtifactKind },

    /// Candidate name failed the configured name pattern.
    #[error("Wrong config name: {name}")]
    InvalidName { name: String },

    /// Release file is absent from the supplied file list.
    #[error("Missing filename: {filename}")]
    MissingFile { filename: String },

    /// Provider could not be constructed.
    #[error("configuration error: {0}")]
    Configuration(#[from] Box<ConfigError>),
}

impl RevisionError {
    pub(crate) const fn malformed(artifact: ArtifactKind) -> Self {
        Self::MalformedConfig { artifact }
    }
}

impl From<ConfigError> for RevisionError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(Box::new(err))
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required builder argument was never supplied.
    #[error("missing required argument '{key}' for the provider")]
    MissingField { key: String },

    /// A supplied value is unusable.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// A name or field pattern does not compile.
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// Settings sources could not be read or deserialized.
    #[error("failed to load settings")]
    Load(#[from] config::ConfigError),
}

impl ConfigError {
    pub(crate) fn missing(key: &str) -> Self {
        Self::MissingField {
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests;
