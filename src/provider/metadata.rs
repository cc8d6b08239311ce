// confrev: Config Revision Mutator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field extraction from submitted JSON text.
//!
//! The text is parsed only to read and type-check fields; the parsed value is
//! never written back.

use serde_json::{Map, Value};

use crate::error::{ArtifactKind, RevisionError, RevisionResult};

/// Field names read from a config payload.
#[derive(Debug, Clone, Copy)]
pub struct ConfigFields<'a> {
    pub name: &'a str,
    pub prefix: Option<&'a str>,
    pub author: &'a str,
    pub version: &'a str,
}

/// Type-checked values of a config payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub name: String,
    pub prefix: Option<String>,
    pub author: String,
    pub version: u64,
}

/// Parse `raw` into a JSON object.
///
/// # Errors
///
/// Returns [`RevisionError::MalformedConfig`] if `raw` is not valid JSON or is
/// not an object.
pub fn parse_metadata(raw: &str, artifact: ArtifactKind) -> RevisionResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(RevisionError::malformed(artifact)),
    }
}

/// Read and type-check the config fields.
///
/// # Errors
///
/// Returns [`RevisionError::MalformedConfig`] if a field is missing or has the
/// wrong type, or the prefix field is configured but absent.
pub fn extract_config_metadata(raw: &str, fields: ConfigFields<'_>) -> RevisionResult<ConfigMetadata> {
    const ARTIFACT: ArtifactKind = ArtifactKind::Config;
    let metadata = parse_metadata(raw, ARTIFACT)?;

    let version = version_field(&metadata, fields.version, ARTIFACT)?;
    let author = string_field(&metadata, fields.author, ARTIFACT)?;
    let name = string_field(&metadata, fields.name, ARTIFACT)?;
    let prefix = fields
        .prefix
        .map(|key| string_field(&metadata, key, ARTIFACT))
        .transpose()?;

    Ok(ConfigMetadata {
        name,
        prefix,
        author,
        version,
    })
}

/// Read the aggregate version from a release manifest.
///
/// # Errors
///
/// Returns [`RevisionError::MalformedConfig`] if `raw` is not a JSON object or
/// the version field is missing or not a non-negative integer.
pub fn extract_release_version(raw: &str, field: &str) -> RevisionResult<u64> {
    let metadata = parse_metadata(raw, ArtifactKind::Release)?;
    version_field(&metadata, field, ArtifactKind::Release)
}

fn string_field(
    metadata: &Map<String, Value>,
    key: &str,
    artifact: ArtifactKind,
) -> RevisionResult<String> {
    metadata
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| RevisionError::malformed(artifact))
}

// Negative and fractional numbers are rejected.
fn version_field(
    metadata: &Map<String, Value>,
    key: &str,
    artifact: ArtifactKind,
) -> RevisionResult<u64> {
    metadata
        .get(key)
        .and_then(Value::as_u64)
        .ok_or_else(|| RevisionError::malformed(artifact))
}
