// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON Schema validation of registry documents.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

use crate::error::{RegistryError, Result};

/// Schema describing the entries the sorter relies on.
pub const REGISTRY_SCHEMA: &str = include_str!("../../schema/mods_registry.schema.json");

/// Validate `instance` against `schema`, returning one line per violation.
///
/// # Errors
///
/// Returns `RegistryError::InvalidSchema` if `schema` does not compile.
pub fn validate_document(
    instance: &Value,
    schema: &Value,
    schema_name: &str,
) -> std::result::Result<Vec<String>, RegistryError> {
    let validator =
        jsonschema::validator_for(schema).map_err(|e| RegistryError::InvalidSchema {
            path: schema_name.to_string(),
            message: e.to_string(),
        })?;

    Ok(validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect())
}

/// Read a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not JSON.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Open JSON error: {}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| {
        RegistryError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// The embedded registry schema.
///
/// # Errors
///
/// Returns `RegistryError::InvalidSchema` if the embedded document is not JSON.
pub fn registry_schema() -> std::result::Result<Value, RegistryError> {
    serde_json::from_str(REGISTRY_SCHEMA).map_err(|e| RegistryError::InvalidSchema {
        path: "<embedded>".to_string(),
        message: e.to_string(),
    })
}

/// Validate the JSON file at `json_path` against `schema_path`, or against
/// the embedded registry schema when no schema path is given.
///
/// # Errors
///
/// Returns an error if either document cannot be read, the schema does not
/// compile, or the document violates the schema.
pub fn validate_file(json_path: &Path, schema_path: Option<&Path>) -> Result<()> {
    let (schema, schema_name) = match schema_path {
        Some(path) => (read_json(path)?, path.display().to_string()),
        None => (registry_schema()?, "<embedded>".to_string()),
    };
    let instance = read_json(json_path)?;

    let violations = validate_document(&instance, &schema, &schema_name)?;
    if violations.is_empty() {
        return Ok(());
    }
    for violation in &violations {
        tracing::error!("JSON validation error: {violation}");
    }
    Err(RegistryError::SchemaViolation {
        path: json_path.display().to_string(),
        count: violations.len(),
    }
    .into())
}
