// ABOUTME: Loads missions, training logs, and reference tables from JSON files
// ABOUTME: Wraps I/O and parse failures in AppError with the offending path attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use apex_core::errors::{AppError, AppResult, ErrorCode};
use apex_core::models::{Mission, TrainingLog};
use apex_intelligence::{DrillLibrary, ObjectiveTable};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Read and deserialize a JSON file
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and `InvalidFormat` if
/// its contents do not match `T`
pub fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let resource = path.display().to_string();
    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_resource_id(resource.clone()))?;
    let value = serde_json::from_str(&contents).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{resource} is not valid input: {e}"),
        )
        .with_resource_id(resource.clone())
        .with_source(e)
    })?;
    debug!(path = %resource, bytes = contents.len(), "Loaded JSON input");
    Ok(value)
}

/// Load a single mission
///
/// # Errors
///
/// See [`load_json`]
pub fn load_mission(path: &Path) -> AppResult<Mission> {
    load_json(path)
}

/// Load every mission in a JSON array
///
/// # Errors
///
/// See [`load_json`]
pub fn load_missions(path: &Path) -> AppResult<Vec<Mission>> {
    load_json(path)
}

/// Load training logs; a missing path yields no logs
///
/// # Errors
///
/// See [`load_json`]
pub fn load_logs(path: Option<&Path>) -> AppResult<Vec<TrainingLog>> {
    path.map_or_else(|| Ok(Vec::new()), load_json)
}

/// Load a drill library, falling back to the built-in one
///
/// # Errors
///
/// See [`load_json`]
pub fn load_drill_library(path: Option<&Path>) -> AppResult<DrillLibrary> {
    path.map_or_else(|| Ok(DrillLibrary::builtin().clone()), load_json)
}

/// Load an objective table, falling back to the built-in one
///
/// # Errors
///
/// See [`load_json`]
pub fn load_objective_table(path: Option<&Path>) -> AppResult<ObjectiveTable> {
    path.map_or_else(|| Ok(ObjectiveTable::builtin().clone()), load_json)
}
