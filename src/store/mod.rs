// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launcher order files (`dlc_load.json`, `game_data.json`).
//!
//! ```text
//! load:   file --> JSON object (missing/invalid: empty object, logged)
//! edit:   set_list("enabled_mods" | "modsOrder", ...)
//! stage:  JSON --> tmp beside file   (2-space indent)
//! commit: rm  file.bak
//!         mv  file --> file.bak       (warn on failure)
//!         tmp --> file                (atomic rename)
//! ```
//!
//! Staging every file before committing any keeps a serialization or
//! temp-file failure from leaving one launcher file rewritten and the other
//! not.
//!
//! Keys the sorter does not touch are written back as read, in their
//! original order.

#[cfg(test)]
mod tests;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::error::{FsError, Result};

/// `dlc_load.json` key holding enabled external ids.
pub const ENABLED_MODS_KEY: &str = "enabled_mods";
/// `game_data.json` key holding registry keys in load order.
pub const MODS_ORDER_KEY: &str = "modsOrder";

/// A JSON order file and its backup location.
#[derive(Debug, Clone)]
pub struct OrderFile {
    path: PathBuf,
    backup: PathBuf,
    data: Map<String, Value>,
}

impl OrderFile {
    /// Read `path`. A missing or malformed file yields an empty object.
    #[must_use]
    pub fn load(path: &Path, backup: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    error!("Open JSON error: {} is not an object", path.display());
                    Map::new()
                }
                Err(e) => {
                    error!("Open JSON error: {}: {e}", path.display());
                    Map::new()
                }
            },
            Err(e) => {
                error!("Open JSON error: {}: {e}", path.display());
                Map::new()
            }
        };
        debug!(path = %path.display(), keys = data.len(), "order file loaded");
        Self {
            path: path.to_path_buf(),
            backup: backup.to_path_buf(),
            data,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    #[must_use]
    pub const fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// String members of the array under `key`; anything else is ignored.
    #[must_use]
    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.data
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace (or add) the array under `key`.
    pub fn set_list(&mut self, key: &str, values: Vec<String>) {
        let values = values.into_iter().map(Value::String).collect();
        self.data.insert(key.to_string(), Value::Array(values));
    }

    /// Serialized file content.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.data).context("JSON encode error")
    }

    /// Serialize the document into a temporary file next to it.
    ///
    /// Neither the file nor its backup is touched until the returned
    /// [`StagedWrite`] is committed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the temporary file cannot
    /// be created or written.
    pub fn stage(&self) -> Result<StagedWrite<'_>> {
        let content = self.to_pretty_string()?;
        let temp = stage_bytes(&self.path, content.as_bytes())?;
        debug!("Staged {}", self.path.display());
        Ok(StagedWrite { file: self, temp })
    }

    /// Stage and commit in one step.
    ///
    /// # Errors
    ///
    /// See [`stage`](Self::stage) and [`StagedWrite::commit`].
    pub fn write(&self) -> Result<()> {
        self.stage()?.commit()
    }
}

/// New content for an [`OrderFile`], waiting in a temporary file.
#[derive(Debug)]
pub struct StagedWrite<'a> {
    file: &'a OrderFile,
    temp: tempfile::NamedTempFile,
}

impl StagedWrite<'_> {
    /// Rotate the backup and move the staged content into place.
    ///
    /// # Errors
    ///
    /// Returns an error if the staged file cannot be moved into place.
    /// Backup failures are only logged.
    pub fn commit(self) -> Result<()> {
        let OrderFile { path, backup, .. } = self.file;
        if backup.exists()
            && let Err(e) = std::fs::remove_file(backup)
        {
            warn!("Could not remove {}: {e}", backup.display());
        }
        if path.exists()
            && let Err(e) = std::fs::rename(path, backup)
        {
            warn!(
                "Could not back up {} to {}: {e}",
                path.display(),
                backup.display()
            );
        }

        self.temp
            .persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// # Errors
///
/// Returns `FsError` if the temporary file cannot be created, written, or
/// moved into place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    stage_bytes(path, bytes)?
        .persist(path)
        .map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}

fn stage_bytes(path: &Path, bytes: &[u8]) -> Result<tempfile::NamedTempFile> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp =
        tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
    temp.write_all(bytes)
        .and_then(|()| temp.flush())
        .map_err(|e| FsError::from_io(temp.path(), e))?;
    Ok(temp)
}

/// Copy `src` to `dst`, creating parent directories of `dst` as needed.
///
/// # Errors
///
/// Returns `FsError` if `src` cannot be read or `dst` cannot be written.
pub fn backup_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;
    }
    let bytes = std::fs::read(src).map_err(|e| FsError::from_io(src, e))?;
    write_atomic(dst, &bytes)?;
    info!("Backed up {} to {}", src.display(), dst.display());
    Ok(())
}
