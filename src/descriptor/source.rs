// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Where descriptor chunks come from.
//!
//! ```text
//! FsDescriptorSource
//!   <dirPath>/descriptor.mod          first choice
//!   <archivePath>!descriptor.mod      when the directory has none
//!   <settings>/mod/<external id>      appended when one of the above exists
//! MemoryDescriptorSource
//!   registry key --> chunks           tests and dry experiments
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;

use tracing::{debug, warn};

use crate::config::paths::PathsConfig;
use crate::error::Result;
use crate::order::Package;
use crate::registry::RegistryEntry;
use crate::utility::encoding::decode_text;

/// Supplies the descriptor text chunks of one package.
///
/// An empty result means the package has no readable descriptor and keeps
/// no tags and no dependencies.
pub trait DescriptorSource {
    fn chunks(&self, package: &Package, entry: Option<&RegistryEntry>) -> Vec<String>;
}

/// Reads descriptors from mod directories and the settings override folder.
#[derive(Debug, Clone)]
pub struct FsDescriptorSource {
    settings: PathBuf,
    paths: PathsConfig,
}

impl FsDescriptorSource {
    #[must_use]
    pub fn new(settings: &Path, paths: &PathsConfig) -> Self {
        Self {
            settings: settings.to_path_buf(),
            paths: paths.clone(),
        }
    }
}

impl DescriptorSource for FsDescriptorSource {
    fn chunks(&self, package: &Package, entry: Option<&RegistryEntry>) -> Vec<String> {
        let Some(dir) = entry.and_then(RegistryEntry::dir_path).map(Path::new) else {
            return Vec::new();
        };
        if !dir.is_dir() {
            debug!(name = package.sort_key(), dir = %dir.display(), "mod directory missing");
            return Vec::new();
        }

        let descriptor = dir.join(&self.paths.descriptor);
        let own = read_chunk(&descriptor).or_else(|| {
            let archive = entry
                .and_then(RegistryEntry::archive_path)
                .map(Path::new)
                .filter(|archive| archive.is_file())?;
            match read_archive_entry(archive, &self.paths.descriptor) {
                Ok(chunk) => chunk,
                Err(e) => {
                    warn!("{}: {e:#}", package.sort_key());
                    None
                }
            }
        });
        let Some(own) = own else {
            return Vec::new();
        };

        let mut chunks = vec![own];
        if let Some(extra) = read_chunk(
            &self
                .paths
                .override_path(&self.settings, package.external_id()),
        ) {
            chunks.push(extra);
        }
        chunks
    }
}

fn read_chunk(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match std::fs::read(path) {
        Ok(bytes) => Some(decode_text(&bytes).into_owned()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read descriptor");
            None
        }
    }
}

/// Read `name` from the root of the zip archive at `archive`.
///
/// Returns `Ok(None)` when the archive has no such entry.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or decompressed.
pub fn read_archive_entry(archive: &Path, name: &str) -> Result<Option<String>> {
    let file = File::open(archive)
        .with_context(|| format!("Could not open archive {}", archive.display()))?;
    let mut zip = zip::ZipArchive::new(file)
        .with_context(|| format!("Could not read archive {}", archive.display()))?;

    let mut entry = match zip.by_name(name) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => {
            debug!(archive = %archive.display(), name, "no descriptor in archive");
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Could not read {name} from {}", archive.display())
            });
        }
    };
    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .with_context(|| format!("Could not read {name} from {}", archive.display()))?;
    Ok(Some(decode_text(&bytes).into_owned()))
}

/// Descriptor chunks keyed by registry key.
#[derive(Debug, Clone, Default)]
pub struct MemoryDescriptorSource {
    chunks: HashMap<String, Vec<String>>,
}

impl MemoryDescriptorSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` to the chunks of `registry_key`.
    pub fn insert(&mut self, registry_key: impl Into<String>, chunk: impl Into<String>) {
        self.chunks
            .entry(registry_key.into())
            .or_default()
            .push(chunk.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, registry_key: impl Into<String>, chunk: impl Into<String>) -> Self {
        self.insert(registry_key, chunk);
        self
    }
}

impl DescriptorSource for MemoryDescriptorSource {
    fn chunks(&self, package: &Package, _entry: Option<&RegistryEntry>) -> Vec<String> {
        self.chunks
            .get(package.registry_key())
            .cloned()
            .unwrap_or_default()
    }
}
