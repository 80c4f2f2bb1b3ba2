// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launcher mod registry (`mods_registry.json`).
//!
//! ```text
//! {
//!   "<registry key>": {
//!     "displayName":    "Dark UI",
//!     "gameRegistryId": "mod/ugc_1.mod",   external id, wins if non-empty
//!     "steamId":        "1",               external id fallback
//!     "dirPath":        "/.../1",          descriptor lookup
//!     "archivePath":    "/.../1.zip"
//!   }
//! }
//! ```
//!
//! Entries without a display name or an external id never reach the mod
//! list. Keys are kept in a `BTreeMap`, so every lookup that could match
//! several entries picks the smallest key.

pub mod schema;


use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::order::Package;

/// Maps a dependency name to the registry key of the mod it names.
///
/// Isolated so a stricter strategy (by id, failing on ambiguity) can
/// replace the name match without touching the passes.
pub trait DependencyResolver {
    fn resolve(&self, name: &str) -> Option<&str>;
}

/// One registry entry. Only the fields the sorter reads are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub game_registry_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub steam_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dir_path: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub archive_path: Option<String>,
}

impl RegistryEntry {
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.display_name.as_deref())
    }

    /// `gameRegistryId`, or `steamId` when the former is empty.
    #[must_use]
    pub fn external_id(&self) -> Option<&str> {
        non_empty(self.game_registry_id.as_deref()).or_else(|| non_empty(self.steam_id.as_deref()))
    }

    #[must_use]
    pub fn dir_path(&self) -> Option<&str> {
        non_empty(self.dir_path.as_deref())
    }

    #[must_use]
    pub fn archive_path(&self) -> Option<&str> {
        non_empty(self.archive_path.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Non-string values are treated as absent, matching how the launcher
/// tolerates them.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// The decoded registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl Registry {
    /// Decode registry JSON.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Decode` if the content is not an object of
    /// objects.
    pub fn from_json_str(content: &str) -> std::result::Result<Self, RegistryError> {
        let entries: BTreeMap<String, RegistryEntry> =
            serde_json::from_str(content).map_err(|e| RegistryError::Decode {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { entries })
    }

    /// Read and decode the registry file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not open {}", path.display()))?;
        let registry = Self::from_json_str(&content).map_err(|e| match e {
            RegistryError::Decode { message, .. } => RegistryError::Decode {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), entries = registry.len(), "registry loaded");
        Ok(registry)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RegistryEntry> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: RegistryEntry) {
        self.entries.insert(key.into(), entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Usable entries as packages, sorted by descending sort key.
    ///
    /// Equal sort keys keep ascending registry key order.
    #[must_use]
    pub fn packages(&self) -> Vec<Package> {
        let mut packages: Vec<Package> = self
            .iter()
            .filter_map(|(key, entry)| {
                let (Some(name), Some(external_id)) = (entry.display_name(), entry.external_id())
                else {
                    debug!(key, "registry entry without name or id skipped");
                    return None;
                };
                Some(
                    Package::builder()
                        .registry_key(key)
                        .display_name(name)
                        .external_id(external_id)
                        .build(),
                )
            })
            .collect();
        packages.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
        packages
    }
}

impl DependencyResolver for Registry {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(_, entry)| entry.display_name.as_deref() == Some(name))
            .map(|(key, _)| key)
    }
}

impl FromIterator<(String, RegistryEntry)> for Registry {
    fn from_iter<I: IntoIterator<Item = (String, RegistryEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
