// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration and settings directory discovery.
//!
//! ```text
//! <settings>/
//!   mods_registry.json   (registry)
//!   dlc_load.json        (enabled)
//!   game_data.json       (display)
//!   mod/<external id>    (descriptor overrides)
//! ```
//!
//! Search order when `settings` is unset:
//!
//! ```text
//! .  ..  ~/Documents/Paradox Interactive/Stellaris
//!        ~/.local/share/Paradox Interactive/Stellaris
//!        <documents>/Paradox Interactive/Stellaris
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RegistryError, Result};

const PARADOX_DIR: &str = "Paradox Interactive";
const GAME_DIR: &str = "Stellaris";

/// Launcher file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Stellaris user data directory; searched for when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<PathBuf>,
    /// Registry file name.
    pub registry: String,
    /// Enabled mods file name.
    pub enabled: String,
    /// Display order file name.
    pub display: String,
    /// Descriptor file name inside a mod directory.
    pub descriptor: String,
    /// Directory (relative to settings) holding descriptor overrides.
    pub overrides: String,
    /// Extension appended to backups.
    pub backup_ext: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            settings: None,
            registry: "mods_registry.json".to_string(),
            enabled: "dlc_load.json".to_string(),
            display: "game_data.json".to_string(),
            descriptor: "descriptor.mod".to_string(),
            overrides: "mod".to_string(),
            backup_ext: ".bak".to_string(),
        }
    }
}

impl PathsConfig {
    /// Directories probed for the registry file, in priority order.
    ///
    /// An explicit `settings` directory is the only candidate.
    #[must_use]
    pub fn settings_candidates(&self) -> Vec<PathBuf> {
        if let Some(settings) = &self.settings {
            return vec![settings.clone()];
        }

        let mut candidates = vec![PathBuf::from("."), PathBuf::from("..")];
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join("Documents").join(PARADOX_DIR).join(GAME_DIR));
            candidates.push(
                home.join(".local")
                    .join("share")
                    .join(PARADOX_DIR)
                    .join(GAME_DIR),
            );
        }
        if let Some(documents) = dirs::document_dir() {
            let candidate = documents.join(PARADOX_DIR).join(GAME_DIR);
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
        candidates
    }

    /// Locate the settings directory containing the registry file.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SettingsNotFound` if no candidate contains
    /// the registry file.
    pub fn discover_settings(&self) -> Result<PathBuf> {
        let candidates = self.settings_candidates();
        if let Some(found) = candidates
            .iter()
            .find(|dir| dir.join(&self.registry).is_file())
        {
            return Ok(found.clone());
        }

        let searched = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(RegistryError::SettingsNotFound {
            file: self.registry.clone(),
            searched,
        }
        .into())
    }

    #[must_use]
    pub fn registry_path(&self, settings: &Path) -> PathBuf {
        settings.join(&self.registry)
    }

    #[must_use]
    pub fn enabled_path(&self, settings: &Path) -> PathBuf {
        settings.join(&self.enabled)
    }

    #[must_use]
    pub fn display_path(&self, settings: &Path) -> PathBuf {
        settings.join(&self.display)
    }

    /// Override descriptor for the mod with `external_id`.
    #[must_use]
    pub fn override_path(&self, settings: &Path, external_id: &str) -> PathBuf {
        settings.join(&self.overrides).join(external_id)
    }

    /// Backup location for `path`.
    #[must_use]
    pub fn backup_path(&self, path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(&self.backup_ext);
        PathBuf::from(name)
    }
}
