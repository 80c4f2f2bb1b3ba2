// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. user config (<config dir>/stellaris-mod-sorter/config.toml)
//! 3. local modsort.toml (cwd)
//! 4. --config
//! 5. MODSORT_* env vars
//! 6. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODSORT_GLOBAL__DRY=true          → global.dry = true
//! MODSORT_PATHS__SETTINGS=/path     → paths.settings = "/path"
//! MODSORT_PATHS__BACKUP_EXT=.old    → paths.backup_ext = ".old"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, OrderConfig};

/// Application name used for the user configuration directory.
pub const APP_NAME: &str = "stellaris-mod-sorter";

/// Local configuration file looked up in the working directory.
pub const LOCAL_CONFIG: &str = "modsort.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MODSORT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Launcher file locations.
    pub paths: PathsConfig,
    /// Ordering heuristics.
    pub order: OrderConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stellaris_mod_sorter::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modsort.toml")
    ///     .with_env_prefix("MODSORT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Path of the per-user configuration file, if the platform has one.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Reject values that would make a run destructive or meaningless.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        for (key, value) in [
            ("registry", &self.paths.registry),
            ("enabled", &self.paths.enabled),
            ("display", &self.paths.display),
            ("descriptor", &self.paths.descriptor),
        ] {
            if value.trim().is_empty() {
                return Err(invalid("paths", key, "file name must not be empty").into());
            }
        }
        // An empty extension would make the backup overwrite the file itself.
        if self.paths.backup_ext.is_empty() {
            return Err(invalid("paths", "backup_ext", "must not be empty").into());
        }
        if self.order.special_names.iter().any(String::is_empty) {
            return Err(invalid("order", "special_names", "entries must not be empty").into());
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_order_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "paths.settings".into(),
            self.paths
                .settings
                .as_ref()
                .map_or_else(|| "(search)".to_string(), |p| p.display().to_string()),
        );
        options.insert("paths.registry".into(), self.paths.registry.clone());
        options.insert("paths.enabled".into(), self.paths.enabled.clone());
        options.insert("paths.display".into(), self.paths.display.clone());
        options.insert("paths.descriptor".into(), self.paths.descriptor.clone());
        options.insert("paths.overrides".into(), self.paths.overrides.clone());
        options.insert("paths.backup_ext".into(), self.paths.backup_ext.clone());
    }

    fn format_order_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("order.front_tags".into(), self.order.front_tags.join(", "));
        options.insert("order.back_tags".into(), self.order.back_tags.join(", "));
        options.insert("order.patch_tag".into(), self.order.patch_tag.clone());
        options.insert(
            "order.special_names".into(),
            self.order.special_names.join(", "),
        );
    }
}
