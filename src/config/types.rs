// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, OrderConfig
//! ```
//!
//! # Ordering Heuristics
//!
//! ```text
//! front_tags    OST, Music, Sound, Graphics   moved back first
//! back_tags     AI, Utilities, Fixes          moved back last
//! patch_tag     Patch                         appended after back_tags
//! special_names UI Overhaul Dynamic, Dark UI, Dark U1
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Compute and print the order without writing any file.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Hard-coded placement heuristics of the ordering engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderConfig {
    /// Tags whose members are moved to the back of the list first.
    pub front_tags: Vec<String>,
    /// Tags whose members are moved to the very end.
    pub back_tags: Vec<String>,
    /// Tag whose members join `back_tags` without duplicates.
    pub patch_tag: String,
    /// Display-name substrings clustered together, in priority order.
    pub special_names: Vec<String>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        let owned = |names: &[&str]| -> Vec<String> {
            names.iter().map(ToString::to_string).collect()
        };
        Self {
            front_tags: owned(&["OST", "Music", "Sound", "Graphics"]),
            back_tags: owned(&["AI", "Utilities", "Fixes"]),
            patch_tag: "Patch".to_string(),
            special_names: owned(&["UI Overhaul Dynamic", "Dark UI", "Dark U1"]),
        }
    }
}
