// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --settings DIR    ← paths.settings override
//! --dry             ← Print the order, write nothing
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← global.log_file override
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Stellaris user data directory (contains mods_registry.json).
    #[arg(long = "settings", value_name = "DIR", env = "STELLARIS_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Prints the resulting order without writing any file.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'paths.backup_ext=.old' or 'order/patch_tag=Patches'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append,
        value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Disables auto loading of config files, only uses --config.
    #[arg(long = "no-default-configs")]
    pub no_default_configs: bool,
}

/// Parses `section/key=value` or `section.key=value` into a dotted key and
/// its value.
///
/// # Errors
///
/// Returns a message if there is no `=` or the key is empty.
pub fn parse_option(option: &str) -> Result<(String, String), String> {
    let Some((key, value)) = option.split_once('=') else {
        return Err(format!("'{option}' is not of the form KEY=VALUE"));
    };
    let key = key.trim().replace('/', ".");
    if key.is_empty() || key.starts_with('.') || key.ends_with('.') {
        return Err(format!("'{option}' has an invalid key"));
    }
    Ok((key, value.to_string()))
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".to_string(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".to_string(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".to_string(), path.display().to_string()));
        }

        if self.dry {
            overrides.push(("global.dry".to_string(), "true".to_string()));
        }

        if let Some(ref settings) = self.settings {
            overrides.push(("paths.settings".to_string(), settings.display().to_string()));
        }

        overrides
    }
}
