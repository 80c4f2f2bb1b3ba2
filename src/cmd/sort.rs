// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sort command implementation.
//!
//! ```text
//! discover settings
//!   --> load dlc_load.json, game_data.json, mods_registry.json
//!   --> order::sort_mods()
//!   --> write both order files (skipped with --dry)
//!   --> print "i: name"
//! ```

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::descriptor::source::FsDescriptorSource;
use crate::error::{Result, SorterError};
use crate::order::{SortOutcome, sort_mods};
use crate::registry::Registry;
use crate::store::{ENABLED_MODS_KEY, MODS_ORDER_KEY, OrderFile};

/// Main handler for the sort command.
///
/// # Errors
///
/// Returns an error if the settings directory cannot be found, the registry
/// cannot be read, ordering fails, or the order files cannot be written.
pub fn run_sort_command(config: &Config) -> Result<()> {
    let settings = config.paths.discover_settings()?;
    info!("Found Stellaris settings at {}", settings.display());

    let outcome = sort_settings(&settings, config)?;
    for line in format_order(&outcome.names) {
        println!("{line}");
    }
    info!("done");
    Ok(())
}

/// Sort the mods registered in `settings` and update its order files.
///
/// Nothing is written when `global.dry` is set.
///
/// # Errors
///
/// Returns an error if the registry cannot be read, ordering fails, or the
/// order files cannot be written.
pub fn sort_settings(settings: &Path, config: &Config) -> Result<SortOutcome> {
    let paths = &config.paths;

    let enabled_path = paths.enabled_path(settings);
    let display_path = paths.display_path(settings);
    let mut enabled_file = OrderFile::load(&enabled_path, &paths.backup_path(&enabled_path));
    let mut display_file = OrderFile::load(&display_path, &paths.backup_path(&display_path));

    let registry = Registry::load(&paths.registry_path(settings))?;
    let enabled = enabled_file.string_list(ENABLED_MODS_KEY);
    let source = FsDescriptorSource::new(settings, paths);

    let outcome =
        sort_mods(&registry, &enabled, &source, &config.order).map_err(SorterError::from)?;

    enabled_file.set_list(ENABLED_MODS_KEY, outcome.enabled_mods.clone());
    display_file.set_list(MODS_ORDER_KEY, outcome.display_order.clone());

    if config.global.dry {
        info!("[dry] not writing {}", enabled_file.path().display());
        info!("[dry] not writing {}", display_file.path().display());
    } else {
        let staged = [enabled_file.stage()?, display_file.stage()?];
        for write in staged {
            write.commit()?;
        }
    }

    Ok(outcome)
}

/// `i: name` lines for the final order.
#[must_use]
pub fn format_order(names: &[String]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{i}: {name}"))
        .collect()
}
