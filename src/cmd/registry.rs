// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry maintenance commands.

use std::path::PathBuf;

use tracing::info;

use crate::cli::registry::{BackupArgs, ValidateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::registry::schema::validate_file;
use crate::store::backup_file;

fn registry_or(explicit: Option<&PathBuf>, config: &Config) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.clone()),
        None => {
            let settings = config.paths.discover_settings()?;
            Ok(config.paths.registry_path(&settings))
        }
    }
}

/// Main handler for the validate command.
///
/// # Errors
///
/// Returns an error if no JSON file can be located, either document cannot
/// be read, or the document violates the schema.
pub fn run_validate_command(args: &ValidateArgs, config: &Config) -> Result<()> {
    let json = registry_or(args.json.as_ref(), config)?;
    validate_file(&json, args.schema.as_deref())?;
    println!("{} is valid", json.display());
    Ok(())
}

/// Main handler for the backup command.
///
/// # Errors
///
/// Returns an error if the source cannot be located or copied.
pub fn run_backup_command(args: &BackupArgs, config: &Config) -> Result<()> {
    let src = registry_or(args.src.as_ref(), config)?;
    if config.global.dry {
        info!(
            "[dry] would back up {} to {}",
            src.display(),
            args.dst.display()
        );
        return Ok(());
    }
    backup_file(&src, &args.dst)
}
