// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// JSON file to validate (defaults to the discovered mods_registry.json).
    #[arg(value_name = "JSON")]
    pub json: Option<PathBuf>,

    /// JSON Schema file (defaults to the built-in registry schema).
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,
}

/// Arguments for the `backup` command.
#[derive(Debug, Clone, Args)]
pub struct BackupArgs {
    /// Destination file.
    #[arg(value_name = "DST")]
    pub dst: PathBuf,

    /// File to copy (defaults to the discovered mods_registry.json).
    #[arg(long, value_name = "FILE")]
    pub src: Option<PathBuf>,
}
