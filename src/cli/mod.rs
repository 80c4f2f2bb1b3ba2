// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! stellaris-mod-sorter [global options] [command]
//! sort                       (default)
//! validate [JSON] [--schema FILE]
//! backup <DST> [--src FILE]
//! options
//! inis
//! version
//! ```

pub mod global;
pub mod registry;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::registry::{BackupArgs, ValidateArgs};
use clap::{Parser, Subcommand};

/// Stellaris Mod Load Order Sorter
///
/// Reorders the mods registered with the Stellaris launcher.
#[derive(Debug, Parser)]
#[command(
    name = "stellaris-mod-sorter",
    author,
    version,
    about = "Stellaris Mod Load Order Sorter",
    long_about = "stellaris-mod-sorter Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reorders the mods registered with the Stellaris launcher.\n\n\
                  Invoking `stellaris-mod-sorter` without a command sorts the\n\
                  mods and rewrites dlc_load.json and game_data.json. Use --dry\n\
                  to only print the resulting order.",
    after_help = "CONFIG FILES:\n\n\
                  The user config `<config dir>/stellaris-mod-sorter/config.toml`\n\
                  is loaded first, then `modsort.toml` in the current directory,\n\
                  then every --config file in order. MODSORT_<SECTION>__<KEY>\n\
                  environment variables and command line options override them.\n\
                  Use --no-default-configs to only load --config files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute (defaults to `sort`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files that were loaded.
    Inis,

    /// Sorts the mods and writes the launcher files.
    Sort,

    /// Validates a JSON file against a JSON Schema.
    #[command(visible_alias = "validate-json")]
    Validate(ValidateArgs),

    /// Copies the mod registry to a backup location.
    #[command(visible_alias = "backup-registry")]
    Backup(BackupArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
