// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config (layered) --> Logging --> Command Dispatch
//!   Sort | Validate | Backup | Options | Inis | Version
//! ```

use std::process::ExitCode;

use stellaris_mod_sorter::cli::global::GlobalOptions;
use stellaris_mod_sorter::cli::{self, Command};
use stellaris_mod_sorter::cmd::config::{run_inis_command, run_options_command};
use stellaris_mod_sorter::cmd::registry::{run_backup_command, run_validate_command};
use stellaris_mod_sorter::cmd::sort::run_sort_command;
use stellaris_mod_sorter::config::loader::ConfigLoader;
use stellaris_mod_sorter::config::{Config, ENV_PREFIX, LOCAL_CONFIG};
use stellaris_mod_sorter::error::Result;
use stellaris_mod_sorter::logging::init_logging;
use stellaris_mod_sorter::logging::LogConfig;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let loaded_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &loaded_files)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config, loaded_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            run_inis_command(loaded_files);
            Ok(())
        }
        Some(Command::Validate(args)) => run_validate_command(args, config),
        Some(Command::Backup(args)) => run_backup_command(args, config),
        Some(Command::Sort) | None => run_sort_command(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_configs {
        if let Some(user) = Config::user_config_path() {
            loader = loader.add_toml_file_optional(user);
        }
        loader = loader.add_toml_file_optional(LOCAL_CONFIG);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}
