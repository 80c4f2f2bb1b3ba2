// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::global::parse_option;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["stellaris-mod-sorter"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.global.dry);
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["stellaris-mod-sorter", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "stellaris-mod-sorter",
        "-l",
        "4",
        "--settings",
        "/tmp/stellaris",
        "--dry",
        "-s",
        "paths/backup_ext=.old",
        "sort",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Sort)));
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "paths.backup_ext",
            ".old",
        ),
        (
            "global.output_log_level",
            "4",
        ),
        (
            "global.file_log_level",
            "4",
        ),
        (
            "global.dry",
            "true",
        ),
        (
            "paths.settings",
            "/tmp/stellaris",
        ),
    ]
    "#);
}

#[test]
fn test_file_log_level_overrides_console_level() {
    let cli = Cli::try_parse_from([
        "stellaris-mod-sorter",
        "-l",
        "1",
        "--file-log-level",
        "5",
        "--log-file",
        "sort.log",
    ])
    .unwrap();

    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&("global.file_log_level".to_string(), "5".to_string())));
    assert!(overrides.contains(&("global.log_file".to_string(), "sort.log".to_string())));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["stellaris-mod-sorter", "-l", "6"]).is_err());
}

#[test]
fn test_parse_validate() {
    let cli = Cli::try_parse_from([
        "stellaris-mod-sorter",
        "validate-json",
        "registry.json",
        "--schema",
        "schema.json",
    ])
    .unwrap();

    let Some(Command::Validate(args)) = cli.command else {
        panic!("expected validate command");
    };
    assert_eq!(args.json, Some(PathBuf::from("registry.json")));
    assert_eq!(args.schema, Some(PathBuf::from("schema.json")));
}

#[test]
fn test_parse_backup() {
    let cli =
        Cli::try_parse_from(["stellaris-mod-sorter", "backup", "/tmp/registry.json"]).unwrap();

    let Some(Command::Backup(args)) = cli.command else {
        panic!("expected backup command");
    };
    assert_eq!(args.dst, PathBuf::from("/tmp/registry.json"));
    assert!(args.src.is_none());
}

#[test]
fn test_parse_repeated_configs() {
    let cli = Cli::try_parse_from([
        "stellaris-mod-sorter",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "inis",
    ])
    .unwrap();

    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
}

#[test]
fn test_parse_option() {
    assert_eq!(
        parse_option("order/patch_tag=Patches"),
        Ok(("order.patch_tag".to_string(), "Patches".to_string()))
    );
    assert_eq!(
        parse_option("global.dry=a=b"),
        Ok(("global.dry".to_string(), "a=b".to_string()))
    );
    assert!(parse_option("no-equals").is_err());
    assert!(parse_option("=value").is_err());
    assert!(parse_option("paths/=x").is_err());
}
