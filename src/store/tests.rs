// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use super::*;

fn order_file(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
    let path = dir.join(name);
    let backup = dir.join(format!("{name}.bak"));
    (path, backup)
}

#[test]
fn test_load_missing_file_is_empty() {
    let temp = tempfile::tempdir().unwrap();
    let (path, backup) = order_file(temp.path(), "dlc_load.json");

    let file = OrderFile::load(&path, &backup);

    assert!(file.data().is_empty());
    assert!(file.string_list(ENABLED_MODS_KEY).is_empty());
}

#[test]
fn test_load_invalid_json_is_empty() {
    let temp = tempfile::tempdir().unwrap();
    let (path, backup) = order_file(temp.path(), "dlc_load.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(OrderFile::load(&path, &backup).data().is_empty());

    fs::write(&path, "[1, 2]").unwrap();
    assert!(OrderFile::load(&path, &backup).data().is_empty());
}

#[test]
fn test_string_list_ignores_non_strings() {
    let temp = tempfile::tempdir().unwrap();
    let (path, backup) = order_file(temp.path(), "dlc_load.json");
    fs::write(&path, r#"{"enabled_mods": ["a", 3, null, "b"]}"#).unwrap();

    let file = OrderFile::load(&path, &backup);

    assert_eq!(file.string_list(ENABLED_MODS_KEY), vec!["a", "b"]);
    assert!(file.string_list("missing").is_empty());
}

#[test]
fn test_write_rotates_backup_and_keeps_other_keys() {
    let temp = tempfile::tempdir().unwrap();
    let (path, backup) = order_file(temp.path(), "game_data.json");
    fs::write(&backup, "stale").unwrap();
    fs::write(&path, r#"{"zzz": true, "modsOrder": ["old"], "aaa": 1}"#).unwrap();

    let mut file = OrderFile::load(&path, &backup);
    file.set_list(MODS_ORDER_KEY, vec!["k2".to_string(), "k1".to_string()]);
    file.write().unwrap();

    let backed_up = fs::read_to_string(&backup).unwrap();
    assert!(backed_up.contains("\"old\""));

    insta::assert_snapshot!(fs::read_to_string(&path).unwrap(), @r#"
    {
      "zzz": true,
      "modsOrder": [
        "k2",
        "k1"
      ],
      "aaa": 1
    }
    "#);
}

#[test]
fn test_write_creates_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let (path, backup) = order_file(temp.path(), "dlc_load.json");

    let mut file = OrderFile::load(&path, &backup);
    file.set_list(ENABLED_MODS_KEY, vec!["mod/ugc_1.mod".to_string()]);
    file.write().unwrap();

    assert!(!backup.exists());
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["enabled_mods"][0], "mod/ugc_1.mod");
}

#[test]
fn test_stage_leaves_file_untouched_until_commit() {
    let temp = tempfile::tempdir().unwrap();
    let (path, backup) = order_file(temp.path(), "dlc_load.json");
    fs::write(&path, r#"{"enabled_mods": ["old"]}"#).unwrap();

    let mut file = OrderFile::load(&path, &backup);
    file.set_list(ENABLED_MODS_KEY, vec!["new".to_string()]);
    let staged = file.stage().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"enabled_mods": ["old"]}"#
    );
    assert!(!backup.exists());

    staged.commit().unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("\"new\""));
    assert!(fs::read_to_string(&backup).unwrap().contains("\"old\""));
}

#[test]
fn test_stage_fails_without_touching_anything() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("missing").join("game_data.json");
    let backup = temp.path().join("missing").join("game_data.json.bak");

    let file = OrderFile::load(&path, &backup);
    assert!(file.stage().is_err());
    assert!(!temp.path().join("missing").exists());
}

#[test]
fn test_backup_file_creates_parent() {
    let temp = tempfile::tempdir().unwrap();
    let src = temp.path().join("mods_registry.json");
    let dst = temp.path().join("backups").join("nested").join("registry.json");
    fs::write(&src, "{}").unwrap();

    backup_file(&src, &dst).unwrap();

    assert_eq!(fs::read_to_string(&dst).unwrap(), "{}");
}

#[test]
fn test_backup_file_missing_source() {
    let temp = tempfile::tempdir().unwrap();
    let err = backup_file(&temp.path().join("nope.json"), &temp.path().join("out.json"))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FsError>(),
        Some(FsError::NotFound(_))
    ));
}
