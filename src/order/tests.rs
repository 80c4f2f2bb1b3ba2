// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::{HashMap, HashSet};

use super::deps::{fix_dependencies, reports_missing_dependency};
use super::prefix::swap_prefix_collisions;
use super::special::cluster_special_names;
use super::tags::{group_by_tags, keep_last_occurrence};
use super::*;
use crate::config::types::OrderConfig;
use crate::descriptor::source::MemoryDescriptorSource;
use crate::error::OrderError;
use crate::registry::{DependencyResolver, RegistryEntry};

fn pkg(name: &str) -> Package {
    Package::builder()
        .registry_key(format!("key-{name}"))
        .display_name(name)
        .external_id(format!("id-{name}"))
        .build()
}

fn list_of(names: &[&str]) -> ModList {
    names.iter().map(|name| pkg(name)).collect()
}

fn names(list: &ModList) -> Vec<&str> {
    list.sort_keys()
}

fn tag_table(entries: &[(&str, &[&str])]) -> TagTable {
    let mut tags = TagTable::new();
    for (tag, members) in entries {
        for member in *members {
            tags.insert(tag, member);
        }
    }
    tags
}

/// Display name to registry key, as built by [`pkg`].
struct NameResolver(HashMap<String, String>);

impl NameResolver {
    fn new(names: &[&str]) -> Self {
        Self(
            names
                .iter()
                .map(|name| ((*name).to_string(), format!("key-{name}")))
                .collect(),
        )
    }
}

impl DependencyResolver for NameResolver {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

fn assert_permutation(before: &[&str], after: &[&str]) {
    let mut before = before.to_vec();
    let mut after = after.to_vec();
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

// --- ModList ---

#[test]
fn test_relocate_forward() {
    let mut list = list_of(&["a", "b", "c", "d"]);
    list.relocate(0, 2);
    assert_eq!(names(&list), ["b", "c", "a", "d"]);
}

#[test]
fn test_relocate_backward() {
    let mut list = list_of(&["a", "b", "c", "d"]);
    list.relocate(3, 1);
    assert_eq!(names(&list), ["a", "d", "b", "c"]);
}

#[test]
fn test_relocate_clamps_and_ignores_out_of_range() {
    let mut list = list_of(&["a", "b", "c"]);
    list.relocate(0, 10);
    assert_eq!(names(&list), ["b", "c", "a"]);

    list.relocate(7, 0);
    assert_eq!(names(&list), ["b", "c", "a"]);

    list.move_to_end(0);
    assert_eq!(names(&list), ["c", "a", "b"]);

    let mut empty = ModList::default();
    empty.relocate(0, 0);
    assert!(empty.is_empty());
}

#[test]
fn test_ids_survive_relocation() {
    let mut list = list_of(&["a", "b", "c"]);
    let id = list.id_at(0).unwrap();
    list.relocate(0, 2);
    assert_eq!(list.position_of(id), Some(2));
    assert_eq!(list.package(id).sort_key(), "a");
}

#[test]
fn test_lookup_by_name_and_key() {
    let list = list_of(&["a", "b", "a"]);
    assert_eq!(list.position_of_name("a"), Some(0));
    assert_eq!(list.position_of_key("key-b"), Some(1));
    assert_eq!(list.position_of_name("zzz"), None);
}

#[test]
fn test_outputs() {
    let list = list_of(&["a", "b", "c"]);
    assert_eq!(list.registry_keys(), ["key-a", "key-b", "key-c"]);
    let enabled = vec!["id-a".to_string(), "id-c".to_string(), "id-x".to_string()];
    assert_eq!(list.enabled_ids_reversed(&enabled), ["id-c", "id-a"]);
}

// --- Adjacent-prefix swap ---

#[test]
fn test_prefix_swap_single_backward_pass() {
    let before = ["abc", "ab", "a"];
    let mut list = list_of(&before);

    swap_prefix_collisions(&mut list).unwrap();

    let after = names(&list);
    assert_eq!(after[0], "a");
    assert_eq!(after, ["a", "abc", "ab"]);
    assert_permutation(&before, &after);
}

#[test]
fn test_prefix_swap_leaves_unrelated_names() {
    let before = ["Zeta", "Beta", "Alpha Beta", "Alpha"];
    let mut list = list_of(&before);

    swap_prefix_collisions(&mut list).unwrap();

    assert_eq!(names(&list), ["Zeta", "Beta", "Alpha", "Alpha Beta"]);
}

#[test]
fn test_prefix_swap_empty_list() {
    let mut list = ModList::default();
    assert_eq!(
        swap_prefix_collisions(&mut list),
        Err(OrderError::EmptyModList)
    );
}

// --- Tag grouping ---

#[test]
fn test_keep_last_occurrence() {
    let names = ["x", "y", "x", "z"].map(String::from).to_vec();
    assert_eq!(keep_last_occurrence(names), ["y", "x", "z"]);
}

#[test]
fn test_tag_table_deduplicates() {
    let mut tags = TagTable::new();
    assert!(tags.insert("Graphics", "a"));
    assert!(!tags.insert("Graphics", "a"));
    assert!(tags.insert("Graphics", "b"));
    assert_eq!(tags.members("Graphics").map(<[String]>::len), Some(2));
}

#[test]
fn test_pair_rule_moves_second_after_first() {
    let mut list = list_of(&["A", "M", "B"]);
    group_by_tags(tag_table(&[("T", &["A", "B"])]), &mut list, &OrderConfig::default());
    assert_eq!(names(&list), ["A", "B", "M"]);
}

#[test]
fn test_pair_rule_second_before_first() {
    let mut list = list_of(&["B", "M", "A"]);
    group_by_tags(tag_table(&[("T", &["A", "B"])]), &mut list, &OrderConfig::default());
    assert_eq!(names(&list), ["M", "A", "B"]);
}

#[test]
fn test_pair_rule_missing_member_is_noop() {
    let mut list = list_of(&["A", "M", "B"]);
    group_by_tags(tag_table(&[("T", &["A", "X"])]), &mut list, &OrderConfig::default());
    assert_eq!(names(&list), ["A", "M", "B"]);
}

#[test]
fn test_single_member_tag_is_ignored() {
    let mut list = list_of(&["A", "B"]);
    group_by_tags(tag_table(&[("Solo", &["A"])]), &mut list, &OrderConfig::default());
    assert_eq!(names(&list), ["A", "B"]);
}

#[test]
fn test_buckets_patch_and_groups() {
    let mut list = list_of(&["a", "b", "c", "d", "e", "f"]);
    let tags = tag_table(&[
        ("Graphics", &["b"]),
        ("Fixes", &["a"]),
        ("Patch", &["c", "a"]),
        ("Gameplay", &["e", "d", "a"]),
    ]);

    group_by_tags(tags, &mut list, &OrderConfig::default());

    // f is untagged and stays in front; the rest follows
    // front bucket, groups, back bucket, patch.
    insta::assert_debug_snapshot!(names(&list), @r#"
    [
        "f",
        "b",
        "e",
        "d",
        "a",
        "c",
    ]
    "#);
}

#[test]
fn test_custom_buckets() {
    let rules = OrderConfig {
        front_tags: vec!["Early".to_string()],
        back_tags: vec![],
        patch_tag: "Late".to_string(),
        special_names: vec![],
    };
    let mut list = list_of(&["a", "b", "c"]);
    let tags = tag_table(&[("Late", &["a"]), ("Early", &["b"])]);

    group_by_tags(tags, &mut list, &rules);

    assert_eq!(names(&list), ["c", "b", "a"]);
}

#[test]
fn test_unknown_names_are_ignored() {
    let mut list = list_of(&["a", "b"]);
    group_by_tags(tag_table(&[("Music", &["ghost", "a"])]), &mut list, &OrderConfig::default());
    assert_eq!(names(&list), ["b", "a"]);
}

// --- Special names ---

fn special_patterns() -> Vec<String> {
    OrderConfig::default().special_names
}

#[test]
fn test_special_moves_behind_anchor() {
    let mut list = list_of(&["Dark UI", "x", "y", "UI Overhaul Dynamic", "z"]);
    cluster_special_names(&mut list, &special_patterns());
    assert_eq!(
        names(&list),
        ["x", "y", "UI Overhaul Dynamic", "Dark UI", "z"]
    );
}

#[test]
fn test_special_builds_contiguous_block() {
    let mut list = list_of(&["Dark U1 Fix", "Dark UI", "m", "UI Overhaul Dynamic"]);
    cluster_special_names(&mut list, &special_patterns());
    assert_eq!(
        names(&list),
        ["m", "UI Overhaul Dynamic", "Dark UI", "Dark U1 Fix"]
    );
}

#[test]
fn test_special_later_match_moves_anchor() {
    let mut list = list_of(&["UI Overhaul Dynamic", "a", "Dark UI"]);
    cluster_special_names(&mut list, &special_patterns());
    assert_eq!(names(&list), ["UI Overhaul Dynamic", "a", "Dark UI"]);
}

#[test]
fn test_special_needs_two_matches() {
    let mut list = list_of(&["b", "Dark UI", "a"]);
    cluster_special_names(&mut list, &special_patterns());
    assert_eq!(names(&list), ["b", "Dark UI", "a"]);
}

// --- Dependencies ---

fn with_deps(list: &mut ModList, name: &str, deps: &[&str]) {
    let pos = list.position_of_name(name).unwrap();
    let id = list.id_at(pos).unwrap();
    list.package_mut(id)
        .set_dependencies(deps.iter().map(ToString::to_string).collect());
}

fn assert_dependencies_first(list: &ModList) {
    for (pos, package) in list.iter().enumerate() {
        for dep in package.dependencies() {
            if let Some(dep_pos) = list.position_of_name(dep) {
                assert!(
                    dep_pos < pos,
                    "{dep} at {dep_pos} should precede {} at {pos}",
                    package.sort_key()
                );
            }
        }
    }
}

#[test]
fn test_dependency_moves_dependent_after_dependency() {
    let mut list = list_of(&["P", "X", "Q"]);
    with_deps(&mut list, "P", &["Q"]);

    fix_dependencies(&mut list, &NameResolver::new(&["P", "X", "Q"]), &[]);

    assert_eq!(names(&list), ["X", "Q", "P"]);
    assert_dependencies_first(&list);
}

#[test]
fn test_dependency_already_satisfied() {
    let mut list = list_of(&["Q", "P"]);
    with_deps(&mut list, "P", &["Q"]);

    fix_dependencies(&mut list, &NameResolver::new(&["P", "Q"]), &[]);

    assert_eq!(names(&list), ["Q", "P"]);
}

#[test]
fn test_dependency_chain_commits_each_move() {
    let mut list = list_of(&["P", "Q", "X", "R"]);
    with_deps(&mut list, "P", &["Q", "R"]);

    fix_dependencies(&mut list, &NameResolver::new(&["P", "Q", "X", "R"]), &[]);

    assert_eq!(names(&list), ["Q", "X", "R", "P"]);
    assert_dependencies_first(&list);
}

#[test]
fn test_dependency_unresolved_is_skipped() {
    let mut list = list_of(&["P", "X"]);
    with_deps(&mut list, "P", &["Missing"]);
    let enabled = vec!["id-P".to_string()];

    fix_dependencies(&mut list, &NameResolver::new(&["P", "X"]), &enabled);

    assert_eq!(names(&list), ["P", "X"]);
}

#[test]
fn test_missing_dependency_reported_only_for_enabled() {
    let list = list_of(&["P", "X"]);
    let p = list.get(0).unwrap();
    let x = list.get(1).unwrap();
    let enabled: HashSet<&str> = ["id-P"].into_iter().collect();

    assert!(reports_missing_dependency(p, &enabled));
    assert!(!reports_missing_dependency(x, &enabled));
    assert!(!reports_missing_dependency(p, &HashSet::new()));
}

#[test]
fn test_dependency_never_moves_past_end() {
    let mut list = list_of(&["A", "B", "C", "D"]);
    with_deps(&mut list, "A", &["D"]);
    with_deps(&mut list, "B", &["D"]);

    fix_dependencies(&mut list, &NameResolver::new(&["A", "B", "C", "D"]), &[]);

    assert_eq!(list.len(), 4);
    assert_eq!(names(&list), ["C", "D", "B", "A"]);
    assert_dependencies_first(&list);
}

// --- Pipeline ---

fn registry(entries: &[(&str, &str, Option<&str>)]) -> Registry {
    entries
        .iter()
        .map(|(key, name, id)| {
            (
                (*key).to_string(),
                RegistryEntry {
                    display_name: Some((*name).to_string()),
                    steam_id: id.map(ToString::to_string),
                    ..RegistryEntry::default()
                },
            )
        })
        .collect()
}

#[test]
fn test_sort_mods_end_to_end() {
    let registry = registry(&[
        ("k1", "Zeta Music", Some("1")),
        ("k2", "Fixer", Some("2")),
        ("k3", "Cool Addon", Some("3")),
        ("k4", "Base Lib", Some("4")),
        ("k5", "Ghost", None),
    ]);
    let source = MemoryDescriptorSource::new()
        .with("k1", "tags={\n\t\"Music\"\n}")
        .with("k2", "tags={ \"Fixes\" }")
        .with("k3", "dependencies={\n\t\"Base Lib\"\n}");
    let enabled: Vec<String> = ["2", "3", "4", "9"].map(String::from).to_vec();

    let outcome = sort_mods(&registry, &enabled, &source, &OrderConfig::default()).unwrap();

    assert_eq!(
        outcome.names,
        ["Base Lib", "Cool Addon", "Zeta Music", "Fixer"]
    );
    assert_eq!(outcome.display_order, ["k4", "k3", "k1", "k2"]);
    assert_eq!(outcome.enabled_mods, ["2", "3", "4"]);
}

#[test]
fn test_sort_mods_initial_order_descending() {
    let registry = registry(&[
        ("k1", "Alpha", Some("1")),
        ("k2", "Gamma", Some("2")),
        ("k3", "Beta", Some("3")),
    ]);
    let enabled = vec!["1".to_string()];

    let outcome = sort_mods(
        &registry,
        &enabled,
        &MemoryDescriptorSource::new(),
        &OrderConfig::default(),
    )
    .unwrap();

    assert_eq!(outcome.names, ["Gamma", "Beta", "Alpha"]);
}

#[test]
fn test_sort_mods_no_enabled_mods() {
    let registry = registry(&[("k1", "Alpha", Some("1"))]);
    let result = sort_mods(
        &registry,
        &[],
        &MemoryDescriptorSource::new(),
        &OrderConfig::default(),
    );
    assert_eq!(result, Err(OrderError::NoEnabledMods));
}

#[test]
fn test_sort_mods_empty_registry() {
    let registry = registry(&[("k1", "Ghost", None)]);
    let enabled = vec!["1".to_string()];
    let result = sort_mods(
        &registry,
        &enabled,
        &MemoryDescriptorSource::new(),
        &OrderConfig::default(),
    );
    assert_eq!(result, Err(OrderError::EmptyModList));
}
