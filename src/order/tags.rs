// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tag table and tag grouping pass.
//!
//! ```text
//! front_tags (OST, Music, Sound, Graphics) --> output
//! back_tags  (AI, Utilities, Fixes)        --> add_after
//! patch_tag  (Patch)                       --> add_after (no dupes)
//! other tags, by name:
//!   1 member   skip
//!   2 members  (A, B): move B right after A
//!   3+ members --> output
//! output + add_after --> keep last occurrence --> move each to the end
//! ```
//!
//! Mods never named in `output` keep their relative order at the front.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info};

use super::ModList;
use crate::config::types::OrderConfig;

/// Tag name to member sort keys, in scan order.
///
/// Backed by a `BTreeMap`, so tags without a fixed bucket are visited in
/// ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
    tags: BTreeMap<String, Vec<String>>,
}

impl TagTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` under `tag`; returns `false` if it was already there.
    pub fn insert(&mut self, tag: &str, name: &str) -> bool {
        let members = self.tags.entry(tag.to_string()).or_default();
        if members.iter().any(|m| m == name) {
            return false;
        }
        members.push(name.to_string());
        true
    }

    #[must_use]
    pub fn members(&self, tag: &str) -> Option<&[String]> {
        self.tags.get(tag).map(Vec::as_slice)
    }

    /// Remove `tag` and return its members.
    pub fn remove(&mut self, tag: &str) -> Option<Vec<String>> {
        self.tags.remove(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tags
            .iter()
            .map(|(tag, members)| (tag.as_str(), members.as_slice()))
    }
}

impl IntoIterator for TagTable {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

/// Reorder `list` according to the tags collected from descriptors.
pub fn group_by_tags(mut tags: TagTable, list: &mut ModList, rules: &OrderConfig) {
    let mut output: Vec<String> = Vec::new();
    let mut add_after: Vec<String> = Vec::new();

    for tag in &rules.front_tags {
        if let Some(members) = tags.remove(tag) {
            output.extend(members);
        }
    }

    for tag in &rules.back_tags {
        if let Some(members) = tags.remove(tag) {
            add_after.extend(members);
        }
    }

    if let Some(members) = tags.remove(&rules.patch_tag) {
        for name in members {
            if !add_after.contains(&name) {
                add_after.push(name);
            }
        }
    }

    for (tag, members) in tags {
        match members.len() {
            0 | 1 => {}
            2 => place_after(list, &members[0], &members[1], &tag),
            _ => output.extend(members),
        }
    }

    output.extend(add_after);

    for name in keep_last_occurrence(output) {
        if let Some(pos) = list.position_of_name(&name) {
            list.move_to_end(pos);
        }
    }
}

/// Move the package named `second` directly behind the one named `first`.
fn place_after(list: &mut ModList, first: &str, second: &str, tag: &str) {
    let (Some(from), Some(anchor)) = (list.position_of_name(second), list.position_of_name(first))
    else {
        debug!(tag, first, second, "tag pair not in mod list");
        return;
    };
    let to = if anchor < from { anchor + 1 } else { anchor };
    if from != to {
        info!("Tag {tag}: {second} after {first}");
        list.relocate(from, to);
    }
}

/// Drop earlier duplicates, keeping each name at its last position.
#[must_use]
pub fn keep_last_occurrence(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut kept: Vec<String> = names
        .into_iter()
        .rev()
        .filter(|name| seen.insert(name.clone()))
        .collect();
    kept.reverse();
    kept
}
