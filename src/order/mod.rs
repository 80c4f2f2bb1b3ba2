// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Load order engine.
//!
//! ```text
//! Registry --> ModList (descending sort key)
//!                 |
//!                 v
//!   prefix::swap_prefix_collisions     "ab" before "abc"
//!   descriptor::scan_descriptors       tags + dependencies
//!   tags::group_by_tags                buckets, pairs, groups
//!   special::cluster_special_names     UI overhaul cluster
//!   deps::fix_dependencies             dependency before dependent
//!                 |
//!                 v
//!   SortOutcome { display_order, enabled_mods, names }
//! ```
//!
//! `ModList` owns the packages in an arena that never changes after
//! construction; passes only permute the ordering array. A relocation is a
//! rotation of the sub-slice between source and destination.

pub mod deps;
pub mod package;
pub mod pipeline;
pub mod prefix;
pub mod special;
pub mod tags;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::registry::Registry;

pub use package::Package;
pub use pipeline::{SortOutcome, sort_mods};
pub use tags::TagTable;

/// Stable handle to a package inside a [`ModList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageId(usize);

/// The ordered package list shared by every pass.
#[derive(Debug, Clone, Default)]
pub struct ModList {
    packages: Vec<Package>,
    order: Vec<usize>,
}

impl ModList {
    /// Create a list holding `packages` in the given order.
    #[must_use]
    pub fn new(packages: Vec<Package>) -> Self {
        let order = (0..packages.len()).collect();
        Self { packages, order }
    }

    /// Usable registry entries sorted by descending sort key.
    #[must_use]
    pub fn from_registry(registry: &Registry) -> Self {
        Self::new(registry.packages())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Package at list position `pos`.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&Package> {
        self.order.get(pos).map(|&slot| &self.packages[slot])
    }

    /// Packages in current list order.
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.order.iter().map(|&slot| &self.packages[slot])
    }

    /// Handles in current list order, detached from the list.
    #[must_use]
    pub fn ids(&self) -> Vec<PackageId> {
        self.order.iter().copied().map(PackageId).collect()
    }

    #[must_use]
    pub fn id_at(&self, pos: usize) -> Option<PackageId> {
        self.order.get(pos).copied().map(PackageId)
    }

    #[must_use]
    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.0]
    }

    pub fn package_mut(&mut self, id: PackageId) -> &mut Package {
        &mut self.packages[id.0]
    }

    /// Current position of `id`.
    #[must_use]
    pub fn position_of(&self, id: PackageId) -> Option<usize> {
        self.order.iter().position(|&slot| slot == id.0)
    }

    /// Position of the first package whose sort key is `name`.
    #[must_use]
    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        self.iter().position(|p| p.sort_key() == name)
    }

    /// Position of the package registered under `key`.
    #[must_use]
    pub fn position_of_key(&self, key: &str) -> Option<usize> {
        self.iter().position(|p| p.registry_key() == key)
    }

    /// Move the package at `from` so that it ends up at `to`.
    ///
    /// Equivalent to removing it and inserting it at `to` in the shortened
    /// list; `to` is clamped to the last position.
    pub fn relocate(&mut self, from: usize, to: usize) {
        let Some(last) = self.order.len().checked_sub(1) else {
            return;
        };
        if from > last {
            return;
        }
        let to = to.min(last);
        if from < to {
            self.order[from..=to].rotate_left(1);
        } else if to < from {
            self.order[to..=from].rotate_right(1);
        }
    }

    /// Move the package at `from` to the end of the list.
    pub fn move_to_end(&mut self, from: usize) {
        self.relocate(from, self.order.len());
    }

    /// Exchange the packages at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    /// Sort keys in current order.
    #[must_use]
    pub fn sort_keys(&self) -> Vec<&str> {
        self.iter().map(Package::sort_key).collect()
    }

    /// Registry keys in current order (`game_data.json` `modsOrder`).
    #[must_use]
    pub fn registry_keys(&self) -> Vec<String> {
        self.iter().map(|p| p.registry_key().to_string()).collect()
    }

    /// External ids of enabled packages, last package first
    /// (`dlc_load.json` `enabled_mods`).
    #[must_use]
    pub fn enabled_ids_reversed(&self, enabled: &[String]) -> Vec<String> {
        let enabled: HashSet<&str> = enabled.iter().map(String::as_str).collect();
        self.order
            .iter()
            .rev()
            .map(|&slot| self.packages[slot].external_id())
            .filter(|id| enabled.contains(id))
            .map(ToString::to_string)
            .collect()
    }
}

impl FromIterator<Package> for ModList {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
