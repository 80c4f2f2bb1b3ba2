// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pass sequencing.

use tracing::{info_span, warn};

use super::deps::fix_dependencies;
use super::prefix::swap_prefix_collisions;
use super::special::cluster_special_names;
use super::tags::group_by_tags;
use super::{ModList, TagTable};
use crate::config::types::OrderConfig;
use crate::descriptor::scan_descriptors;
use crate::descriptor::source::DescriptorSource;
use crate::error::OrderError;
use crate::registry::Registry;

/// Final order, ready to be written back to the launcher files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// Registry keys in load order (`modsOrder`).
    pub display_order: Vec<String>,
    /// Enabled external ids, last loaded first (`enabled_mods`).
    pub enabled_mods: Vec<String>,
    /// Display names in load order.
    pub names: Vec<String>,
}

impl SortOutcome {
    #[must_use]
    pub fn from_list(list: &ModList, enabled: &[String]) -> Self {
        Self {
            display_order: list.registry_keys(),
            enabled_mods: list.enabled_ids_reversed(enabled),
            names: list.sort_keys().into_iter().map(ToString::to_string).collect(),
        }
    }
}

/// Compute the load order for every usable mod in `registry`.
///
/// # Errors
///
/// Returns `OrderError::EmptyModList` if the registry holds no usable mod
/// and `OrderError::NoEnabledMods` if `enabled` is empty. Nothing should be
/// written in either case.
pub fn sort_mods<S>(
    registry: &Registry,
    enabled: &[String],
    source: &S,
    rules: &OrderConfig,
) -> Result<SortOutcome, OrderError>
where
    S: DescriptorSource + ?Sized,
{
    let mut list = ModList::from_registry(registry);
    pass("prefix", || swap_prefix_collisions(&mut list))?;

    if enabled.is_empty() {
        warn!("No enabled_mods found in dlc_load.json");
        return Err(OrderError::NoEnabledMods);
    }

    let mut tags = TagTable::new();
    pass("descriptors", || {
        scan_descriptors(&mut list, registry, source, &mut tags);
    });
    pass("tags", || group_by_tags(tags, &mut list, rules));
    pass("special", || {
        cluster_special_names(&mut list, &rules.special_names);
    });
    pass("dependencies", || fix_dependencies(&mut list, registry, enabled));

    Ok(SortOutcome::from_list(&list, enabled))
}

fn pass<T>(name: &'static str, run: impl FnOnce() -> T) -> T {
    let _span = info_span!("pass", name).entered();
    run()
}
