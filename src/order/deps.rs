// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency fixing pass.
//!
//! ```text
//! P depends on Q
//! [ P, X, Q ]   order=0, idx=2 > order
//! [ X, Q, P ]   P moved to idx, now right behind Q; order=2
//! ```
//!
//! One pass over the list as it stood when the pass began. Each dependency
//! gets one chance to move its dependent; cycles are not resolved.

use std::collections::HashSet;

use tracing::{error, info, warn};

use super::{ModList, Package};
use crate::registry::DependencyResolver;

/// Move every package behind the dependencies it declares.
///
/// Dependencies that cannot be resolved are reported only when the
/// dependent mod is enabled; otherwise they most likely belong to a mod the
/// user does not run.
pub fn fix_dependencies<R>(list: &mut ModList, resolver: &R, enabled: &[String])
where
    R: DependencyResolver + ?Sized,
{
    let enabled: HashSet<&str> = enabled.iter().map(String::as_str).collect();

    for id in list.ids() {
        let dependencies = list.package(id).dependencies().to_vec();
        if dependencies.is_empty() {
            continue;
        }
        let Some(mut order) = list.position_of(id) else {
            continue;
        };

        for name in &dependencies {
            let package = list.package(id);
            let Some(key) = resolver.resolve(name) else {
                if reports_missing_dependency(package, &enabled) {
                    warn!(
                        "Fail dependency: {name} not found for {} in mods_registry",
                        package.sort_key()
                    );
                }
                continue;
            };

            let Some(idx) = list.position_of_key(key) else {
                error!(
                    "Registry key {key} of {name} (needed by {}) not found in the mod list",
                    package.sort_key()
                );
                continue;
            };

            if idx > order {
                info!(
                    "FIX dependency: {} - {order} is lower than {idx} - {name}",
                    package.sort_key()
                );
                list.relocate(order, idx);
                order = idx;
            }
        }
    }
}

/// Whether an unresolved dependency of `package` is worth a warning.
///
/// Only enabled mods are reported; a disabled mod's missing dependency does
/// not affect the game.
#[must_use]
pub fn reports_missing_dependency(package: &Package, enabled: &HashSet<&str>) -> bool {
    enabled.contains(package.external_id())
}
