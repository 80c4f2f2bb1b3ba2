// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Special-name clustering.
//!
//! ```text
//! patterns: "UI Overhaul Dynamic" > "Dark UI" > "Dark U1"
//!
//! [ DarkUI, x, y, UIOD, z ]   anchor = UIOD (first pattern)
//!   DarkUI sits before anchor --> moved to anchor slot
//! [ x, y, UIOD, DarkUI, z ]
//! ```

use tracing::{debug, info};

use super::{ModList, PackageId};

/// Pull every package whose display name contains one of `patterns` into a
/// block behind the first match, in pattern priority order.
pub fn cluster_special_names(list: &mut ModList, patterns: &[String]) {
    let matches: Vec<(usize, PackageId)> = patterns
        .iter()
        .flat_map(|pattern| {
            list.ids()
                .into_iter()
                .enumerate()
                .filter(|&(_, id)| list.package(id).display_name().contains(pattern.as_str()))
                .collect::<Vec<_>>()
        })
        .collect();

    let Some(((first, _), rest)) = matches.split_first() else {
        return;
    };
    let mut anchor = *first;
    if rest.is_empty() {
        debug!("fewer than two special mods, nothing to cluster");
        return;
    }

    for &(_, id) in rest {
        let Some(ix) = list.position_of(id) else {
            continue;
        };
        if anchor > ix {
            list.relocate(ix, anchor);
            let placed = list.position_of(id).unwrap_or(anchor);
            if let Some(prev) = placed.checked_sub(1).and_then(|p| list.get(p)) {
                info!(
                    "Special order {} after {}",
                    list.package(id).sort_key(),
                    prev.sort_key()
                );
            }
            anchor += 1;
        } else {
            anchor = ix;
        }
    }
}
