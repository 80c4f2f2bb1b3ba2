// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Adjacent-prefix swap.
//!
//! ```text
//! descending sort:  [ "abc", "ab", "a" ]
//!                              <-- one backward pass
//! i=2  ("ab","a")   swap  [ "abc", "a", "ab" ]
//! i=1  ("abc","a")  swap  [ "a", "abc", "ab" ]
//! ```
//!
//! A single pass, not a sort: it only fixes collisions between neighbours.

use tracing::{debug, error};

use super::ModList;
use crate::error::OrderError;

/// Swap neighbours whose later sort key is a prefix of the earlier one.
///
/// # Errors
///
/// Returns `OrderError::EmptyModList` if the list is empty.
pub fn swap_prefix_collisions(list: &mut ModList) -> Result<(), OrderError> {
    if list.is_empty() {
        error!("no mod found");
        return Err(OrderError::EmptyModList);
    }

    for i in (1..list.len()).rev() {
        let (Some(prev), Some(cur)) = (list.get(i - 1), list.get(i)) else {
            continue;
        };
        if is_prefix_collision(prev.sort_key(), cur.sort_key()) {
            debug!(prev = prev.sort_key(), cur = cur.sort_key(), "prefix swap");
            list.swap(i - 1, i);
        }
    }
    Ok(())
}

fn is_prefix_collision(prev: &str, cur: &str) -> bool {
    !prev.is_empty() && !cur.is_empty() && prev.len() >= cur.len() && prev.starts_with(cur)
}
