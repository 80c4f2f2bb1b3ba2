// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Package entity.

use bon::Builder;

/// One installed mod as seen by the ordering passes.
///
/// The display name doubles as the sort key and as the identity used when
/// tags and dependencies refer to other mods.
///
/// ```
/// use stellaris_mod_sorter::order::Package;
///
/// let package = Package::builder()
///     .registry_key("a1b2")
///     .display_name("Dark UI")
///     .external_id("mod/ugc_1.mod")
///     .build();
/// assert_eq!(package.sort_key(), "Dark UI");
/// assert!(package.dependencies().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Package {
    registry_key: String,
    display_name: String,
    external_id: String,
    #[builder(default)]
    dependencies: Vec<String>,
}

impl Package {
    /// Key of this mod in `mods_registry.json`.
    #[must_use]
    pub fn registry_key(&self) -> &str {
        &self.registry_key
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Name used for sorting and cross-referencing.
    #[must_use]
    pub fn sort_key(&self) -> &str {
        &self.display_name
    }

    /// Game registry or Steam Workshop id.
    #[must_use]
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Display names of the mods that must load before this one.
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Replace the dependency list wholesale.
    pub fn set_dependencies(&mut self, dependencies: Vec<String>) {
        self.dependencies = dependencies;
    }
}
