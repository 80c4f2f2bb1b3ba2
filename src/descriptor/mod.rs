// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Descriptor parsing.
//!
//! ```text
//! name="Dark UI"
//! tags={                 <- keyword line opens the block
//!     "Graphics"         <- one member per line, quotes trimmed
//!     "Interface"
//! }                      <- first line with '}' closes it
//! dependencies={ "UI Overhaul Dynamic" }   <- inline form
//! ```
//!
//! A package may have several chunks (own `descriptor.mod`, then the
//! settings override). Tags from every chunk accumulate in the shared
//! [`TagTable`]; the last chunk with a non-empty dependency block replaces
//! the dependency list.

pub mod source;


use tracing::trace;

use crate::order::{ModList, Package, TagTable};
use crate::registry::Registry;
use source::DescriptorSource;

pub const TAGS_KEYWORD: &str = "tags";
pub const DEPENDENCIES_KEYWORD: &str = "dependencies";

/// Members of the first `keyword={ ... }` block in `chunk`.
#[must_use]
pub fn parse_block(chunk: &str, keyword: &str) -> Vec<String> {
    let mut members = Vec::new();
    let mut in_block = false;

    for line in chunk.lines() {
        let line = line.trim();
        if !in_block {
            let Some(rest) = line.strip_prefix(keyword) else {
                continue;
            };
            in_block = true;
            // Members written on the opening line itself.
            let Some((_, inline)) = rest.split_once('{') else {
                continue;
            };
            if take_inline(inline, &mut members) {
                break;
            }
            continue;
        }

        // `keyword=` with the brace on the following line.
        if let Some(inline) = line.strip_prefix('{') {
            if take_inline(inline, &mut members) {
                break;
            }
            continue;
        }
        if line.contains('}') {
            break;
        }
        if !line.is_empty() {
            members.push(trim_member(line).to_string());
        }
    }

    members
}

/// Tag names declared in `chunk`.
#[must_use]
pub fn parse_tags(chunk: &str) -> Vec<String> {
    parse_block(chunk, TAGS_KEYWORD)
}

/// Dependency names declared in `chunk`.
#[must_use]
pub fn parse_dependencies(chunk: &str) -> Vec<String> {
    parse_block(chunk, DEPENDENCIES_KEYWORD)
}

fn trim_member(line: &str) -> &str {
    line.trim().trim_matches('"')
}

/// Push the members of `text`; true if the block closes on this line.
fn take_inline(text: &str, members: &mut Vec<String>) -> bool {
    match text.split_once('}') {
        Some((inline, _)) => {
            members.extend(inline_members(inline));
            true
        }
        None => {
            members.extend(inline_members(text));
            false
        }
    }
}

/// Split `"A" "B C"` (or bare `A B`) into members.
fn inline_members(text: &str) -> Vec<String> {
    let text = text.trim();
    if !text.contains('"') {
        return text.split_whitespace().map(ToString::to_string).collect();
    }
    text.split('"')
        .skip(1)
        .step_by(2)
        .filter(|member| !member.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Record every chunk's tags for `package` in `tags`.
pub fn collect_tags<S: AsRef<str>>(chunks: &[S], package: &Package, tags: &mut TagTable) {
    for chunk in chunks {
        for tag in parse_tags(chunk.as_ref()) {
            tags.insert(&tag, package.sort_key());
        }
    }
}

/// Replace `package`'s dependencies with the last non-empty block.
pub fn collect_dependencies<S: AsRef<str>>(chunks: &[S], package: &mut Package) {
    for chunk in chunks {
        let dependencies = parse_dependencies(chunk.as_ref());
        if !dependencies.is_empty() {
            package.set_dependencies(dependencies);
        }
    }
}

/// Apply every chunk of one package.
pub fn apply_chunks<S: AsRef<str>>(chunks: &[S], package: &mut Package, tags: &mut TagTable) {
    collect_tags(chunks, package, tags);
    collect_dependencies(chunks, package);
}

/// Fill in tags and dependencies for every package in `list`.
pub fn scan_descriptors<S>(
    list: &mut ModList,
    registry: &Registry,
    source: &S,
    tags: &mut TagTable,
) where
    S: DescriptorSource + ?Sized,
{
    for id in list.ids() {
        let package = list.package(id);
        let chunks = source.chunks(package, registry.get(package.registry_key()));
        if chunks.is_empty() {
            continue;
        }
        let package = list.package_mut(id);
        apply_chunks(&chunks, package, tags);
        trace!(
            name = package.sort_key(),
            chunks = chunks.len(),
            dependencies = package.dependencies().len(),
            "descriptor scanned"
        );
    }
}
