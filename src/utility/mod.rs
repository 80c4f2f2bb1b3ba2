// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_text()   BOM / UTF-8 / CP1252 --> UTF-8
//!   bytes_to_utf8() explicit encoding --> UTF-8
//! ```

pub mod encoding;
