// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Descriptor text decoding.
//!
//! ```text
//! bytes --(BOM?)--> UTF-8 / UTF-16LE / UTF-16BE
//!       --(valid UTF-8?)--> UTF-8
//!       --(otherwise)--> Windows-1252
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.

use encoding_rs::{UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};
use std::borrow::Cow;

/// Encodings a descriptor may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, with or without BOM
    #[default]
    Utf8,
    /// UTF-16 Little Endian (BOM required)
    Utf16Le,
    /// UTF-16 Big Endian (BOM required)
    Utf16Be,
    /// Windows-1252, used by older descriptors
    Acp,
}

impl Encoding {
    /// Guess the encoding of `bytes` and the length of its BOM.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> (Self, usize) {
        if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(bytes) {
            let detected = if encoding == UTF_16LE {
                Self::Utf16Le
            } else if encoding == UTF_16BE {
                Self::Utf16Be
            } else {
                Self::Utf8
            };
            return (detected, bom_len);
        }
        if std::str::from_utf8(bytes).is_ok() {
            (Self::Utf8, 0)
        } else {
            (Self::Acp, 0)
        }
    }

    fn codec(self) -> &'static encoding_rs::Encoding {
        match self {
            Self::Utf8 => UTF_8,
            Self::Utf16Le => UTF_16LE,
            Self::Utf16Be => UTF_16BE,
            Self::Acp => WINDOWS_1252,
        }
    }
}

/// Converts bytes from the given encoding to UTF-8.
///
/// # Example
/// ```
/// use stellaris_mod_sorter::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let cp1252_bytes = b"caf\xe9"; // "café" in Windows-1252
/// let utf8 = bytes_to_utf8(Encoding::Acp, cp1252_bytes);
/// assert_eq!(utf8, "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    let (result, _had_errors) = encoding.codec().decode_without_bom_handling(bytes);
    result
}

/// Decode descriptor bytes, detecting the encoding.
///
/// # Example
/// ```
/// use stellaris_mod_sorter::utility::encoding::decode_text;
///
/// assert_eq!(decode_text(b"\xEF\xBB\xBFname=\"x\""), "name=\"x\"");
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (encoding, bom_len) = Encoding::detect(bytes);
    bytes_to_utf8(encoding, &bytes[bom_len..])
}

#[cfg(test)]
mod tests;
