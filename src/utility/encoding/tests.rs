// stellaris-mod-sorter: Stellaris Mod Load Order Sorter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Encoding, bytes_to_utf8, decode_text};

#[test]
fn test_utf8_passthrough() {
    let input = "Hello, 世界!";
    let result = bytes_to_utf8(Encoding::Utf8, input.as_bytes());
    insta::assert_snapshot!(result, @"Hello, 世界!");
}

#[test]
fn test_windows_1252_conversion() {
    // "café" in Windows-1252: 0x63 0x61 0x66 0xe9
    let result = bytes_to_utf8(Encoding::Acp, b"caf\xe9");
    insta::assert_snapshot!(result, @"café");
}

#[test]
fn test_detect() {
    assert_eq!(Encoding::detect(b"plain"), (Encoding::Utf8, 0));
    assert_eq!(Encoding::detect(b"\xEF\xBB\xBFbom"), (Encoding::Utf8, 3));
    assert_eq!(Encoding::detect(b"\xFF\xFEH\x00"), (Encoding::Utf16Le, 2));
    assert_eq!(Encoding::detect(b"\xFE\xFF\x00H"), (Encoding::Utf16Be, 2));
    assert_eq!(Encoding::detect(b"caf\xe9"), (Encoding::Acp, 0));
}

#[test]
fn test_decode_text_strips_bom() {
    assert_eq!(decode_text(b"\xEF\xBB\xBFtags={"), "tags={");
}

#[test]
fn test_decode_text_utf16() {
    // "Hi" in UTF-16 LE with BOM
    assert_eq!(decode_text(b"\xFF\xFEH\x00i\x00"), "Hi");
}

#[test]
fn test_decode_text_legacy_fallback() {
    assert_eq!(decode_text(b"name=\"Caf\xe9\""), "name=\"Café\"");
}

#[test]
fn test_empty_input() {
    assert_eq!(decode_text(b""), "");
}
