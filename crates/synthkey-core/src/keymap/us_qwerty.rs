//! A fixed US QWERTY [`CharTranslator`].
//!
//! Answers exactly what `VkKeyScanW` returns under the stock "US" layout.
//! Used where no live layout is available: dry runs on hosts without the
//! Windows backend, tests, and benchmarks.

use super::table::{CharTranslator, ModifierMask, ScanResult};

/// Unshifted punctuation and the VK_OEM_* code that types it.
const UNSHIFTED: &[(char, u8)] = &[
    (' ', 0x20),
    ('-', 0xBD),  // VK_OEM_MINUS
    ('=', 0xBB),  // VK_OEM_PLUS
    ('[', 0xDB),  // VK_OEM_4
    (']', 0xDD),  // VK_OEM_6
    ('\\', 0xDC), // VK_OEM_5
    (';', 0xBA),  // VK_OEM_1
    ('\'', 0xDE), // VK_OEM_7
    ('`', 0xC0),  // VK_OEM_3
    (',', 0xBC),  // VK_OEM_COMMA
    ('.', 0xBE),  // VK_OEM_PERIOD
    ('/', 0xBF),  // VK_OEM_2
];

/// Shifted symbols and the VK code of the key they share.
const SHIFTED: &[(char, u8)] = &[
    ('!', 0x31), ('@', 0x32), ('#', 0x33), ('$', 0x34), ('%', 0x35),
    ('^', 0x36), ('&', 0x37), ('*', 0x38), ('(', 0x39), (')', 0x30),
    ('_', 0xBD), ('+', 0xBB), ('{', 0xDB), ('}', 0xDD), ('|', 0xDC),
    (':', 0xBA), ('"', 0xDE), ('~', 0xC0), ('<', 0xBC), ('>', 0xBE),
    ('?', 0xBF),
];

/// Translator for the stock US keyboard layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsQwertyTranslator;

impl CharTranslator for UsQwertyTranslator {
    fn translate_char(&self, c: char) -> ScanResult {
        let shift = ModifierMask(ModifierMask::SHIFT);
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            return ScanResult::from_parts(ModifierMask::empty(), c.to_ascii_uppercase() as u8);
        }
        if c.is_ascii_uppercase() {
            return ScanResult::from_parts(shift, c as u8);
        }
        if let Some(&(_, vk)) = UNSHIFTED.iter().find(|(ch, _)| *ch == c) {
            return ScanResult::from_parts(ModifierMask::empty(), vk);
        }
        if let Some(&(_, vk)) = SHIFTED.iter().find(|(ch, _)| *ch == c) {
            return ScanResult::from_parts(shift, vk);
        }
        ScanResult::NO_MAPPING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::names::PRINTABLE_ASCII;

    #[test]
    fn test_letters_and_digits() {
        let t = UsQwertyTranslator;
        assert_eq!(t.translate_char('a'), ScanResult(0x41));
        assert_eq!(t.translate_char('Q'), ScanResult(0x151));
        assert_eq!(t.translate_char('7'), ScanResult(0x37));
    }

    #[test]
    fn test_symbols() {
        let t = UsQwertyTranslator;
        assert_eq!(t.translate_char('/'), ScanResult(0xBF));
        assert_eq!(t.translate_char('?'), ScanResult(0x1BF));
        assert_eq!(t.translate_char('@'), ScanResult(0x132));
    }

    #[test]
    fn test_every_printable_character_is_mapped() {
        let t = UsQwertyTranslator;
        for b in PRINTABLE_ASCII {
            let c = char::from(b);
            assert!(!t.translate_char(c).is_no_mapping(), "{c:?} must be mapped");
        }
    }

    #[test]
    fn test_non_ascii_has_no_mapping() {
        assert!(UsQwertyTranslator.translate_char('é').is_no_mapping());
    }
}
