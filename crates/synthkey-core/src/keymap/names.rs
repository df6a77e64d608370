//! The platform-independent key-name vocabulary.
//!
//! Every name listed here is accepted by `key_down` / `key_up` on every
//! platform.  A name that has no native equivalent on the current platform
//! still gets a table entry; it is simply `Unmapped`, which makes the
//! keyboard operations a silent no-op for it.
//!
//! Names are always lowercase.  Single printable characters are not listed
//! here: [`vocabulary`] appends the whole printable ASCII range.

use std::ops::RangeInclusive;

/// Printable ASCII characters, each of which is a valid single-character key name.
pub const PRINTABLE_ASCII: RangeInclusive<u8> = 0x20..=0x7E;

/// Characters that need SHIFT on a standard US layout, beyond the uppercase letters.
const SHIFTED_SYMBOLS: &str = "~!@#$%^&*()_+{}|:\"<>?";

/// Named keys and control characters in the vocabulary.
pub const KEY_NAMES: &[&str] = &[
    "\t", "\n", "\r",
    "accept", "add", "alt", "altleft", "altright", "apps", "backspace",
    "browserback", "browserfavorites", "browserforward", "browserhome",
    "browserrefresh", "browsersearch", "browserstop", "capslock", "clear",
    "convert", "ctrl", "ctrlleft", "ctrlright", "decimal", "del", "delete",
    "divide", "down", "end", "enter", "esc", "escape", "execute",
    "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12",
    "f13", "f14", "f15", "f16", "f17", "f18", "f19", "f20", "f21", "f22", "f23", "f24",
    "final", "fn", "hanguel", "hangul", "hanja", "help", "home", "insert", "junja",
    "kana", "kanji", "launchapp1", "launchapp2", "launchmail", "launchmediaselect",
    "left", "modechange", "multiply", "nexttrack", "nonconvert",
    "num0", "num1", "num2", "num3", "num4", "num5", "num6", "num7", "num8", "num9",
    "numlock", "pagedown", "pageup", "pause", "pgdn", "pgup", "playpause",
    "prevtrack", "print", "printscreen", "prntscrn", "prtsc", "prtscr", "return",
    "right", "scrolllock", "select", "separator", "shift", "shiftleft",
    "shiftright", "sleep", "space", "stop", "subtract", "tab", "up",
    "volumedown", "volumemute", "volumeup", "win", "winleft", "winright", "yen",
    "command", "option", "optionleft", "optionright",
];

/// Iterates over the full vocabulary: [`KEY_NAMES`] followed by every
/// printable ASCII character as a one-character string.
pub fn vocabulary() -> impl Iterator<Item = String> {
    KEY_NAMES
        .iter()
        .map(|name| (*name).to_string())
        .chain(PRINTABLE_ASCII.map(|b| char::from(b).to_string()))
}

/// Returns `true` if `key` is a character conventionally typed with SHIFT
/// held on a standard layout.
///
/// Uppercase text (at least one cased character, none lowercase) and the
/// shifted symbols `~!@#$%^&*()_+{}|:"<>?` qualify.  The check looks only at
/// the logical key name, never at the keyboard layout.
pub fn is_shift_character(key: &str) -> bool {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if SHIFTED_SYMBOLS.contains(c) {
            return true;
        }
    }
    key.chars().any(char::is_uppercase) && !key.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_are_lowercase() {
        for name in KEY_NAMES {
            assert_eq!(*name, name.to_lowercase(), "{name:?} must be lowercase");
        }
    }

    #[test]
    fn test_key_names_have_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for name in KEY_NAMES {
            assert!(seen.insert(*name), "duplicate key name {name:?}");
        }
    }

    #[test]
    fn test_vocabulary_contains_every_printable_ascii_character() {
        let vocab: Vec<String> = vocabulary().collect();
        for b in PRINTABLE_ASCII {
            let s = char::from(b).to_string();
            assert!(vocab.contains(&s), "vocabulary must contain {s:?}");
        }
    }

    #[test]
    fn test_shifted_symbols_need_shift() {
        for c in "~!@#$%^&*()_+{}|:\"<>?".chars() {
            assert!(is_shift_character(&c.to_string()), "{c:?} needs shift");
        }
    }

    #[test]
    fn test_uppercase_letters_need_shift() {
        assert!(is_shift_character("A"));
        assert!(is_shift_character("Z"));
    }

    #[test]
    fn test_unshifted_characters_do_not_need_shift() {
        for key in ["a", "1", "-", "=", "[", ";", "'", ",", ".", "/", "`", " ", "\n"] {
            assert!(!is_shift_character(key), "{key:?} must not need shift");
        }
    }

    #[test]
    fn test_named_keys_do_not_need_shift() {
        assert!(!is_shift_character("enter"));
        assert!(!is_shift_character("f1"));
        assert!(!is_shift_character("shift"));
    }

    #[test]
    fn test_multi_character_symbol_strings_are_not_shift_symbols() {
        assert!(!is_shift_character("!!"));
    }
}
