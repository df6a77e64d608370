//! Static named-key → Windows Virtual Key (VK) code associations.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//!
//! # What is a Windows Virtual Key (VK) code? (for beginners)
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code".
//! These are defined in `<winuser.h>` and named `VK_*` (e.g., `VK_RETURN = 0x0D`,
//! `VK_SPACE = 0x20`).  They are "virtual" because they represent *logical* keys
//! rather than physical scan codes.
//!
//! # Why only named keys?
//!
//! Which VK code (and which modifiers) produce a *character* such as `@` or `ä`
//! depends on the active keyboard layout, so printable characters are resolved
//! at table-build time by asking the OS.  Named keys such as `enter` or `f5`
//! are layout-independent and live in [`NAMED_KEYS`].
//!
//! None of these entries carries modifier bits.

/// VK_SHIFT
pub const VK_SHIFT: u8 = 0x10;
/// VK_CONTROL
pub const VK_CONTROL: u8 = 0x11;
/// VK_MENU (Alt)
pub const VK_MENU: u8 = 0x12;

/// Named keys and control characters with a fixed VK code.
///
/// A name may appear here without being in the vocabulary (`"\b"`, `"super"`);
/// such aliases are still accepted.
pub const NAMED_KEYS: &[(&str, u8)] = &[
    // ── Control characters and editing ───────────────────────────────────────
    ("backspace", 0x08),  // VK_BACK
    ("\u{8}", 0x08),      // VK_BACK
    ("tab", 0x09),        // VK_TAB
    ("\t", 0x09),         // VK_TAB
    ("clear", 0x0C),      // VK_CLEAR
    ("enter", 0x0D),      // VK_RETURN
    ("\n", 0x0D),         // VK_RETURN
    ("return", 0x0D),     // VK_RETURN
    ("pause", 0x13),      // VK_PAUSE
    ("capslock", 0x14),   // VK_CAPITAL
    ("esc", 0x1B),        // VK_ESCAPE
    ("escape", 0x1B),     // VK_ESCAPE
    (" ", 0x20),          // VK_SPACE
    ("space", 0x20),      // VK_SPACE

    // ── Modifiers ────────────────────────────────────────────────────────────
    ("shift", VK_SHIFT),
    ("ctrl", VK_CONTROL),
    ("alt", VK_MENU),
    ("shiftleft", 0xA0),  // VK_LSHIFT
    ("shiftright", 0xA1), // VK_RSHIFT
    ("ctrlleft", 0xA2),   // VK_LCONTROL
    ("ctrlright", 0xA3),  // VK_RCONTROL
    ("altleft", 0xA4),    // VK_LMENU
    ("altright", 0xA5),   // VK_RMENU
    ("super", 0x5B),      // VK_LWIN
    ("win", 0x5B),        // VK_LWIN
    ("winleft", 0x5B),    // VK_LWIN
    ("winright", 0x5C),   // VK_RWIN
    ("apps", 0x5D),       // VK_APPS

    // ── IME ──────────────────────────────────────────────────────────────────
    ("kana", 0x15),       // VK_KANA
    ("hanguel", 0x15),    // VK_HANGUEL
    ("hangul", 0x15),     // VK_HANGUL
    ("junja", 0x17),      // VK_JUNJA
    ("final", 0x18),      // VK_FINAL
    ("hanja", 0x19),      // VK_HANJA
    ("kanji", 0x19),      // VK_KANJI
    ("convert", 0x1C),    // VK_CONVERT
    ("nonconvert", 0x1D), // VK_NONCONVERT
    ("accept", 0x1E),     // VK_ACCEPT
    ("modechange", 0x1F), // VK_MODECHANGE

    // ── Navigation ───────────────────────────────────────────────────────────
    ("pgup", 0x21),       // VK_PRIOR
    ("pageup", 0x21),     // VK_PRIOR
    ("pgdn", 0x22),       // VK_NEXT
    ("pagedown", 0x22),   // VK_NEXT
    ("end", 0x23),        // VK_END
    ("home", 0x24),       // VK_HOME
    ("left", 0x25),       // VK_LEFT
    ("up", 0x26),         // VK_UP
    ("right", 0x27),      // VK_RIGHT
    ("down", 0x28),       // VK_DOWN
    ("select", 0x29),     // VK_SELECT
    ("print", 0x2A),      // VK_PRINT
    ("execute", 0x2B),    // VK_EXECUTE
    ("prtsc", 0x2C),      // VK_SNAPSHOT
    ("prtscr", 0x2C),     // VK_SNAPSHOT
    ("prntscrn", 0x2C),   // VK_SNAPSHOT
    ("printscreen", 0x2C), // VK_SNAPSHOT
    ("insert", 0x2D),     // VK_INSERT
    ("del", 0x2E),        // VK_DELETE
    ("delete", 0x2E),     // VK_DELETE
    ("help", 0x2F),       // VK_HELP
    ("sleep", 0x5F),      // VK_SLEEP

    // ── Numpad (VK_NUMPAD0=0x60 … VK_NUMPAD9=0x69) ───────────────────────────
    ("num0", 0x60),
    ("num1", 0x61),
    ("num2", 0x62),
    ("num3", 0x63),
    ("num4", 0x64),
    ("num5", 0x65),
    ("num6", 0x66),
    ("num7", 0x67),
    ("num8", 0x68),
    ("num9", 0x69),
    ("multiply", 0x6A),   // VK_MULTIPLY
    ("add", 0x6B),        // VK_ADD
    ("separator", 0x6C),  // VK_SEPARATOR
    ("subtract", 0x6D),   // VK_SUBTRACT
    ("decimal", 0x6E),    // VK_DECIMAL
    ("divide", 0x6F),     // VK_DIVIDE
    ("numlock", 0x90),    // VK_NUMLOCK
    ("scrolllock", 0x91), // VK_SCROLL

    // ── Function keys (VK_F1=0x70 … VK_F24=0x87) ─────────────────────────────
    ("f1", 0x70),
    ("f2", 0x71),
    ("f3", 0x72),
    ("f4", 0x73),
    ("f5", 0x74),
    ("f6", 0x75),
    ("f7", 0x76),
    ("f8", 0x77),
    ("f9", 0x78),
    ("f10", 0x79),
    ("f11", 0x7A),
    ("f12", 0x7B),
    ("f13", 0x7C),
    ("f14", 0x7D),
    ("f15", 0x7E),
    ("f16", 0x7F),
    ("f17", 0x80),
    ("f18", 0x81),
    ("f19", 0x82),
    ("f20", 0x83),
    ("f21", 0x84),
    ("f22", 0x85),
    ("f23", 0x86),
    ("f24", 0x87),

    // ── Browser and media ────────────────────────────────────────────────────
    ("browserback", 0xA6),
    ("browserforward", 0xA7),
    ("browserrefresh", 0xA8),
    ("browserstop", 0xA9),
    ("browsersearch", 0xAA),
    ("browserfavorites", 0xAB),
    ("browserhome", 0xAC),
    ("volumemute", 0xAD),
    ("volumedown", 0xAE),
    ("volumeup", 0xAF),
    ("nexttrack", 0xB0),  // VK_MEDIA_NEXT_TRACK
    ("prevtrack", 0xB1),  // VK_MEDIA_PREV_TRACK
    ("stop", 0xB2),       // VK_MEDIA_STOP
    ("playpause", 0xB3),  // VK_MEDIA_PLAY_PAUSE
    ("launchmail", 0xB4),
    ("launchmediaselect", 0xB5),
    ("launchapp1", 0xB6),
    ("launchapp2", 0xB7),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn vk(name: &str) -> Option<u8> {
        NAMED_KEYS.iter().find(|(n, _)| *n == name).map(|&(_, code)| code)
    }

    #[test]
    fn test_common_named_keys_map_to_expected_vk() {
        let expected: &[(&str, u8)] = &[
            ("enter", 0x0D), ("\n", 0x0D), ("tab", 0x09), ("esc", 0x1B),
            ("space", 0x20), ("left", 0x25), ("f1", 0x70), ("f24", 0x87),
            ("num5", 0x65), ("win", 0x5B), ("playpause", 0xB3),
        ];
        for &(name, code) in expected {
            assert_eq!(vk(name), Some(code), "vk({name:?})");
        }
    }

    #[test]
    fn test_aliases_share_codes() {
        assert_eq!(vk("pgdn"), vk("pagedown"));
        assert_eq!(vk("del"), vk("delete"));
        assert_eq!(vk("prtsc"), vk("printscreen"));
        assert_eq!(vk("hangul"), vk("kana"));
    }

    #[test]
    fn test_platform_foreign_names_have_no_vk() {
        for name in ["fn", "yen", "command", "option", "optionleft", "optionright", "\r"] {
            assert_eq!(vk(name), None, "{name:?} has no Windows VK");
        }
    }

    #[test]
    fn test_named_keys_have_no_duplicate_names() {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in NAMED_KEYS {
            assert!(seen.insert(*name), "duplicate entry {name:?}");
        }
    }

    #[test]
    fn test_function_keys_are_contiguous() {
        for n in 1u8..=24 {
            assert_eq!(vk(&format!("f{n}")), Some(0x6F + n));
        }
    }
}
