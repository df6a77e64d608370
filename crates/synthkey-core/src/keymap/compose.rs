//! Modifier-aware keystroke composition.
//!
//! Turns `(key name, direction)` into the ordered native key events that
//! produce it.  Modifiers nest strictly around the target key:
//!
//! ```text
//! Down:  ALT↓  CTRL↓  SHIFT↓  KEY↓
//! Up:    KEY↑  SHIFT↑ CTRL↑   ALT↑
//! ```
//!
//! Only the modifiers that the key actually needs are emitted.  A down call
//! leaves everything held; the matching up call releases in exact reverse.
//! There is no "press" here: a press is a down followed by an up.

use super::names::is_shift_character;
use super::table::{KeyTable, ModifierMask, ScanResult};
use super::windows_vk::{VK_CONTROL, VK_MENU, VK_SHIFT};

/// Whether a key is being pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDirection {
    Down,
    Up,
}

/// One native key event to inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    /// Windows VK code.
    pub code: u8,
    pub key_up: bool,
}

impl KeyStroke {
    pub fn down(code: u8) -> Self {
        Self { code, key_up: false }
    }

    pub fn up(code: u8) -> Self {
        Self { code, key_up: true }
    }
}

/// Acquisition order, outermost first.
const MODIFIER_ORDER: [(u8, u8); 3] = [
    (ModifierMask::ALT, VK_MENU),
    (ModifierMask::CONTROL, VK_CONTROL),
    (ModifierMask::SHIFT, VK_SHIFT),
];

/// Modifiers that will be synthesized for `key` given its table value.
///
/// SHIFT is added when the key name itself is a shifted character, whatever
/// the layout reported.  HANKAKU is dropped: it is never synthesized.
pub fn effective_modifiers(key: &str, scan: ScanResult) -> ModifierMask {
    let mut mods = scan.modifiers();
    if is_shift_character(key) {
        mods = mods.with(ModifierMask::SHIFT);
    }
    ModifierMask(mods.0 & !ModifierMask::HANKAKU)
}

/// Composes the native key events for `key` moving in `direction`.
///
/// Returns an empty list when `key` is not in `table` or is unmapped on this
/// platform.  Callers treat that as a silent no-op.
pub fn compose(table: &KeyTable, key: &str, direction: KeyDirection) -> Vec<KeyStroke> {
    let Some(scan) = table.lookup(key) else {
        return Vec::new();
    };
    let mods = effective_modifiers(key, scan);
    let code = scan.code();

    let held = MODIFIER_ORDER
        .iter()
        .filter(|(flag, _)| mods.contains(*flag))
        .map(|&(_, vk)| vk);

    let mut strokes = Vec::with_capacity(MODIFIER_ORDER.len() + 1);
    match direction {
        KeyDirection::Down => {
            strokes.extend(held.map(KeyStroke::down));
            strokes.push(KeyStroke::down(code));
        }
        KeyDirection::Up => {
            strokes.push(KeyStroke::up(code));
            strokes.extend(held.rev().map(KeyStroke::up));
        }
    }
    strokes
}
