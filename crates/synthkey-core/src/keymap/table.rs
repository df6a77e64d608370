//! The immutable key-name → native-code table.
//!
//! # Layout of a table value
//!
//! Each mapped entry stores the 16-bit value the OS character service returns
//! (on Windows, `VkKeyScanW`):
//!
//! ```text
//!  15            8 7             0
//! ┌───────────────┬───────────────┐
//! │ modifier bits │  VK code      │
//! └───────────────┴───────────────┘
//!   bit 0 SHIFT, bit 1 CONTROL, bit 2 ALT, bit 3 HANKAKU
//! ```
//!
//! Named keys (`"enter"`, `"f1"`) are stored in the same format with a zero
//! modifier byte.
//!
//! # Layout dependence
//!
//! Single-character entries reflect the keyboard layout that was active when
//! [`KeyTable::build`] ran.  A table is not updated when the user switches
//! layouts afterwards; long-running callers must build a new one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::names::{vocabulary, PRINTABLE_ASCII};
use super::windows_vk::NAMED_KEYS;

/// Modifier keys required to produce a key, as reported in the high byte of a
/// [`ScanResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModifierMask(pub u8);

impl ModifierMask {
    pub const SHIFT: u8 = 1 << 0;
    pub const CONTROL: u8 = 1 << 1;
    pub const ALT: u8 = 1 << 2;
    /// Hankaku lock.  Reported by some layouts but never synthesized.
    pub const HANKAKU: u8 = 1 << 3;

    /// A mask with no modifiers set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns `true` if every bit in `flag` is set.
    pub fn contains(self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// Returns a copy with `flag` set.
    #[must_use]
    pub fn with(self, flag: u8) -> Self {
        Self(self.0 | flag)
    }

    /// Returns `true` if no modifier bit is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Raw combined value returned by the OS character-to-virtual-key service.
///
/// The OS reports "no key produces this character" with the sentinel `-1`
/// ([`ScanResult::NO_MAPPING`]).  The sentinel is stored like any other value;
/// it decomposes to no modifiers and code `0xFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanResult(pub i16);

impl ScanResult {
    pub const NO_MAPPING: ScanResult = ScanResult(-1);

    /// Packs a modifier mask and a VK code into a combined value.
    pub fn from_parts(modifiers: ModifierMask, code: u8) -> Self {
        Self(i16::from_be_bytes([modifiers.0, code]))
    }

    /// Returns `true` if this is the OS failure sentinel.
    pub fn is_no_mapping(self) -> bool {
        self == Self::NO_MAPPING
    }

    /// High byte: the modifiers the layout needs for this character.
    pub fn modifiers(self) -> ModifierMask {
        if self.0 < 0 {
            return ModifierMask::empty();
        }
        ModifierMask(self.0.to_be_bytes()[0])
    }

    /// Low byte: the VK code.
    pub fn code(self) -> u8 {
        self.0.to_be_bytes()[1]
    }
}

/// Entry for one key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyMapEntry {
    /// The name is part of the vocabulary but has no native equivalent here.
    Unmapped,
    /// The combined modifier/VK value for the name.
    Mapped(ScanResult),
}

/// Layout-dependent character → virtual-key translation.
///
/// On Windows this wraps `VkKeyScanW`, which consults the keyboard layout of
/// the calling thread.
#[cfg_attr(test, mockall::automock)]
pub trait CharTranslator {
    /// Translates a single character under the current keyboard layout.
    ///
    /// Returns [`ScanResult::NO_MAPPING`] if no key produces `c`.
    fn translate_char(&self, c: char) -> ScanResult;
}

/// Immutable mapping from every recognised key name to its [`KeyMapEntry`].
///
/// Build one with [`KeyTable::build`] at startup and hand a reference (or the
/// owned value) to whatever synthesizes keystrokes.  There is no way to
/// mutate a table after it has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    entries: HashMap<String, KeyMapEntry>,
}

impl KeyTable {
    /// Builds the table.
    ///
    /// 1. Every vocabulary name starts as [`KeyMapEntry::Unmapped`].
    /// 2. The static [`NAMED_KEYS`] associations are applied.
    /// 3. Each printable ASCII character is translated with `translator` and
    ///    the raw result is stored for that one-character name, sentinel
    ///    included.
    ///
    /// Step 3 only writes one-character names, so multi-character named
    /// entries are never overwritten.  One-character static entries in the
    /// printable range (`" "`) take the layout's answer.
    pub fn build(translator: &dyn CharTranslator) -> Self {
        let mut entries: HashMap<String, KeyMapEntry> = vocabulary()
            .map(|name| (name, KeyMapEntry::Unmapped))
            .collect();

        for &(name, vk) in NAMED_KEYS {
            entries.insert(
                name.to_string(),
                KeyMapEntry::Mapped(ScanResult::from_parts(ModifierMask::empty(), vk)),
            );
        }

        for b in PRINTABLE_ASCII {
            let c = char::from(b);
            let scan = translator.translate_char(c);
            if scan.is_no_mapping() {
                trace!(character = ?c, "layout has no key for character");
            }
            entries.insert(c.to_string(), KeyMapEntry::Mapped(scan));
        }

        let table = Self { entries };
        debug!(
            entries = table.len(),
            unmapped = table.unmapped_count(),
            "key table built"
        );
        table
    }

    /// Returns the entry for `name`, or `None` if the name is not recognised.
    pub fn get(&self, name: &str) -> Option<KeyMapEntry> {
        self.entries.get(name).copied()
    }

    /// Returns the combined value for `name` if it is recognised and mapped.
    pub fn lookup(&self, name: &str) -> Option<ScanResult> {
        match self.get(name)? {
            KeyMapEntry::Mapped(scan) => Some(scan),
            KeyMapEntry::Unmapped => None,
        }
    }

    /// Returns `true` if `name` has an entry (mapped or not).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of recognised names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recognised names without a native equivalent.
    pub fn unmapped_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| matches!(e, KeyMapEntry::Unmapped))
            .count()
    }

    /// All entries sorted by name.
    pub fn sorted_entries(&self) -> Vec<(&str, KeyMapEntry)> {
        let mut out: Vec<(&str, KeyMapEntry)> = self
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), *entry))
            .collect();
        out.sort_unstable_by(|a, b| a.0.cmp(b.0));
        out
    }
}
