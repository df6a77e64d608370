//! Key-name translation for keystroke synthesis.
//!
//! Callers identify keys by lowercase names (`"enter"`, `"pgdn"`, `"f11"`) or
//! by a literal character (`"a"`, `"@"`, `"\n"`).  The canonical native
//! representation is a Windows Virtual Key code plus the modifier keys that
//! must be held to produce it.
//!
//! - [`names`] – the platform-independent vocabulary and the shift predicate.
//! - [`windows_vk`] – the static named-key → VK associations.
//! - [`table`] – the [`KeyTable`](table::KeyTable) built once at startup.
//! - [`compose`] – turns a key name and a direction into ordered key events.
//! - [`us_qwerty`] – a fixed US layout translator for hosts without a live one.

pub mod compose;
pub mod names;
pub mod table;
pub mod us_qwerty;
pub mod windows_vk;

pub use compose::{compose, KeyDirection, KeyStroke};
pub use names::is_shift_character;
pub use table::{CharTranslator, KeyMapEntry, KeyTable, ModifierMask, ScanResult};
pub use us_qwerty::UsQwertyTranslator;
