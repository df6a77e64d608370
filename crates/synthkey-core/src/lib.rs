//! # synthkey-core
//!
//! Shared library for synthkey containing the key-name vocabulary, the
//! Windows virtual-key translation table, the modifier-aware keystroke
//! composer, and the pointer coordinate math.
//!
//! This crate has zero dependencies on OS APIs.  Everything that needs the
//! operating system (the layout-dependent character lookup, event injection,
//! screen metrics) is reached through traits implemented by the `synthkey`
//! crate.
//!
//! # Architecture overview (for beginners)
//!
//! Synthesizing a keystroke means telling the OS "this key went down" and
//! later "this key went up", exactly as a physical keyboard would.  Callers
//! name keys with friendly strings (`"enter"`, `"f5"`, `"@"`); the OS wants
//! numeric *virtual-key codes* plus the right modifier keys held around them.
//!
//! - **`keymap`** – The vocabulary of key names, the static named-key table,
//!   the [`KeyTable`] built once at startup, and the composer that turns a key
//!   name plus a direction into an ordered list of [`KeyStroke`]s.
//!
//! - **`pointer`** – Mouse button identifiers, mouse event flag values, and the
//!   conversion from pixel coordinates to the OS's normalized absolute space.

pub mod keymap;
pub mod pointer;

// Re-export the most-used types at the crate root so callers can write
// `synthkey_core::KeyTable` instead of `synthkey_core::keymap::table::KeyTable`.
pub use keymap::compose::{compose, KeyDirection, KeyStroke};
pub use keymap::table::{CharTranslator, KeyMapEntry, KeyTable, ModifierMask, ScanResult};
pub use keymap::us_qwerty::UsQwertyTranslator;
pub use pointer::{ButtonParseError, CoordinateError, MouseButton, MouseEventFlags, ScreenSize};
