//! synthkey library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! The library turns textual key names and pixel coordinates into OS input
//! events:
//!
//! 1. Key names are resolved through a `KeyTable` built once from the active
//!    keyboard layout (`synthkey-core`).
//! 2. Keys that need SHIFT, CTRL or ALT are wrapped in the matching modifier
//!    presses and releases.
//! 3. Mouse button and wheel events are converted to the normalized absolute
//!    coordinate space expected by `SendInput`.
//! 4. The resulting primitives go to a `PlatformInput` backend: the Windows
//!    `SendInput` adapter, or a recording mock for tests and dry runs.

/// Application layer: the input synthesis use case.
pub mod application;

/// Infrastructure layer: OS adapters and configuration storage.
pub mod infrastructure;
