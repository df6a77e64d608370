//! Application layer use cases.
//!
//! - **`synthesize_input`** – Resolves key names through the `KeyTable`,
//!   composes modifier-wrapped keystrokes, converts pointer coordinates, and
//!   hands the resulting primitives to a `PlatformInput` implementation that
//!   is injected at construction time.

pub mod synthesize_input;
