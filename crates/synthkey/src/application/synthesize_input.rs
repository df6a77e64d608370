//! InputSynthesizer: turns keyboard and mouse requests into OS input events.
//!
//! This use case sits at the application layer and delegates to a
//! [`PlatformInput`] trait object for OS-level event injection.  The
//! platform-specific implementations are in the infrastructure layer.
//!
//! # Two error policies
//!
//! - The keyboard path is permissive.  Unknown or unmapped key names do
//!   nothing, and injection failures are logged and dropped.  `key_down` and
//!   `key_up` cannot fail.
//! - The mouse button path is strict about its argument: a button other than
//!   left, middle or right is rejected with [`SynthError::InvalidButton`]
//!   before anything is injected.  Once the button is accepted, OS failures
//!   while injecting are logged at debug level and discarded.  Scrolling has
//!   no argument to reject, so it cannot fail at all.

use std::sync::Arc;

use synthkey_core::{
    keymap::{compose, CharTranslator, KeyDirection, KeyStroke, KeyTable},
    pointer::{clamp_to_extent, normalize_point},
    ButtonParseError, CoordinateError, MouseButton, MouseEventFlags, ScreenSize,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for input synthesis operations.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("invalid mouse button {0:?}: expected \"left\", \"middle\" or \"right\"")]
    InvalidButton(String),
    #[error("platform error: {0}")]
    Platform(String),
    #[error("cannot normalize mouse coordinates: {0}")]
    Coordinates(#[from] CoordinateError),
}

impl From<ButtonParseError> for SynthError {
    fn from(err: ButtonParseError) -> Self {
        SynthError::InvalidButton(err.0)
    }
}

/// OS input primitives consumed by [`InputSynthesizer`].
///
/// Each supported OS provides an implementation in the infrastructure layer.
pub trait PlatformInput: Send + Sync {
    /// Current cursor position in screen pixels.
    fn cursor_position(&self) -> Result<(i32, i32), SynthError>;

    /// Size of the primary screen in pixels.
    fn screen_size(&self) -> Result<ScreenSize, SynthError>;

    /// Moves the cursor to a pixel position.
    fn set_cursor_position(&self, x: i32, y: i32) -> Result<(), SynthError>;

    /// Injects one key transition for a Windows VK code.
    fn inject_key_event(&self, code: u8, key_up: bool) -> Result<(), SynthError>;

    /// Injects one mouse event.  `x` and `y` are in normalized space; `data`
    /// carries the wheel amount for wheel events and is zero otherwise.
    fn inject_mouse_event(
        &self,
        flags: MouseEventFlags,
        x: i32,
        y: i32,
        data: i32,
    ) -> Result<(), SynthError>;
}

/// The input synthesis use case.
///
/// Owns the [`KeyTable`] it was given; the table never changes unless the
/// caller explicitly rebuilds it after a keyboard layout switch.
pub struct InputSynthesizer {
    platform: Arc<dyn PlatformInput>,
    key_table: KeyTable,
}

impl InputSynthesizer {
    /// Creates a synthesizer over `platform` using a prebuilt `key_table`.
    pub fn new(platform: Arc<dyn PlatformInput>, key_table: KeyTable) -> Self {
        Self { platform, key_table }
    }

    /// Creates a synthesizer whose key table is built from the platform's own
    /// layout translator.
    pub fn from_platform<P>(platform: Arc<P>) -> Self
    where
        P: PlatformInput + CharTranslator + 'static,
    {
        let key_table = KeyTable::build(platform.as_ref());
        Self::new(platform, key_table)
    }

    /// The table used to resolve key names.
    pub fn key_table(&self) -> &KeyTable {
        &self.key_table
    }

    /// Replaces the key table with one built under the current layout.
    pub fn rebuild_key_table(&mut self, translator: &dyn CharTranslator) {
        self.key_table = KeyTable::build(translator);
    }

    // ── Keyboard ─────────────────────────────────────────────────────────────

    /// Presses `key` and leaves it, and any modifiers it needs, held down.
    ///
    /// Does nothing if `key` is unknown or has no native equivalent.
    pub fn key_down(&self, key: &str) {
        self.emit_keys(key, &compose(&self.key_table, key, KeyDirection::Down));
    }

    /// Releases `key` and then the modifiers `key_down` acquired for it.
    ///
    /// Does nothing if `key` is unknown or has no native equivalent.
    pub fn key_up(&self, key: &str) {
        self.emit_keys(key, &compose(&self.key_table, key, KeyDirection::Up));
    }

    fn emit_keys(&self, key: &str, strokes: &[KeyStroke]) {
        if strokes.is_empty() {
            debug!(key, "no native key for name; skipping");
            return;
        }
        for stroke in strokes {
            debug!(key, code = stroke.code, key_up = stroke.key_up, "inject key");
            if let Err(e) = self.platform.inject_key_event(stroke.code, stroke.key_up) {
                warn!(key, code = stroke.code, "key injection failed: {e}");
            }
        }
    }

    // ── Pointer queries ──────────────────────────────────────────────────────

    /// Current cursor position in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Platform`] if the OS query fails.
    pub fn position(&self) -> Result<(i32, i32), SynthError> {
        self.platform.cursor_position()
    }

    /// Primary screen size in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Platform`] if the OS query fails.
    pub fn size(&self) -> Result<ScreenSize, SynthError> {
        self.platform.screen_size()
    }

    // ── Pointer actions ──────────────────────────────────────────────────────

    /// Moves the cursor to `(x, y)` in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Platform`] if the OS rejects the position.
    pub fn move_to(&self, x: i32, y: i32) -> Result<(), SynthError> {
        debug!(x, y, "move cursor");
        self.platform.set_cursor_position(x, y)
    }

    /// Presses `button` at `(x, y)` without releasing it.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidButton`] for buttons other than left,
    /// middle and right.
    pub fn mouse_down(&self, x: i32, y: i32, button: MouseButton) -> Result<(), SynthError> {
        let flags = button_flags(button, MouseEventFlags::down_for)?;
        self.send_mouse_event(flags, x, y, 0);
        Ok(())
    }

    /// Releases `button` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidButton`] for buttons other than left,
    /// middle and right.
    pub fn mouse_up(&self, x: i32, y: i32, button: MouseButton) -> Result<(), SynthError> {
        let flags = button_flags(button, MouseEventFlags::up_for)?;
        self.send_mouse_event(flags, x, y, 0);
        Ok(())
    }

    /// Presses and releases `button` at `(x, y)` in a single event.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidButton`] for buttons other than left,
    /// middle and right.
    pub fn click(&self, x: i32, y: i32, button: MouseButton) -> Result<(), SynthError> {
        let flags = button_flags(button, MouseEventFlags::click_for)?;
        self.send_mouse_event(flags, x, y, 0);
        Ok(())
    }

    /// Turns the wheel by `clicks` (positive is away from the user).
    ///
    /// Omitted coordinates default to the current cursor position.  Given
    /// coordinates are clamped to the screen.  OS failures, including the
    /// cursor and screen queries, are logged at debug level and discarded.
    pub fn scroll(&self, clicks: i32, x: Option<i32>, y: Option<i32>) {
        if let Err(e) = self.try_scroll(clicks, x, y) {
            debug!(clicks, ?x, ?y, "scroll failed; ignoring: {e}");
        }
    }

    /// Same as [`scroll`](Self::scroll).
    pub fn hscroll(&self, clicks: i32, x: Option<i32>, y: Option<i32>) {
        self.scroll(clicks, x, y);
    }

    /// Same as [`scroll`](Self::scroll).
    pub fn vscroll(&self, clicks: i32, x: Option<i32>, y: Option<i32>) {
        self.scroll(clicks, x, y);
    }

    fn try_scroll(&self, clicks: i32, x: Option<i32>, y: Option<i32>) -> Result<(), SynthError> {
        let size = self.platform.screen_size()?;
        let (x, y) = match (x, y) {
            (Some(x), Some(y)) => (
                clamp_to_extent(x, size.width),
                clamp_to_extent(y, size.height),
            ),
            _ => {
                let (cur_x, cur_y) = self.platform.cursor_position()?;
                (
                    x.map_or(cur_x, |x| clamp_to_extent(x, size.width)),
                    y.map_or(cur_y, |y| clamp_to_extent(y, size.height)),
                )
            }
        };
        self.inject_normalized(size, MouseEventFlags::WHEEL, x, y, clicks)
    }

    /// Injects a button event at pixel `(x, y)`, discarding any failure.
    ///
    /// The flags carry neither `MOVE` nor `ABSOLUTE`, so the OS ignores the
    /// normalized position and the event lands wherever the cursor already
    /// is.  Callers that need the pointer at `(x, y)` call
    /// [`move_to`](Self::move_to) first.
    fn send_mouse_event(&self, flags: MouseEventFlags, x: i32, y: i32, data: i32) {
        let result = self
            .platform
            .screen_size()
            .and_then(|size| self.inject_normalized(size, flags, x, y, data));
        if let Err(e) = result {
            debug!(flags = flags.0, x, y, "mouse injection failed; ignoring: {e}");
        }
    }

    fn inject_normalized(
        &self,
        size: ScreenSize,
        flags: MouseEventFlags,
        x: i32,
        y: i32,
        data: i32,
    ) -> Result<(), SynthError> {
        let (norm_x, norm_y) = normalize_point(x, y, size.width, size.height)?;
        debug!(flags = flags.0, x, y, norm_x, norm_y, data, "inject mouse");
        self.platform.inject_mouse_event(flags, norm_x, norm_y, data)
    }
}

fn button_flags(
    button: MouseButton,
    select: fn(MouseButton) -> Option<MouseEventFlags>,
) -> Result<MouseEventFlags, SynthError> {
    select(button).ok_or_else(|| SynthError::InvalidButton(button.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
