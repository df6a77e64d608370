//! Mock platform input for tests and dry runs.
//!
//! # Why a mock platform?
//!
//! The real backend (`WindowsPlatformInput`) makes OS API calls that:
//!
//! - Require an interactive desktop session to run.
//! - Actually move the cursor or press keys on the machine.
//! - Cannot be observed directly from Rust test code.
//!
//! The `MockPlatformInput` replaces all OS calls with in-memory recording.
//! Each injected event is pushed into a `Mutex<Vec<InjectedEvent>>` so that
//! test assertions (and the CLI's `--dry-run` output) can inspect exactly what
//! was emitted and in what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let platform = Arc::new(MockPlatformInput::new(ScreenSize::new(1920, 1080)));
//! let synth = InputSynthesizer::from_platform(Arc::clone(&platform));
//!
//! synth.key_down("a");
//!
//! assert_eq!(platform.events(), vec![InjectedEvent::Key { code: 0x41, key_up: false }]);
//! ```
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every injection call (keys, mouse events,
//! cursor moves) return `SynthError::Platform`.  Queries keep working so the
//! suppression paths in the synthesizer can be exercised.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use synthkey_core::{
    keymap::{CharTranslator, ScanResult, UsQwertyTranslator},
    MouseEventFlags, ScreenSize,
};

use crate::application::synthesize_input::{PlatformInput, SynthError};

/// One primitive call recorded by [`MockPlatformInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedEvent {
    Key {
        code: u8,
        key_up: bool,
    },
    Mouse {
        flags: MouseEventFlags,
        x: i32,
        y: i32,
        data: i32,
    },
    CursorMoved {
        x: i32,
        y: i32,
    },
}

impl fmt::Display for InjectedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InjectedEvent::Key { code, key_up } => {
                let dir = if key_up { "up" } else { "down" };
                write!(f, "key {dir:<4} vk=0x{code:02X}")
            }
            InjectedEvent::Mouse { flags, x, y, data } => {
                write!(f, "mouse flags=0x{:04X} x={x} y={y} data={data}", flags.0)
            }
            InjectedEvent::CursorMoved { x, y } => write!(f, "cursor x={x} y={y}"),
        }
    }
}

/// A mock platform that records all calls without performing OS API calls.
///
/// Character translation follows the stock US layout.
pub struct MockPlatformInput {
    events: Mutex<Vec<InjectedEvent>>,
    cursor: Mutex<(i32, i32)>,
    screen: ScreenSize,
    /// When `true`, every injection method returns an `SynthError::Platform`.
    pub should_fail: bool,
}

impl MockPlatformInput {
    /// Creates a mock with the cursor at the origin of a `screen`-sized display.
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            cursor: Mutex::new((0, 0)),
            screen,
            should_fail: false,
        }
    }

    /// A mock with a single 1920x1080 display.
    pub fn single_1080p() -> Self {
        Self::new(ScreenSize::new(1920, 1080))
    }

    /// Places the cursor without recording an event.
    #[must_use]
    pub fn with_cursor(self, x: i32, y: i32) -> Self {
        *lock(&self.cursor) = (x, y);
        self
    }

    /// Snapshot of everything injected so far, in order.
    pub fn events(&self) -> Vec<InjectedEvent> {
        lock(&self.events).clone()
    }

    /// Drops all recorded events.
    pub fn clear(&self) {
        lock(&self.events).clear();
    }

    fn record(&self, event: InjectedEvent) -> Result<(), SynthError> {
        if self.should_fail {
            return Err(SynthError::Platform("mock failure".into()));
        }
        lock(&self.events).push(event);
        Ok(())
    }
}

impl Default for MockPlatformInput {
    fn default() -> Self {
        Self::single_1080p()
    }
}

impl PlatformInput for MockPlatformInput {
    fn cursor_position(&self) -> Result<(i32, i32), SynthError> {
        Ok(*lock(&self.cursor))
    }

    fn screen_size(&self) -> Result<ScreenSize, SynthError> {
        Ok(self.screen)
    }

    /// Records the move and updates the cursor, or fails if `should_fail` is set.
    fn set_cursor_position(&self, x: i32, y: i32) -> Result<(), SynthError> {
        self.record(InjectedEvent::CursorMoved { x, y })?;
        *lock(&self.cursor) = (x, y);
        Ok(())
    }

    fn inject_key_event(&self, code: u8, key_up: bool) -> Result<(), SynthError> {
        self.record(InjectedEvent::Key { code, key_up })
    }

    fn inject_mouse_event(
        &self,
        flags: MouseEventFlags,
        x: i32,
        y: i32,
        data: i32,
    ) -> Result<(), SynthError> {
        self.record(InjectedEvent::Mouse { flags, x, y, data })
    }
}

impl CharTranslator for MockPlatformInput {
    fn translate_char(&self, c: char) -> ScanResult {
        UsQwertyTranslator.translate_char(c)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
