//! Mouse buttons, mouse event flags, and screen coordinate math.
//!
//! The flag values are the Win32 `MOUSEEVENTF_*` constants, so a
//! [`MouseEventFlags`] can be handed to `SendInput` unchanged.

pub mod coords;

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use coords::{clamp_to_extent, normalize, normalize_point, CoordinateError, NORMALIZED_RANGE};

/// Mouse button identifier.
///
/// `X1` and `X2` (the side buttons) can be named but are rejected by the
/// synthesis operations, which accept only left, middle and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    X1,
    X2,
}

impl MouseButton {
    pub fn as_str(self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Middle => "middle",
            MouseButton::Right => "right",
            MouseButton::X1 => "x1",
            MouseButton::X2 => "x2",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a mouse button.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mouse button {0:?}; expected \"left\", \"middle\" or \"right\"")]
pub struct ButtonParseError(pub String);

impl FromStr for MouseButton {
    type Err = ButtonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(MouseButton::Left),
            "middle" => Ok(MouseButton::Middle),
            "right" => Ok(MouseButton::Right),
            "x1" => Ok(MouseButton::X1),
            "x2" => Ok(MouseButton::X2),
            _ => Err(ButtonParseError(s.to_string())),
        }
    }
}

/// Win32 `MOUSEEVENTF_*` flag set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MouseEventFlags(pub u32);

impl MouseEventFlags {
    pub const LEFT_DOWN: Self = Self(0x0002);
    pub const LEFT_UP: Self = Self(0x0004);
    pub const RIGHT_DOWN: Self = Self(0x0008);
    pub const RIGHT_UP: Self = Self(0x0010);
    pub const MIDDLE_DOWN: Self = Self(0x0020);
    pub const MIDDLE_UP: Self = Self(0x0040);
    pub const WHEEL: Self = Self(0x0800);

    /// Button-down flag, or `None` for buttons synthesis does not support.
    pub fn down_for(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(Self::LEFT_DOWN),
            MouseButton::Middle => Some(Self::MIDDLE_DOWN),
            MouseButton::Right => Some(Self::RIGHT_DOWN),
            MouseButton::X1 | MouseButton::X2 => None,
        }
    }

    /// Button-up flag, or `None` for buttons synthesis does not support.
    pub fn up_for(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(Self::LEFT_UP),
            MouseButton::Middle => Some(Self::MIDDLE_UP),
            MouseButton::Right => Some(Self::RIGHT_UP),
            MouseButton::X1 | MouseButton::X2 => None,
        }
    }

    /// Down and up in a single event.
    pub fn click_for(button: MouseButton) -> Option<Self> {
        Some(Self::down_for(button)? | Self::up_for(button)?)
    }
}

impl BitOr for MouseEventFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Size of the primary screen in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
