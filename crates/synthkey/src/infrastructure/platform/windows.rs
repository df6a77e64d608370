//! Windows input injection via the SendInput API.
//!
//! Keys are injected as virtual-key events, mouse events use the normalized
//! coordinates computed by the synthesizer, and character translation asks
//! `VkKeyScanW` under the calling thread's keyboard layout.

#![cfg(target_os = "windows")]

use synthkey_core::{
    keymap::{CharTranslator, ScanResult},
    MouseEventFlags, ScreenSize,
};
use tracing::debug;
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, VkKeyScanW, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT,
    KEYBD_EVENT_FLAGS, KEYEVENTF_KEYUP, MOUSEINPUT, MOUSE_EVENT_FLAGS, VIRTUAL_KEY,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SetCursorPos, SetProcessDPIAware, SM_CXSCREEN, SM_CYSCREEN,
};

use crate::application::synthesize_input::{PlatformInput, SynthError};

/// Pre-computed size of `INPUT` struct for `SendInput` calls.
const INPUT_SIZE: i32 = std::mem::size_of::<INPUT>() as i32;

/// Windows implementation of [`PlatformInput`] using SendInput.
pub struct WindowsPlatformInput;

impl WindowsPlatformInput {
    /// Creates the backend and marks the process DPI-aware, so screen metrics
    /// and cursor positions are reported in physical pixels.
    pub fn new() -> Self {
        // SAFETY: SetProcessDPIAware takes no arguments and only changes
        // process-wide DPI scaling behaviour.  Failure (already set, or an
        // older OS) leaves the default behaviour in place.
        let dpi_aware = unsafe { SetProcessDPIAware() }.as_bool();
        debug!(dpi_aware, "windows input backend ready");
        Self
    }
}

impl Default for WindowsPlatformInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformInput for WindowsPlatformInput {
    fn cursor_position(&self) -> Result<(i32, i32), SynthError> {
        let mut point = POINT::default();
        // SAFETY: point is a valid, writable POINT on the stack
        unsafe { GetCursorPos(&mut point) }
            .map_err(|e| SynthError::Platform(format!("GetCursorPos failed: {e}")))?;
        Ok((point.x, point.y))
    }

    fn screen_size(&self) -> Result<ScreenSize, SynthError> {
        // SAFETY: GetSystemMetrics is always safe to call
        let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
        let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        Ok(ScreenSize::new(width, height))
    }

    fn set_cursor_position(&self, x: i32, y: i32) -> Result<(), SynthError> {
        // SAFETY: SetCursorPos takes plain integers
        unsafe { SetCursorPos(x, y) }
            .map_err(|e| SynthError::Platform(format!("SetCursorPos failed: {e}")))
    }

    fn inject_key_event(&self, code: u8, key_up: bool) -> Result<(), SynthError> {
        let flags = if key_up {
            KEYEVENTF_KEYUP
        } else {
            KEYBD_EVENT_FLAGS(0)
        };
        send(INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(u16::from(code)),
                    wScan: 0,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        })
    }

    fn inject_mouse_event(
        &self,
        flags: MouseEventFlags,
        x: i32,
        y: i32,
        data: i32,
    ) -> Result<(), SynthError> {
        send(INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx: x,
                    dy: y,
                    // Win32 treats mouseData as signed for wheel events; `as u32`
                    // keeps the bit pattern.
                    mouseData: data as u32,
                    dwFlags: MOUSE_EVENT_FLAGS(flags.0),
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        })
    }
}

impl CharTranslator for WindowsPlatformInput {
    fn translate_char(&self, c: char) -> ScanResult {
        let Ok(unit) = u16::try_from(u32::from(c)) else {
            return ScanResult::NO_MAPPING;
        };
        // SAFETY: VkKeyScanW takes a UTF-16 code unit and reads only the
        // current thread's keyboard layout
        ScanResult(unsafe { VkKeyScanW(unit) })
    }
}

fn send(input: INPUT) -> Result<(), SynthError> {
    // SAFETY: input is a valid INPUT structure on the stack
    let sent = unsafe { SendInput(&[input], INPUT_SIZE) };
    if sent == 0 {
        let err = windows::core::Error::from_win32();
        return Err(SynthError::Platform(format!("SendInput failed: {err}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_size_is_positive() {
        let platform = WindowsPlatformInput::new();
        let size = platform.screen_size().unwrap();
        assert!(size.width > 0 && size.height > 0);
    }

    #[test]
    fn test_translate_non_bmp_character_has_no_mapping() {
        let platform = WindowsPlatformInput::new();
        assert!(platform.translate_char('😀').is_no_mapping());
    }

    #[test]
    fn test_translate_space_is_vk_space() {
        let platform = WindowsPlatformInput::new();
        assert_eq!(platform.translate_char(' ').code(), 0x20);
    }
}
