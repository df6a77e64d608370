//! Platform input backends.
//!
//! | Backend                | Platform | Notes                               |
//! |------------------------|----------|-------------------------------------|
//! | `WindowsPlatformInput` | Windows  | `SendInput` + `VkKeyScanW`          |
//! | `MockPlatformInput`    | any      | records events; tests and dry runs  |

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;
