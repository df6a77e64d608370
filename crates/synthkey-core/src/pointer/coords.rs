//! Pixel ↔ normalized coordinate conversion.
//!
//! Absolute mouse events on Windows take coordinates in a fixed range that
//! spans the screen regardless of its resolution.  A pixel coordinate `c` on
//! an axis of `extent` pixels becomes:
//!
//! ```text
//! normalized = floor(65536 * c / extent) + 1
//! ```

use thiserror::Error;

/// Width of the normalized coordinate space.
pub const NORMALIZED_RANGE: i64 = 65536;

/// Why a pixel coordinate could not be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("screen extent must be positive, got {0}")]
    NonPositiveExtent(i32),
    #[error("coordinate {coordinate} is too far outside a {extent}-pixel axis")]
    OutOfRange { coordinate: i32, extent: i32 },
}

/// Converts a pixel coordinate on one axis into normalized space.
///
/// # Errors
///
/// Returns [`CoordinateError::NonPositiveExtent`] if `extent` is not positive,
/// and [`CoordinateError::OutOfRange`] if the result does not fit in `i32`.
pub fn normalize(coordinate: i32, extent: i32) -> Result<i32, CoordinateError> {
    if extent <= 0 {
        return Err(CoordinateError::NonPositiveExtent(extent));
    }
    let scaled = (NORMALIZED_RANGE * i64::from(coordinate)).div_euclid(i64::from(extent)) + 1;
    i32::try_from(scaled).map_err(|_| CoordinateError::OutOfRange { coordinate, extent })
}

/// Normalizes a point against a screen of `width` × `height` pixels.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_point(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> Result<(i32, i32), CoordinateError> {
    Ok((normalize(x, width)?, normalize(y, height)?))
}

/// Clamps `value` into `[0, extent - 1]`.
pub fn clamp_to_extent(value: i32, extent: i32) -> i32 {
    if value < 0 {
        0
    } else if value >= extent {
        extent - 1
    } else {
        value
    }
}
