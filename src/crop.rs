//! Fractional crop bounds and their mapping onto an image's pixel grid.

use std::fmt;

use crate::error::{CropError, Result};

/// Bounds that frame the avatar (character and laptop) in the upper right of the
/// portfolio screenshot.
pub const AVATAR_BOUNDS: FractionalBounds = FractionalBounds::new(0.55, 0.08, 0.95, 0.35);

/// A crop rectangle expressed as proportions of the source width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// A crop rectangle in pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for PixelRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

impl FractionalBounds {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Checks `0 <= left < right <= 1` and `0 <= top < bottom <= 1`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CropError::InvalidBounds(format!(
                    "{name} must lie within [0, 1], got {value}"
                )));
            }
        }

        if self.left >= self.right {
            return Err(CropError::InvalidBounds(format!(
                "left ({}) must be smaller than right ({})",
                self.left, self.right
            )));
        }
        if self.top >= self.bottom {
            return Err(CropError::InvalidBounds(format!(
                "top ({}) must be smaller than bottom ({})",
                self.top, self.bottom
            )));
        }

        Ok(())
    }

    /// Map the bounds onto a `width` x `height` image.
    ///
    /// Each edge is scaled and rounded on its own, so the resulting size is within one
    /// pixel of `round((right - left) * width)` by `round((bottom - top) * height)`.
    /// Bounds that round to an empty region are rejected rather than producing a
    /// zero-sized image.
    pub fn to_pixels(&self, width: u32, height: u32) -> Result<PixelRegion> {
        self.validate()?;

        let x0 = scale(self.left, width);
        let x1 = scale(self.right, width);
        let y0 = scale(self.top, height);
        let y1 = scale(self.bottom, height);

        if x1 <= x0 || y1 <= y0 {
            return Err(CropError::InvalidBounds(format!(
                "bounds select an empty {}x{} region of a {width}x{height} image",
                x1.saturating_sub(x0),
                y1.saturating_sub(y0)
            )));
        }

        Ok(PixelRegion {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

// fraction is already validated to [0, 1]; ties go to the even pixel
fn scale(fraction: f64, extent: u32) -> u32 {
    (fraction * f64::from(extent)).round_ties_even() as u32
}
