//! Default locations and the description of a single crop run.

use std::path::PathBuf;

use crate::crop::{AVATAR_BOUNDS, FractionalBounds};
use crate::cropper::{CropReport, crop_file};
use crate::error::Result;

/// Screenshot the avatar is cut from.
pub const DEFAULT_SOURCE: &str = "uploaded_image.png";
/// Where the portfolio site serves the avatar from.
pub const DEFAULT_DESTINATION: &str = "public/avatar.png";

pub const SOURCE_ENV: &str = "AVATAR_CROP_SOURCE";
pub const DESTINATION_ENV: &str = "AVATAR_CROP_DESTINATION";

/// One source, one destination, one set of bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CropJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bounds: FractionalBounds,
}

impl Default for CropJob {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_DESTINATION)
    }
}

impl CropJob {
    /// A job cropping `source` to the avatar bounds.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            bounds: AVATAR_BOUNDS,
        }
    }

    pub fn with_bounds(mut self, bounds: FractionalBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn run(&self) -> Result<CropReport> {
        crop_file(&self.source, &self.destination, &self.bounds)
    }
}
