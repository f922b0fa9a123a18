use std::path::PathBuf;

use thiserror::Error;

/// Every way loading, cropping or saving can fail.
#[derive(Error, Debug)]
pub enum CropError {
    #[error("source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("invalid crop bounds: {0}")]
    InvalidBounds(String),

    #[error("no encoder for destination {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to encode cropped image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

// io::Error and ImageError aren't comparable, so wrapped failures match on variant and path.
impl PartialEq for CropError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CropError::SourceNotFound(p1), CropError::SourceNotFound(p2)) => p1 == p2,
            (CropError::Read { path: p1, .. }, CropError::Read { path: p2, .. }) => p1 == p2,
            (CropError::Decode { path: p1, .. }, CropError::Decode { path: p2, .. }) => p1 == p2,
            (CropError::InvalidBounds(m1), CropError::InvalidBounds(m2)) => m1 == m2,
            (CropError::UnsupportedFormat(p1), CropError::UnsupportedFormat(p2)) => p1 == p2,
            (CropError::Encode(_), CropError::Encode(_)) => true,
            (CropError::Write { path: p1, .. }, CropError::Write { path: p2, .. }) => p1 == p2,
            _ => false,
        }
    }
}

/// Shorthand used by every fallible function in this crate.
pub type Result<T> = std::result::Result<T, CropError>;
