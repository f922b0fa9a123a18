use std::borrow::Cow;
use std::fs;
use std::io::{Cursor, ErrorKind};
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};

use crate::error::{CropError, Result};

/// Load an image from disk. The format is guessed from the file content, not its extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CropError::SourceNotFound(path.to_path_buf()),
        _ => CropError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    image::load_from_memory(&bytes).map_err(|source| CropError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode an in-memory image in any format the `image` crate can read.
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|source| CropError::Decode {
        path: "<memory>".into(),
        source,
    })
}

/// Pick the encoder for `path` from its extension.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(format) if format.writing_enabled() => Ok(format),
        _ => Err(CropError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Encode an image into memory.
///
/// JPEG has no alpha channel and no 16-bit samples, so anything other than L8 or RGB8
/// is flattened to RGB8 first. Every other format receives the image unchanged.
pub fn save_image_to_bytes(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let image = match (format, image.color()) {
        (ImageFormat::Jpeg, ColorType::L8 | ColorType::Rgb8) => Cow::Borrowed(image),
        (ImageFormat::Jpeg, _) => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        _ => Cow::Borrowed(image),
    };

    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), format)
        .map_err(CropError::Encode)?;
    Ok(buf)
}

/// Encode `image` for the extension of `path` and write it, replacing any existing file.
///
/// Encoding finishes before the file is opened, so an encoder failure leaves the
/// destination untouched.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    let format = output_format(path)?;
    let bytes = save_image_to_bytes(image, format)?;
    write_bytes(path, &bytes)
}

pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| CropError::Write {
        path: path.to_path_buf(),
        source,
    })
}
