//! Crop an image to fractional bounds, in memory or from one file to another.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};

use crate::crop::{FractionalBounds, PixelRegion};
use crate::error::Result;
use crate::image_handler::{self, load_image, output_format, save_image_to_bytes};

/// Outcome of a successful `crop_file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropReport {
    pub source_dimensions: (u32, u32),
    pub region: PixelRegion,
    pub destination: PathBuf,
}

/// Extract the region `bounds` selects from `image`.
pub fn crop_image(
    image: &DynamicImage,
    bounds: &FractionalBounds,
) -> Result<(DynamicImage, PixelRegion)> {
    let (width, height) = image.dimensions();
    let region = bounds.to_pixels(width, height)?;
    let cropped = image.crop_imm(region.x, region.y, region.width, region.height);
    Ok((cropped, region))
}

/// Crop `source` to `bounds` and write the result to `destination`.
///
/// The destination is created or overwritten only once the cropped image has been
/// encoded. A missing or unreadable source, bad bounds or an unsupported destination
/// extension leave the destination as it was. The source is only read.
pub fn crop_file(
    source: &Path,
    destination: &Path,
    bounds: &FractionalBounds,
) -> Result<CropReport> {
    let image = load_image(source)?;
    let format = output_format(destination)?;

    let (cropped, region) = crop_image(&image, bounds)?;
    let bytes = save_image_to_bytes(&cropped, format)?;
    image_handler::write_bytes(destination, &bytes)?;

    Ok(CropReport {
        source_dimensions: image.dimensions(),
        region,
        destination: destination.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::AVATAR_BOUNDS;
    use crate::error::CropError;
    use image::{ImageBuffer, ImageFormat, Rgb, Rgba};
    use rand::Rng;
    use std::fs;
    use tempfile::TempDir;

    // Gradient where every pixel encodes its own coordinates
    fn create_dummy_rgb_image(width: u32, height: u32) -> DynamicImage {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        DynamicImage::ImageRgb8(img)
    }

    fn create_noise_rgba_image(width: u32, height: u32) -> DynamicImage {
        let mut rng = rand::rng();
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_fn(width, height, |_, _| Rgba(rng.random()));
        DynamicImage::ImageRgba8(img)
    }

    fn write_png(dir: &TempDir, name: &str, image: &DynamicImage) -> PathBuf {
        let path = dir.path().join(name);
        let bytes = save_image_to_bytes(image, ImageFormat::Png).unwrap();
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_crop_image_copies_selected_pixels() {
        let image = create_dummy_rgb_image(200, 100);
        let bounds = FractionalBounds::new(0.25, 0.5, 0.75, 1.0);

        let (cropped, region) = crop_image(&image, &bounds).unwrap();
        assert_eq!(
            region,
            PixelRegion {
                x: 50,
                y: 50,
                width: 100,
                height: 50
            }
        );
        assert_eq!(cropped.dimensions(), (100, 50));

        let rgb = cropped.to_rgb8();
        assert_eq!(*rgb.get_pixel(0, 0), Rgb([50, 50, 100]));
        assert_eq!(*rgb.get_pixel(99, 49), Rgb([149, 99, 248]));
    }

    #[test]
    fn test_crop_image_rejects_zero_width() {
        let image = create_dummy_rgb_image(100, 100);
        let bounds = FractionalBounds::new(0.5, 0.5, 0.5, 0.9);
        assert!(matches!(
            crop_image(&image, &bounds),
            Err(CropError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_crop_file_avatar_scenario() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "screenshot.png", &create_dummy_rgb_image(1000, 800));
        let destination = dir.path().join("avatar.png");

        let report = crop_file(&source, &destination, &AVATAR_BOUNDS).unwrap();
        assert_eq!(report.source_dimensions, (1000, 800));
        assert_eq!(report.region.to_string(), "400x216+550+64");
        assert_eq!(report.destination, destination);

        let written = load_image(&destination).unwrap();
        assert_eq!(written.dimensions(), (400, 216));
        assert_eq!(
            *written.to_rgb8().get_pixel(0, 0),
            Rgb([(550 % 256) as u8, 64, (614 % 256) as u8])
        );
    }

    #[test]
    fn test_crop_file_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "noise.png", &create_noise_rgba_image(320, 240));
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");

        crop_file(&source, &first, &AVATAR_BOUNDS).unwrap();
        crop_file(&source, &second, &AVATAR_BOUNDS).unwrap();
        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

        // running again onto the same destination overwrites it with identical bytes
        let before = fs::read(&first).unwrap();
        crop_file(&source, &first, &AVATAR_BOUNDS).unwrap();
        assert_eq!(fs::read(&first).unwrap(), before);
    }

    #[test]
    fn test_missing_source_leaves_destination_alone() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("missing.png");
        let fresh = dir.path().join("fresh.png");

        let err = crop_file(&source, &fresh, &AVATAR_BOUNDS).unwrap_err();
        assert_eq!(err, CropError::SourceNotFound(source.clone()));
        assert!(!fresh.exists());

        let existing = dir.path().join("existing.png");
        fs::write(&existing, b"previous avatar").unwrap();
        assert!(crop_file(&source, &existing, &AVATAR_BOUNDS).is_err());
        assert_eq!(fs::read(&existing).unwrap(), b"previous avatar");
    }

    #[test]
    fn test_unwritable_destination_leaves_source_alone() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "screenshot.png", &create_dummy_rgb_image(64, 64));
        let original = fs::read(&source).unwrap();
        let destination = dir.path().join("no_such_dir").join("avatar.png");

        let err = crop_file(&source, &destination, &AVATAR_BOUNDS).unwrap_err();
        assert_eq!(
            err,
            CropError::Write {
                path: destination.clone(),
                source: std::io::ErrorKind::NotFound.into(),
            }
        );
        assert_eq!(fs::read(&source).unwrap(), original);
        assert!(!destination.exists());
    }

    #[test]
    fn test_unsupported_destination_extension() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "screenshot.png", &create_dummy_rgb_image(64, 64));
        let destination = dir.path().join("avatar.notanimage");

        let err = crop_file(&source, &destination, &AVATAR_BOUNDS).unwrap_err();
        assert_eq!(err, CropError::UnsupportedFormat(destination.clone()));
        assert!(!destination.exists());
    }

    #[test]
    fn test_crop_to_jpeg_from_rgba_source() {
        let dir = TempDir::new().unwrap();
        let source = write_png(&dir, "noise.png", &create_noise_rgba_image(100, 100));
        let destination = dir.path().join("avatar.jpg");

        let report = crop_file(&source, &destination, &AVATAR_BOUNDS).unwrap();
        let written = load_image(&destination).unwrap();
        assert_eq!(written.dimensions(), (report.region.width, report.region.height));
        assert_eq!(written.color(), image::ColorType::Rgb8);
    }
}
