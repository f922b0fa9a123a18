//! Crop a fixed, fractionally placed region out of an image and save it.
//!
//! ```no_run
//! use avatar_crop::CropJob;
//!
//! let report = CropJob::new("screenshot.png", "public/avatar.png").run()?;
//! println!("cropped {} from {:?}", report.region, report.source_dimensions);
//! # Ok::<(), avatar_crop::CropError>(())
//! ```

pub mod config;
pub mod crop;
pub mod cropper;
pub mod error;
pub mod image_handler;

pub use config::CropJob;
pub use crop::{AVATAR_BOUNDS, FractionalBounds, PixelRegion};
pub use cropper::{CropReport, crop_file, crop_image};
pub use error::{CropError, Result};
