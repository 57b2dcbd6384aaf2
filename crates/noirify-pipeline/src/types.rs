//! Shared types for noirify.

use std::path::PathBuf;

/// Re-export `GrayImage` so downstream crates can reference the
/// converted raster without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbImage`, the normalized input of the luma conversion.
pub use image::RgbImage;

/// Re-export `ImageFormat` for choosing an in-memory output encoding.
pub use image::ImageFormat;

/// Pixel dimensions of a converted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Dimensions of a grayscale image.
    #[must_use]
    pub fn of(image: &GrayImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Errors that can occur while converting an image.
///
/// Every stage of a conversion aborts on its first error; the variant
/// says which stage failed so callers can react (e.g. retry a
/// [`NotFound`](Self::NotFound) with a corrected path).
#[derive(Debug, thiserror::Error)]
pub enum NoirifyError {
    /// Wrong number of command-line arguments.
    #[error("Usage: noirify <input_path> <output_path>")]
    Usage,

    /// The input path does not exist.
    #[error("Input image not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input exists but could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// The output could not be encoded, e.g. an unsupported extension.
    #[error("failed to encode image: {0}")]
    ImageEncode(#[source] image::ImageError),

    /// A filesystem operation failed.
    #[error("{action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted, e.g. "failed to read".
        action: &'static str,
        /// The path the operation was applied to.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,
}
