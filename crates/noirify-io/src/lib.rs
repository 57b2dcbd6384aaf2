//! noirify-io: Filesystem I/O for noirify.
//!
//! Loads source images from disk (normalized to RGB), writes converted
//! grayscale images back, and strings the two together around the pure
//! conversion in `noirify-pipeline`.

pub mod load;
pub mod save;

use std::path::Path;
use std::time::Instant;

use noirify_pipeline::{Dimensions, NoirifyError, luma_from_rgb};

pub use load::load_rgb;
pub use save::save_gray;

/// Convert the image at `src` to grayscale and write it to `dst`.
///
/// Runs load, convert and save in order and stops at the first error.
/// Returns the dimensions of the written image.
///
/// # Errors
///
/// Returns [`NoirifyError::NotFound`] if `src` does not exist.
/// Returns [`NoirifyError::ImageDecode`] if `src` is not an image.
/// Returns [`NoirifyError::ImageEncode`] if `dst` has no usable extension.
/// Returns [`NoirifyError::Io`] for any other filesystem failure.
pub fn convert_file(src: &Path, dst: &Path) -> Result<Dimensions, NoirifyError> {
    let rgb = load_rgb(src)?;

    let start = Instant::now();
    let gray = luma_from_rgb(&rgb);
    log::debug!(
        "converted {}x{} to luma in {:.3}ms",
        gray.width(),
        gray.height(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    save_gray(&gray, dst)?;
    Ok(Dimensions::of(&gray))
}
