//! Reading source images from disk.

use std::path::Path;

use noirify_pipeline::{NoirifyError, RgbImage};

/// Read and decode the image at `path`, normalized to 8-bit RGB.
///
/// The format is sniffed from the file content; the extension is
/// ignored.
///
/// # Errors
///
/// Returns [`NoirifyError::NotFound`] if `path` does not exist.
/// Returns [`NoirifyError::Io`] if the file exists but cannot be read.
/// Returns [`NoirifyError::ImageDecode`] if the content is not a
/// decodable image (including an empty file).
pub fn load_rgb(path: &Path) -> Result<RgbImage, NoirifyError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            NoirifyError::NotFound(path.to_path_buf())
        } else {
            NoirifyError::Io {
                action: "failed to read",
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    log::debug!("read {} ({} bytes)", path.display(), bytes.len());

    let img = image::load_from_memory(&bytes).map_err(NoirifyError::ImageDecode)?;
    log::debug!(
        "decoded {}x{} {:?}",
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgb8())
}
