//! Writing grayscale images to disk.

use std::path::Path;

use image::{ImageError, ImageFormat};
use noirify_pipeline::{GrayImage, NoirifyError};

/// Encode `image` as single-channel grayscale and write it to `path`.
///
/// The output format is chosen from the extension of `path`. Missing
/// parent directories are created first. The file is written in place,
/// so a failure part-way through may leave a partial file behind.
///
/// # Errors
///
/// Returns [`NoirifyError::ImageEncode`] if the extension names no
/// supported format (checked before anything touches the disk) or the
/// encoder rejects the image.
/// Returns [`NoirifyError::Io`] if a directory cannot be created or the
/// file cannot be written.
pub fn save_gray(image: &GrayImage, path: &Path) -> Result<(), NoirifyError> {
    let format = ImageFormat::from_path(path).map_err(NoirifyError::ImageEncode)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| NoirifyError::Io {
            action: "failed to create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    image
        .save_with_format(path, format)
        .map_err(|err| match err {
            ImageError::IoError(source) => NoirifyError::Io {
                action: "failed to write",
                path: path.to_path_buf(),
                source,
            },
            other => NoirifyError::ImageEncode(other),
        })?;
    log::debug!("wrote {} as {format:?}", path.display());
    Ok(())
}
