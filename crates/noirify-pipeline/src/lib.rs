//! noirify-pipeline: Pure luma conversion (sans-IO).
//!
//! Converts color images to 8-bit grayscale with the fixed Rec. 601
//! weighted sum `0.299*R + 0.587*G + 0.114*B`, rounded half-to-even.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! buffers and byte slices. All filesystem interaction lives in
//! `noirify-io`.

pub mod grayscale;
pub mod luma;
pub mod types;

pub use grayscale::{decode_and_grayscale, encode_gray, grayscale};
pub use luma::{LumaWeights, luma_from_rgb, round_to_u8};
pub use types::{Dimensions, GrayImage, ImageFormat, NoirifyError, RgbImage};

/// Decode `image_bytes`, convert to grayscale, and re-encode as `format`.
///
/// Returns the encoded bytes along with the image dimensions.
///
/// # Errors
///
/// Returns [`NoirifyError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`NoirifyError::ImageDecode`] if the image format is unrecognized.
/// Returns [`NoirifyError::ImageEncode`] if `format` cannot hold grayscale.
pub fn process(
    image_bytes: &[u8],
    format: ImageFormat,
) -> Result<(Vec<u8>, Dimensions), NoirifyError> {
    let gray = decode_and_grayscale(image_bytes)?;
    let dimensions = Dimensions::of(&gray);
    let encoded = encode_gray(&gray, format)?;
    Ok((encoded, dimensions))
}
