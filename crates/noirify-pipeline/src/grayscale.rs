//! Image decoding, normalization, and in-memory encoding.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP, GIF, TIFF), normalizes
//! whatever color model they decode to into 8-bit RGB, and runs the
//! luma conversion. The converted image can be encoded back to bytes in
//! any format the `image` crate can write single-channel data to.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat};

use crate::luma::luma_from_rgb;
use crate::types::NoirifyError;

/// Normalize a decoded image to RGB and convert it to luma.
///
/// Alpha is discarded, not composited. Grayscale and palette images are
/// expanded to RGB first, and 16-bit or float channels are scaled down
/// to 8 bits.
///
/// `DynamicImage::to_luma8` is deliberately not used: it applies
/// BT.709 coefficients, not BT.601.
#[must_use = "returns the converted grayscale image"]
pub fn grayscale(image: &DynamicImage) -> GrayImage {
    luma_from_rgb(&image.to_rgb8())
}

/// Decode raw image bytes and convert to grayscale.
///
/// The format is sniffed from the content, never from a file name.
///
/// # Errors
///
/// Returns [`NoirifyError::EmptyInput`] if `bytes` is empty.
/// Returns [`NoirifyError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
#[must_use = "returns the decoded grayscale image"]
pub fn decode_and_grayscale(bytes: &[u8]) -> Result<GrayImage, NoirifyError> {
    if bytes.is_empty() {
        return Err(NoirifyError::EmptyInput);
    }

    let img = image::load_from_memory(bytes).map_err(NoirifyError::ImageDecode)?;
    Ok(grayscale(&img))
}

/// Encode a grayscale image as single-channel `format` bytes.
///
/// # Errors
///
/// Returns [`NoirifyError::ImageEncode`] if the format has no encoder
/// or cannot store 8-bit grayscale.
pub fn encode_gray(image: &GrayImage, format: ImageFormat) -> Result<Vec<u8>, NoirifyError> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .map_err(NoirifyError::ImageEncode)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use image::{ColorType, ImageBuffer, Luma, Rgba};

    use super::*;

    /// Helper: encode an RGBA image as a PNG byte buffer.
    fn encode_rgba_png(img: &image::RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    /// Helper: encode a single 1x1 RGBA pixel as a PNG byte buffer.
    fn encode_rgba_pixel(r: u8, g: u8, b: u8, a: u8) -> Vec<u8> {
        encode_rgba_png(&image::RgbaImage::from_pixel(1, 1, Rgba([r, g, b, a])))
    }

    #[test]
    fn empty_input_returns_error() {
        let result = decode_and_grayscale(&[]);
        assert!(matches!(result, Err(NoirifyError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_returns_image_decode_error() {
        let result = decode_and_grayscale(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(NoirifyError::ImageDecode(_))));
    }

    #[test]
    fn valid_png_decodes_to_grayscale() {
        let img = image::RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        let gray = decode_and_grayscale(&encode_rgba_png(&img)).unwrap();
        for pixel in gray.pixels() {
            assert_eq!(pixel.0[0], 255);
        }
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = image::RgbaImage::from_pixel(17, 31, Rgba([128, 64, 32, 255]));
        let gray = decode_and_grayscale(&encode_rgba_png(&img)).unwrap();
        assert_eq!(gray.width(), 17);
        assert_eq!(gray.height(), 31);
    }

    #[test]
    fn primaries_decode_to_rec601_luma() {
        let r_val = decode_and_grayscale(&encode_rgba_pixel(255, 0, 0, 255)).unwrap();
        let g_val = decode_and_grayscale(&encode_rgba_pixel(0, 255, 0, 255)).unwrap();
        let b_val = decode_and_grayscale(&encode_rgba_pixel(0, 0, 255, 255)).unwrap();

        assert_eq!(r_val.get_pixel(0, 0).0[0], 76);
        assert_eq!(g_val.get_pixel(0, 0).0[0], 150);
        assert_eq!(b_val.get_pixel(0, 0).0[0], 29);
    }

    #[test]
    fn alpha_is_discarded_not_composited() {
        let transparent_red = decode_and_grayscale(&encode_rgba_pixel(255, 0, 0, 0)).unwrap();
        assert_eq!(transparent_red.get_pixel(0, 0).0[0], 76);
    }

    #[test]
    fn sixteen_bit_gray_is_normalized_before_conversion() {
        let img: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_fn(2, 1, |x, _| Luma([if x == 0 { 0 } else { u16::MAX }]));
        let gray = grayscale(&DynamicImage::ImageLuma16(img));
        assert_eq!(gray.as_raw(), &vec![0, 255]);
    }

    #[test]
    fn gray_input_passes_through_unchanged() {
        let img = GrayImage::from_fn(16, 16, |x, y| Luma([u8::try_from(x * 16 + y).unwrap()]));
        let gray = grayscale(&DynamicImage::ImageLuma8(img.clone()));
        assert_eq!(gray, img);
    }

    #[test]
    fn encode_png_round_trips_as_single_channel() {
        let gray = GrayImage::from_vec(2, 1, vec![76, 150]).unwrap();
        let bytes = encode_gray(&gray, ImageFormat::Png).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), ColorType::L8);
        assert_eq!(decoded.into_luma8(), gray);
    }

    #[test]
    fn encode_without_encoder_returns_image_encode_error() {
        let gray = GrayImage::new(1, 1);
        let result = encode_gray(&gray, ImageFormat::Farbfeld);
        assert!(matches!(result, Err(NoirifyError::ImageEncode(_))));
    }
}
