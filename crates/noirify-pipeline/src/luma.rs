//! Rec. 601 luma conversion from 8-bit RGB to 8-bit grayscale.
//!
//! Each output pixel is `round(0.299*R + 0.587*G + 0.114*B)`, computed in
//! 32-bit floating point and rounded half-to-even. The weights sum to
//! one, so the result always lies in `[0, 255]` without clamping.

use image::{GrayImage, Luma, RgbImage};

/// Per-channel coefficients of a luma weighted sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaWeights {
    /// Weight applied to the red channel.
    pub red: f32,
    /// Weight applied to the green channel.
    pub green: f32,
    /// Weight applied to the blue channel.
    pub blue: f32,
}

impl LumaWeights {
    /// ITU-R BT.601 coefficients.
    pub const REC601: Self = Self {
        red: 0.299,
        green: 0.587,
        blue: 0.114,
    };

    /// Weighted sum of one pixel, before rounding.
    ///
    /// Accumulates as `(R*wr + G*wg) + B*wb` in `f32`.
    // A fused multiply-add rounds differently on boundary values.
    #[allow(clippy::suboptimal_flops)]
    #[must_use]
    pub fn weighted_sum(self, r: u8, g: u8, b: u8) -> f32 {
        f32::from(r) * self.red + f32::from(g) * self.green + f32::from(b) * self.blue
    }

    /// Luma of one pixel as an 8-bit value.
    #[must_use]
    pub fn luma(self, r: u8, g: u8, b: u8) -> u8 {
        round_to_u8(self.weighted_sum(r, g, b))
    }
}

/// Round to the nearest integer with ties going to the even neighbour,
/// then saturate into `u8`.
///
/// This is the rounding rule of the reference outputs: `2.5 -> 2`,
/// `3.5 -> 4`. Truncation or half-away-from-zero would shift values and
/// break bit-exact comparison.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn round_to_u8(value: f32) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Convert an RGB image to single-channel luma using [`LumaWeights::REC601`].
///
/// The output has the same width and height as `rgb`. Pixels are
/// independent of each other.
#[must_use = "returns the converted grayscale image"]
pub fn luma_from_rgb(rgb: &RgbImage) -> GrayImage {
    let weights = LumaWeights::REC601;
    let mut gray = GrayImage::new(rgb.width(), rgb.height());
    for (dst, src) in gray.pixels_mut().zip(rgb.pixels()) {
        let [r, g, b] = src.0;
        *dst = Luma([weights.luma(r, g, b)]);
    }
    gray
}
