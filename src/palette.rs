//! Canonical output values for binary rasters and small channel helpers.
//!
//! Every binarization writes only [`BLACK`] or [`WHITE`] into its output.
//! The constants are full `Pixel32` values so a binary raster lives in the
//! same container as its grayscale input.
use crate::types::{Pixel32, Pixel8};

/// Foreground (ink) value of a binary raster.
pub const BLACK: Pixel32 = 0x00;
/// Background (paper) value of a binary raster.
pub const WHITE: Pixel32 = 0xFF;

/// Pack three 8-bit channels into a `Pixel32` (alpha left at zero).
#[inline]
pub fn rgb(r: Pixel8, g: Pixel8, b: Pixel8) -> Pixel32 {
    ((r as Pixel32) << 16) | ((g as Pixel32) << 8) | b as Pixel32
}

/// Low 8 bits of a packed value — the intensity of a grayscale pixel.
#[inline]
pub fn gray8(px: Pixel32) -> Pixel8 {
    (px & 0xFF) as Pixel8
}

/// Channel-layout tag carried by an image as metadata. Descriptive only;
/// nothing checks it against the packed values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TupleType {
    #[default]
    Rgba,
    Rgb,
    Grayscale,
    BlackAndWhite,
}

impl TupleType {
    /// PAM-style tuple name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TupleType::Rgba => "RGB_ALPHA",
            TupleType::Rgb => "RGB",
            TupleType::Grayscale => "GRAYSCALE",
            TupleType::BlackAndWhite => "BLACKANDWHITE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white_are_distinct_gray_levels() {
        assert_ne!(BLACK, WHITE);
        assert_eq!(gray8(BLACK), 0x00);
        assert_eq!(gray8(WHITE), 0xFF);
    }

    #[test]
    fn rgb_packs_channels() {
        let px = rgb(0x12, 0x34, 0x56);
        assert_eq!(px, 0x0012_3456);
        assert_eq!(gray8(px), 0x56);
    }
}
