/// Packed pixel value. By convention it carries four 8-bit channels, but the
/// layout tags on an [`Image`](crate::image::Image) are descriptive only and
/// never enforced against the stored value. Grayscale rasters store the
/// intensity 0..=255 directly.
pub type Pixel32 = u32;

/// Single 8-bit channel value, e.g. a global threshold cutoff.
pub type Pixel8 = u8;

pub use crate::image::{Image, ImageRef, Raster};
pub use crate::parameters::{ParamValue, Parameters};
