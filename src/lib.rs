#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod algorithm;
pub mod algorithms;
pub mod image;
pub mod palette;
pub mod parameters;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Core contracts: containers + the algorithm surface.
pub use crate::algorithm::{Algorithm, GlobalThreshold};
pub use crate::image::{Image, ImageRef, Raster};
pub use crate::parameters::{ParamValue, Parameters};

// Concrete strategies.
pub use crate::algorithms::{Bernsen, FixedThreshold, Otsu};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use binarize::prelude::*;
///
/// let gray = Image::from_pixels(2, 1, &[100, 200]);
/// let params = Parameters::new().with("threshold", 100);
/// let binary = FixedThreshold::to_binary_image(gray.as_ref(), &params);
/// assert_eq!(binary.data, [binarize::palette::BLACK, binarize::palette::WHITE]);
/// ```
pub mod prelude {
    pub use crate::algorithm::{Algorithm, GlobalThreshold};
    pub use crate::algorithms::{Bernsen, FixedThreshold, Otsu};
    pub use crate::image::{Image, ImageRef, Raster};
    pub use crate::parameters::Parameters;
}
