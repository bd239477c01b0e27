//! The generic binarization contract shared by all thresholding strategies.
//!
//! Dispatch is static: callers name a concrete strategy type and the
//! per-pixel loops monomorphize, so iterating a raster carries no indirection
//! cost. A strategy implements [`Algorithm`]; single-cutoff strategies
//! implement the smaller [`GlobalThreshold`] surface and inherit the scan
//! loop.
use crate::image::{Image, ImageRef};
use crate::palette;
use crate::parameters::Parameters;
use crate::types::{Pixel32, Pixel8};
use log::debug;

/// A binarization strategy.
///
/// The lifecycle is `initialize` once per grayscale input, then `to_binary`
/// any number of times with different parameters — precomputation done in
/// `initialize` (histograms, statistics) amortizes across repeated runs.
/// The borrow passed to both calls must be the same raster; the compiler
/// keeps it alive and unmodified for as long as the caller holds the view.
pub trait Algorithm: Default {
    /// One-time precomputation over the grayscale input. The default body
    /// does nothing; strategies without shared state skip it.
    fn initialize(&mut self, gray: ImageRef<'_>) {
        let _ = gray;
    }

    /// Write [`palette::BLACK`] or [`palette::WHITE`] into every element of
    /// `output`, reading only from `gray`.
    ///
    /// `output` must be preallocated with `output.size == gray.size`; the
    /// hot path only guards this with a `debug_assert`.
    fn to_binary(&mut self, gray: ImageRef<'_>, output: &mut Image, params: &Parameters);

    /// Convenience entry point: allocate an output matching `gray`, run a
    /// fresh instance through `initialize` and `to_binary`, and return the
    /// result by value (a move, never a pixel copy).
    fn to_binary_image(gray: ImageRef<'_>, params: &Parameters) -> Image {
        debug!(
            "to_binary_image: {}x{} via {}",
            gray.width,
            gray.height,
            std::any::type_name::<Self>()
        );
        let mut output = Image::new(gray.width, gray.height);
        let mut algorithm = Self::default();
        algorithm.initialize(gray);
        algorithm.to_binary(gray, &mut output, params);
        output
    }

    /// Binarize `image` in place, leaving its buffer address, width and
    /// height unchanged. The result is computed into a temporary first:
    /// strategies read the raster they binarize, so updating the same
    /// buffer while scanning it is not an option.
    fn update_to_binary(image: &mut Image, params: &Parameters) {
        let output = Self::to_binary_image(image.as_ref(), params);
        image.data.copy_from_slice(&output.data);
    }
}

/// A strategy driven by one scalar cutoff applied uniformly to the raster.
///
/// Implementors supply [`threshold`](GlobalThreshold::threshold); the scan
/// loop is provided here, and a concrete strategy's
/// [`Algorithm::to_binary`] simply delegates to
/// [`threshold_to_binary`](GlobalThreshold::threshold_to_binary).
pub trait GlobalThreshold: Algorithm {
    /// The cutoff computed from the grayscale statistics and `params`.
    fn threshold(&self, gray: ImageRef<'_>, params: &Parameters) -> Pixel8;

    /// One linear scan: a value strictly above the cutoff writes white,
    /// everything else black. A value equal to the cutoff classifies as
    /// black — callers depend on this tie-break.
    fn threshold_to_binary(&self, gray: ImageRef<'_>, output: &mut Image, params: &Parameters) {
        debug_assert_eq!(
            output.size, gray.size,
            "output raster must match the grayscale input"
        );
        let cutoff = self.threshold(gray, params) as Pixel32;
        debug!(
            "global threshold: cutoff={cutoff} over {}x{}",
            gray.width, gray.height
        );
        for (dst, &px) in output.data.iter_mut().zip(gray.data.iter()) {
            *dst = if px > cutoff {
                palette::WHITE
            } else {
                palette::BLACK
            };
        }
    }
}
