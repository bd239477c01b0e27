//! Caller-supplied global cutoff.
use crate::algorithm::{Algorithm, GlobalThreshold};
use crate::image::{Image, ImageRef};
use crate::parameters::Parameters;
use crate::types::Pixel8;

/// Global thresholding with the cutoff read from the `"threshold"` parameter
/// (default 127). No statistics, no precomputation.
#[derive(Clone, Debug, Default)]
pub struct FixedThreshold;

impl Algorithm for FixedThreshold {
    fn to_binary(&mut self, gray: ImageRef<'_>, output: &mut Image, params: &Parameters) {
        self.threshold_to_binary(gray, output, params);
    }
}

impl GlobalThreshold for FixedThreshold {
    fn threshold(&self, _gray: ImageRef<'_>, params: &Parameters) -> Pixel8 {
        params.int("threshold", 127).clamp(0, 255) as Pixel8
    }
}
