//! Bernsen's adaptive local-contrast method.
use crate::algorithm::Algorithm;
use crate::image::{Image, ImageRef, Raster};
use crate::palette::{BLACK, WHITE};
use crate::parameters::Parameters;
use crate::types::Pixel32;

/// Adaptive thresholding over a square window centered on each pixel.
///
/// The local cutoff is the mid-range `(min + max) / 2` of the window. Low
/// contrast windows (`max - min` below the contrast limit) carry no local
/// evidence and fall back to the fixed mid-level 127.
///
/// Parameters: `"window"` — window edge length (default 75),
/// `"contrast-limit"` — minimum usable contrast (default 25).
#[derive(Clone, Debug, Default)]
pub struct Bernsen;

impl Algorithm for Bernsen {
    fn to_binary(&mut self, gray: ImageRef<'_>, output: &mut Image, params: &Parameters) {
        debug_assert_eq!(
            output.size, gray.size,
            "output raster must match the grayscale input"
        );
        let window = params.int("window", 75).max(1);
        let radius = (window / 2) as isize;
        let contrast_limit = params.int("contrast-limit", 25).clamp(0, 255) as Pixel32;

        for y in 0..gray.height {
            for x in 0..gray.width {
                let mut lo = 255u32;
                let mut hi = 0u32;
                for dy in -radius..=radius {
                    for dx in -radius..=radius {
                        let px = x as isize + dx;
                        let py = y as isize + dy;
                        // Out-of-raster probes must not shift the window
                        // statistics: neutral defaults per extremum.
                        lo = lo.min(gray.get_or(px, py, WHITE));
                        hi = hi.max(gray.get_or(px, py, BLACK));
                    }
                }

                let cutoff = if hi - lo >= contrast_limit {
                    (hi + lo) / 2
                } else {
                    127
                };
                let value = if gray.get(x, y) > cutoff { WHITE } else { BLACK };
                output.set(x, y, value);
            }
        }
    }
}
