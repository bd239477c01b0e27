//! Otsu's global histogram method.
use crate::algorithm::{Algorithm, GlobalThreshold};
use crate::image::{Image, ImageRef};
use crate::palette::gray8;
use crate::parameters::Parameters;
use crate::types::Pixel8;
use log::debug;

/// Global thresholding by maximizing the between-class variance of the
/// intensity histogram. The histogram is built once in `initialize`, so
/// repeated `to_binary` runs over the same input reuse it.
#[derive(Clone, Debug)]
pub struct Otsu {
    histogram: [u32; 256],
    total: u64,
}

impl Default for Otsu {
    fn default() -> Self {
        Self {
            histogram: [0; 256],
            total: 0,
        }
    }
}

impl Algorithm for Otsu {
    fn initialize(&mut self, gray: ImageRef<'_>) {
        self.histogram = [0; 256];
        for &px in gray.data {
            self.histogram[gray8(px) as usize] += 1;
        }
        self.total = gray.size as u64;
    }

    fn to_binary(&mut self, gray: ImageRef<'_>, output: &mut Image, params: &Parameters) {
        self.threshold_to_binary(gray, output, params);
    }
}

impl GlobalThreshold for Otsu {
    fn threshold(&self, _gray: ImageRef<'_>, _params: &Parameters) -> Pixel8 {
        if self.total == 0 {
            return 127;
        }

        let total = self.total as f64;
        let mut sum_total = 0f64;
        for (value, &count) in self.histogram.iter().enumerate() {
            sum_total += value as f64 * count as f64;
        }

        let mut sum_background = 0f64;
        let mut weight_background = 0f64;
        let mut best_variance = -1f64;
        let mut best_cutoff = 127u8;

        for (value, &count) in self.histogram.iter().enumerate() {
            weight_background += count as f64;
            if weight_background < 1.0 {
                continue;
            }
            let weight_foreground = total - weight_background;
            if weight_foreground < 1.0 {
                break;
            }

            sum_background += value as f64 * count as f64;
            let mean_background = sum_background / weight_background;
            let mean_foreground = (sum_total - sum_background) / weight_foreground;

            let delta = mean_background - mean_foreground;
            let variance = weight_background * weight_foreground * delta * delta;
            if variance > best_variance {
                best_variance = variance;
                best_cutoff = value as u8;
            }
        }

        debug!("otsu: cutoff={best_cutoff} variance={best_variance:.1}");
        best_cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, WHITE};

    #[test]
    fn separates_a_bimodal_raster() {
        // Two well-separated modes: low around 30, high around 220.
        let pixels: Vec<u32> = (0..64)
            .map(|i| if i % 2 == 0 { 30 } else { 220 })
            .collect();
        let gray = Image::from_pixels(8, 8, &pixels);

        let binary = Otsu::to_binary_image(gray.as_ref(), &Parameters::new());
        for (i, &px) in binary.data.iter().enumerate() {
            let expected = if i % 2 == 0 { BLACK } else { WHITE };
            assert_eq!(px, expected, "pixel {i}");
        }
    }

    #[test]
    fn cutoff_lies_between_the_modes() {
        let pixels: Vec<u32> = (0..100).map(|i| if i < 50 { 40 } else { 200 }).collect();
        let gray = Image::from_pixels(10, 10, &pixels);

        let mut otsu = Otsu::default();
        otsu.initialize(gray.as_ref());
        let cutoff = otsu.threshold(gray.as_ref(), &Parameters::new());
        assert!((40..200).contains(&(cutoff as u32)), "cutoff={cutoff}");
    }

    #[test]
    fn uniform_raster_still_yields_palette_values() {
        let gray = Image::from_pixels(4, 1, &[90, 90, 90, 90]);
        let binary = Otsu::to_binary_image(gray.as_ref(), &Parameters::new());
        assert!(binary.data.iter().all(|&px| px == BLACK || px == WHITE));
    }

    #[test]
    fn empty_histogram_falls_back_deterministically() {
        let otsu = Otsu::default();
        let gray = Image::new(0, 0);
        assert_eq!(otsu.threshold(gray.as_ref(), &Parameters::new()), 127);
    }
}
