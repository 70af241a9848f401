//! Scan-artifact noise injection.
//!
//! A finished image is combined with a Gaussian noise field centered at the
//! background intensity. The combine is a bitwise AND of the f32 bit
//! patterns of the source and the normalized noise field, not additive
//! blending: high-stddev draws can zero out or binary-mask pixels, which is
//! the intended scan-artifact look. The masking never brightens a pixel.

use crate::core::constants::{BACKGROUND, DEFAULT_NOISE_STDDEV_RANGE};
use crate::core::{GenResult, NumGenError, ProcessingStage};
use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Adds bounded-random-intensity noise to finished images.
///
/// The injector carries the `[min, max)` range the per-image noise
/// standard deviation is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct NoiseInjector {
    stddev_min: u32,
    stddev_max: u32,
}

impl Default for NoiseInjector {
    fn default() -> Self {
        let (stddev_min, stddev_max) = DEFAULT_NOISE_STDDEV_RANGE;
        Self {
            stddev_min,
            stddev_max,
        }
    }
}

impl NoiseInjector {
    /// Creates an injector with a custom standard-deviation range.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a degenerate range (`min >= max`).
    pub fn new(stddev_min: u32, stddev_max: u32) -> GenResult<Self> {
        if stddev_min >= stddev_max {
            return Err(NumGenError::validation_error(
                "noise injector",
                "stddev range",
                "min < max",
                &format!("({}, {})", stddev_min, stddev_max),
            ));
        }
        Ok(Self {
            stddev_min,
            stddev_max,
        })
    }

    /// Masks an image against a fresh Gaussian noise field.
    ///
    /// An integer standard deviation is drawn uniformly from the
    /// configured range; the noise field has the input's shape with
    /// per-pixel values from `N(255, stddev)`, scaled by 255 before the
    /// combine. The output shares the input's shape and value domain.
    pub fn add_noise(&self, image: &Array2<f32>, rng: &mut impl Rng) -> GenResult<Array2<f32>> {
        let stddev = rng.gen_range(self.stddev_min..self.stddev_max);
        let field = Normal::new(BACKGROUND, stddev as f32).map_err(|e| {
            NumGenError::processing_error(
                ProcessingStage::Noise,
                format!("noise distribution with stddev {}", stddev),
                e,
            )
        })?;

        Ok(image.mapv(|value| {
            let noise = field.sample(rng) / BACKGROUND;
            f32::from_bits(value.to_bits() & noise.to_bits())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn preserves_shape() {
        let injector = NoiseInjector::default();
        let mut rng = SmallRng::seed_from_u64(9);
        let image = Array2::from_elem((28, 64), 0.87f32);

        let noisy = injector.add_noise(&image, &mut rng).unwrap();
        assert_eq!(noisy.dim(), image.dim());
    }

    // Pins the masking combine: an AND of positive bit patterns can only
    // clear bits, so no pixel ever brightens past its source value.
    #[test]
    fn masking_never_brightens() {
        let injector = NoiseInjector::default();
        let mut rng = SmallRng::seed_from_u64(9);
        let image = Array2::from_shape_fn((28, 64), |(y, x)| ((y + x) % 100) as f32 / 100.0);

        let noisy = injector.add_noise(&image, &mut rng).unwrap();
        for (&out, &src) in noisy.iter().zip(image.iter()) {
            assert!(out >= 0.0);
            assert!(out <= src);
        }
    }

    #[test]
    fn rejects_degenerate_stddev_range() {
        assert!(NoiseInjector::new(10, 10).is_err());
        assert!(NoiseInjector::new(200, 100).is_err());
    }

    #[test]
    fn zero_stddev_masks_against_plain_background() {
        let injector = NoiseInjector::new(0, 1).unwrap();
        let mut rng = SmallRng::seed_from_u64(9);
        let image = Array2::from_elem((4, 4), 1.0f32);

        // stddev 0 yields a constant field of exactly 1.0 after scaling, so
        // a white image survives the mask unchanged.
        let noisy = injector.add_noise(&image, &mut rng).unwrap();
        assert!(noisy.iter().all(|&v| v == 1.0));
    }
}
