//! The validated pixel-gap range between adjacent glyphs.

use crate::core::{GenResult, NumGenError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A `(min, max)` pixel range for uniform-random white-space draws.
///
/// Gaps are drawn from the half-open interval `[min, max)`, so the range
/// must satisfy `min < max`; a degenerate or empty range is rejected at
/// construction. The same range drives inter-digit gaps, part separators,
/// and edge padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingRange {
    min: u32,
    max: u32,
}

impl SpacingRange {
    /// Creates a spacing range after validating `min < max`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a degenerate range (`min >= max`).
    pub fn new(min: u32, max: u32) -> GenResult<Self> {
        if min >= max {
            return Err(NumGenError::validation_error(
                "spacing range",
                "bounds",
                "min < max",
                &format!("({}, {})", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    /// The inclusive lower bound of the range.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// The exclusive upper bound of the range.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Draws a uniform-random gap width from `[min, max)`.
    pub fn draw(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.min..self.max)
    }
}
