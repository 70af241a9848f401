//! Digit-sequence compositing.
//!
//! This module assembles an ordered list of digits into one horizontally
//! concatenated image strip: a random glyph per digit, a uniform-random
//! white gap between adjacent glyphs, a bilinear resize to the target
//! width, and a final normalization into `[0,1]`.

use crate::core::constants::{BACKGROUND, GLYPH_SIZE};
use crate::core::{GenResult, NumGenError};
use crate::glyphs::GlyphStore;
use crate::processors::resize::resize_strip;
use crate::processors::spacing::SpacingRange;
use ndarray::{concatenate, Array2, Axis};
use rand::Rng;
use tracing::debug;

/// Composites digit sequences into normalized image strips.
///
/// A compositor borrows the glyph store; it carries no other state, so one
/// instance can render any number of sequences.
#[derive(Debug)]
pub struct SequenceCompositor<'a> {
    store: &'a GlyphStore,
}

impl<'a> SequenceCompositor<'a> {
    /// Creates a compositor over a loaded glyph store.
    pub fn new(store: &'a GlyphStore) -> Self {
        Self { store }
    }

    /// Renders a digit sequence into a `(28, width)` normalized image.
    ///
    /// For each digit a random glyph of that class is fetched (trimmed and
    /// inverted) and followed by a white-space block whose width is drawn
    /// uniformly from the spacing range; the trailing block is dropped so
    /// the strip ends on a glyph. The concatenated strip is resized
    /// horizontally to `width` with bilinear filtering and normalized by
    /// dividing by 255 and rounding to 2 decimal places, giving values in
    /// `[0,1]` with 0 as ink and 1 as background.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty sequence, a digit outside
    /// `[0,9]`, or a non-positive width, and propagates glyph-fetch
    /// failures (degenerate collection entries).
    pub fn render(
        &self,
        digits: &[u8],
        spacing: SpacingRange,
        width: u32,
        rng: &mut impl Rng,
    ) -> GenResult<Array2<f32>> {
        if digits.is_empty() {
            return Err(NumGenError::validation_error(
                "sequence compositor",
                "digits",
                "a non-empty digit sequence",
                "[]",
            ));
        }
        if width == 0 {
            return Err(NumGenError::validation_error(
                "sequence compositor",
                "width",
                "a positive pixel width",
                "0",
            ));
        }

        let mut blocks: Vec<Array2<f32>> = Vec::with_capacity(digits.len() * 2);
        for &digit in digits {
            blocks.push(self.store.fetch(digit, rng)?);
            let gap = spacing.draw(rng);
            blocks.push(Array2::from_elem(
                (GLYPH_SIZE as usize, gap as usize),
                BACKGROUND,
            ));
        }
        // The last glyph carries no trailing gap.
        blocks.pop();

        let views: Vec<_> = blocks.iter().map(|block| block.view()).collect();
        let strip = concatenate(Axis(1), &views)?;
        debug!(
            digits = digits.len(),
            strip_width = strip.ncols(),
            target_width = width,
            "sequence composited"
        );

        let resized = resize_strip(&strip, width)?;
        Ok(resized.mapv(normalize))
    }
}

/// Scales a `[0,255]` intensity into `[0,1]`, rounded to 2 decimals.
fn normalize(value: f32) -> f32 {
    (value / BACKGROUND * 100.0).round() / 100.0
}
