//! The in-memory glyph collection and per-class retrieval.

use crate::core::constants::{BACKGROUND, DIGIT_CLASSES, GLYPH_SIZE, IMAGES_FILE, LABELS_FILE};
use crate::core::{GenResult, NumGenError};
use crate::glyphs::idx;
use image::GrayImage;
use ndarray::Array2;
use rand::Rng;
use std::path::Path;
use tracing::debug;

/// The labeled glyph collection backing all image generation.
///
/// A store owns every glyph image of the source collection together with a
/// per-class index mapping each digit 0-9 to the collection positions
/// holding that class. It is loaded once at startup, never mutated
/// afterwards, and passed by reference into the compositing layer, so
/// generation code shares one collection without hidden global state.
#[derive(Debug)]
pub struct GlyphStore {
    images: Vec<GrayImage>,
    class_index: Vec<Vec<usize>>,
}

impl GlyphStore {
    /// Loads the glyph collection from an extracted MNIST archive directory.
    ///
    /// The directory must hold `train-images-idx3-ubyte` and
    /// `train-labels-idx1-ubyte` (the extracted MNIST archive).
    ///
    /// # Errors
    ///
    /// Returns a data-load error if either file is missing or malformed,
    /// if image and label counts differ, or if any digit class 0-9 has no
    /// glyphs.
    pub fn load(dir: &Path) -> GenResult<Self> {
        let images = idx::read_images(&dir.join(IMAGES_FILE))?;
        let labels = idx::read_labels(&dir.join(LABELS_FILE))?;
        let store = Self::from_parts(images, labels)?;
        debug!(
            glyphs = store.len(),
            source = %dir.display(),
            "glyph collection loaded"
        );
        Ok(store)
    }

    /// Builds a store from an already-loaded collection.
    ///
    /// # Errors
    ///
    /// Returns a data-load error on an empty collection, an image/label
    /// count mismatch, a label outside `[0,9]`, or a digit class with no
    /// glyphs.
    pub fn from_parts(images: Vec<GrayImage>, labels: Vec<u8>) -> GenResult<Self> {
        if images.len() != labels.len() {
            return Err(NumGenError::data_load_message(format!(
                "glyph collection mismatch: {} images but {} labels",
                images.len(),
                labels.len()
            )));
        }
        if images.is_empty() {
            return Err(NumGenError::data_load_message("glyph collection is empty"));
        }

        let mut class_index = vec![Vec::new(); DIGIT_CLASSES];
        for (position, &label) in labels.iter().enumerate() {
            let slot = class_index.get_mut(label as usize).ok_or_else(|| {
                NumGenError::data_load_message(format!(
                    "glyph at position {} carries label {} outside the digit classes 0-9",
                    position, label
                ))
            })?;
            slot.push(position);
        }

        for (digit, positions) in class_index.iter().enumerate() {
            if positions.is_empty() {
                return Err(NumGenError::data_load_message(format!(
                    "glyph collection holds no glyphs for digit class {}",
                    digit
                )));
            }
        }

        Ok(Self {
            images,
            class_index,
        })
    }

    /// Returns the number of glyphs in the collection.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the collection holds no glyphs.
    ///
    /// Always false for a successfully constructed store.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the number of glyphs indexed for a digit class.
    pub fn class_len(&self, digit: u8) -> usize {
        self.class_index
            .get(usize::from(digit))
            .map_or(0, Vec::len)
    }

    /// Fetches a uniform-random glyph of a digit class, with horizontal
    /// padding trimmed and pixel polarity inverted.
    ///
    /// The returned array has height 28 and the width of the glyph's
    /// foreground column range; ink is low (towards 0.0) and background is
    /// high (255.0).
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a digit outside `[0,9]`, and a
    /// data-load error for a blank glyph with no foreground columns, a
    /// degenerate collection entry that must propagate rather than be
    /// skipped.
    pub fn fetch(&self, digit: u8, rng: &mut impl Rng) -> GenResult<Array2<f32>> {
        let positions = self
            .class_index
            .get(usize::from(digit))
            .filter(|positions| !positions.is_empty())
            .ok_or_else(|| {
                NumGenError::validation_error(
                    "glyph store",
                    "digit",
                    "a digit class between 0 and 9",
                    &digit.to_string(),
                )
            })?;

        let position = positions[rng.gen_range(0..positions.len())];
        trim_and_invert(&self.images[position])
    }
}

/// Crops a glyph to its foreground column range and inverts its polarity.
///
/// The crop keeps every column from the first through the last one holding
/// a non-background pixel, so both edges of the result carry foreground.
fn trim_and_invert(image: &GrayImage) -> GenResult<Array2<f32>> {
    let mut min_col = None;
    let mut max_col = None;
    for (x, _, pixel) in image.enumerate_pixels() {
        if pixel[0] != 0 {
            min_col = Some(min_col.map_or(x, |current: u32| current.min(x)));
            max_col = Some(max_col.map_or(x, |current: u32| current.max(x)));
        }
    }

    let (min_col, max_col) = min_col.zip(max_col).ok_or_else(|| {
        NumGenError::data_load_message("glyph is blank: no foreground columns to trim")
    })?;

    let width = (max_col - min_col + 1) as usize;
    let mut trimmed = Array2::zeros((GLYPH_SIZE as usize, width));
    for y in 0..GLYPH_SIZE {
        for x in min_col..=max_col {
            trimmed[[y as usize, (x - min_col) as usize]] =
                BACKGROUND - f32::from(image.get_pixel(x, y)[0]);
        }
    }
    Ok(trimmed)
}
