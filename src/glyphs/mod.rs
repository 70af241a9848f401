//! Glyph source loading and retrieval.
//!
//! This module provides access to the labeled glyph collection backing all
//! image generation: parsing of the on-disk IDX files ([`idx`]) and the
//! in-memory [`GlyphStore`] serving random, padding-trimmed, polarity-
//! inverted glyphs by digit class.

pub mod idx;
pub mod store;

pub use store::GlyphStore;

#[cfg(test)]
pub(crate) mod test_fixtures {
    //! Shared in-memory glyph fixtures for unit tests.

    use super::GlyphStore;
    use crate::core::constants::GLYPH_SIZE;
    use image::GrayImage;

    /// Builds a deterministic 28x28 glyph for a digit class.
    ///
    /// The glyph carries a solid block in columns `4..=9 + digit` and rows
    /// `6..22`, leaving known horizontal padding on both sides.
    pub fn synthetic_glyph(digit: u8) -> GrayImage {
        let mut image = GrayImage::new(GLYPH_SIZE, GLYPH_SIZE);
        let last_col = 9 + u32::from(digit);
        for y in 6..22 {
            for x in 4..=last_col {
                image.put_pixel(x, y, image::Luma([200]));
            }
        }
        image
    }

    /// Builds a store with exactly one glyph per digit class.
    pub fn tiny_store() -> GlyphStore {
        let images = (0u8..10).map(synthetic_glyph).collect();
        let labels = (0u8..10).collect();
        GlyphStore::from_parts(images, labels).expect("fixture store is valid")
    }
}
