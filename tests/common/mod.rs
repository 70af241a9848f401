//! Shared fixture support: writes a minimal IDX-format glyph source.

use std::fs;
use std::path::Path;

const GLYPH_SIZE: usize = 28;
const IMAGES_MAGIC: u32 = 2051;
const LABELS_MAGIC: u32 = 2049;

/// Builds one deterministic 28x28 glyph per digit class.
///
/// The glyph for digit `d` carries a solid block in columns `4..=9 + d`
/// and rows `6..22`, leaving known horizontal padding on both sides.
fn glyph_bytes(digit: u8) -> Vec<u8> {
    let mut bytes = vec![0u8; GLYPH_SIZE * GLYPH_SIZE];
    let last_col = 9 + usize::from(digit);
    for y in 6..22 {
        for x in 4..=last_col {
            bytes[y * GLYPH_SIZE + x] = 200;
        }
    }
    bytes
}

/// Writes `train-images-idx3-ubyte` and `train-labels-idx1-ubyte` into
/// `dir`, holding `per_class` glyphs for each digit class 0-9.
pub fn write_glyph_source(dir: &Path, per_class: usize) {
    let mut images = Vec::new();
    images.extend_from_slice(&IMAGES_MAGIC.to_be_bytes());
    images.extend_from_slice(&((per_class * 10) as u32).to_be_bytes());
    images.extend_from_slice(&(GLYPH_SIZE as u32).to_be_bytes());
    images.extend_from_slice(&(GLYPH_SIZE as u32).to_be_bytes());

    let mut labels = Vec::new();
    labels.extend_from_slice(&LABELS_MAGIC.to_be_bytes());
    labels.extend_from_slice(&((per_class * 10) as u32).to_be_bytes());

    for _ in 0..per_class {
        for digit in 0u8..10 {
            images.extend_from_slice(&glyph_bytes(digit));
            labels.push(digit);
        }
    }

    fs::write(dir.join("train-images-idx3-ubyte"), images).unwrap();
    fs::write(dir.join("train-labels-idx1-ubyte"), labels).unwrap();
}
