//! IDX file parsing for the glyph source collection.
//!
//! The glyph collection is stored in the MNIST IDX binary layout: a
//! big-endian magic number, one big-endian `u32` per dimension, then the
//! raw payload bytes. Images use magic `2051` with dimensions
//! `(count, rows, cols)`; labels use magic `2049` with dimension `(count)`.
//!
//! All failures surface as [`NumGenError::DataLoad`] with the offending
//! path in the context, matching how the rest of the crate reports a
//! broken glyph source.

use crate::core::constants::GLYPH_SIZE;
use crate::core::{GenResult, NumGenError};
use image::GrayImage;
use std::path::Path;

/// Magic number of an IDX3 image file (unsigned bytes, 3 dimensions).
const IMAGES_MAGIC: u32 = 2051;
/// Magic number of an IDX1 label file (unsigned bytes, 1 dimension).
const LABELS_MAGIC: u32 = 2049;

/// Reads a big-endian `u32` at `offset`, failing on a truncated buffer.
fn be_u32(bytes: &[u8], offset: usize, path: &Path) -> GenResult<u32> {
    bytes
        .get(offset..offset + 4)
        .and_then(|slice| slice.try_into().ok())
        .map(u32::from_be_bytes)
        .ok_or_else(|| {
            NumGenError::data_load_message(format!(
                "IDX file '{}' is truncated at byte {}",
                path.display(),
                offset
            ))
        })
}

fn read_bytes(path: &Path, what: &str) -> GenResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        NumGenError::data_load(
            format!("failed to read {} from '{}'", what, path.display()),
            e,
        )
    })
}

/// Reads an IDX3 image file into a list of 28x28 grayscale images.
///
/// # Errors
///
/// Returns a data-load error if the file is missing, carries the wrong
/// magic number, declares dimensions other than 28x28, or is shorter than
/// its declared payload.
pub fn read_images(path: &Path) -> GenResult<Vec<GrayImage>> {
    let bytes = read_bytes(path, "glyph images")?;

    let magic = be_u32(&bytes, 0, path)?;
    if magic != IMAGES_MAGIC {
        return Err(NumGenError::data_load_message(format!(
            "'{}' is not an IDX image file: magic {} (expected {})",
            path.display(),
            magic,
            IMAGES_MAGIC
        )));
    }

    let count = be_u32(&bytes, 4, path)? as usize;
    let rows = be_u32(&bytes, 8, path)?;
    let cols = be_u32(&bytes, 12, path)?;
    if rows != GLYPH_SIZE || cols != GLYPH_SIZE {
        return Err(NumGenError::data_load_message(format!(
            "'{}' declares {}x{} glyphs (expected {}x{})",
            path.display(),
            rows,
            cols,
            GLYPH_SIZE,
            GLYPH_SIZE
        )));
    }

    let glyph_len = (rows * cols) as usize;
    let payload = &bytes[16..];
    if payload.len() < count * glyph_len {
        return Err(NumGenError::data_load_message(format!(
            "'{}' declares {} glyphs but holds {} payload bytes",
            path.display(),
            count,
            payload.len()
        )));
    }

    let images = payload
        .chunks_exact(glyph_len)
        .take(count)
        .map(|chunk| {
            GrayImage::from_raw(cols, rows, chunk.to_vec()).ok_or_else(|| {
                NumGenError::data_load_message(format!(
                    "'{}' holds a glyph with an inconsistent byte count",
                    path.display()
                ))
            })
        })
        .collect::<GenResult<Vec<_>>>()?;

    Ok(images)
}

/// Reads an IDX1 label file into a list of digit classes.
///
/// # Errors
///
/// Returns a data-load error if the file is missing, carries the wrong
/// magic number, is shorter than its declared payload, or holds a label
/// outside `[0,9]`.
pub fn read_labels(path: &Path) -> GenResult<Vec<u8>> {
    let bytes = read_bytes(path, "glyph labels")?;

    let magic = be_u32(&bytes, 0, path)?;
    if magic != LABELS_MAGIC {
        return Err(NumGenError::data_load_message(format!(
            "'{}' is not an IDX label file: magic {} (expected {})",
            path.display(),
            magic,
            LABELS_MAGIC
        )));
    }

    let count = be_u32(&bytes, 4, path)? as usize;
    let payload = &bytes[8..];
    if payload.len() < count {
        return Err(NumGenError::data_load_message(format!(
            "'{}' declares {} labels but holds {} payload bytes",
            path.display(),
            count,
            payload.len()
        )));
    }

    let labels = payload[..count].to_vec();
    if let Some(&bad) = labels.iter().find(|&&label| label > 9) {
        return Err(NumGenError::data_load_message(format!(
            "'{}' holds label {} outside the digit classes 0-9",
            path.display(),
            bad
        )));
    }

    Ok(labels)
}
