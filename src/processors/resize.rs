//! Horizontal strip resizing.

use crate::core::{GenResult, NumGenError, ProcessingStage};
use image::imageops::FilterType;
use image::{imageops, ImageBuffer, Luma};

/// Resizes a fixed-height strip to a target width with bilinear filtering.
///
/// The strip keeps its height; only the width is rescaled. Values pass
/// through unchanged in scale, so the helper works on raw `[0,255]` strips
/// and on normalized `[0,1]` composites alike.
///
/// # Errors
///
/// Returns a validation error for a zero target width and a resize error
/// if the strip cannot be viewed as an image buffer.
pub fn resize_strip(strip: &ndarray::Array2<f32>, width: u32) -> GenResult<ndarray::Array2<f32>> {
    if width == 0 {
        return Err(NumGenError::validation_error(
            "resize",
            "width",
            "a positive pixel width",
            "0",
        ));
    }

    let (height, src_width) = strip.dim();
    let buffer: ImageBuffer<Luma<f32>, Vec<f32>> = ImageBuffer::from_raw(
        src_width as u32,
        height as u32,
        strip.iter().copied().collect(),
    )
    .ok_or_else(|| {
        NumGenError::invalid_input(format!(
            "strip of {}x{} cannot be viewed as an image buffer",
            height, src_width
        ))
    })?;

    let resized = imageops::resize(&buffer, width, height as u32, FilterType::Triangle);
    ndarray::Array2::from_shape_vec((height, width as usize), resized.into_raw()).map_err(|e| {
        NumGenError::processing_error(
            ProcessingStage::Resize,
            format!("resized strip does not fit shape ({}, {})", height, width),
            e,
        )
    })
}
