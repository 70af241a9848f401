//! Conversion between normalized arrays and grayscale images.

use crate::core::{GenResult, NumGenError};
use image::GrayImage;
use ndarray::Array2;
use std::path::Path;

/// Converts a normalized `[0,1]` array into an 8-bit grayscale image.
///
/// Values are clamped into `[0,1]` and scaled to `[0,255]`; the array's
/// first dimension maps to image height, the second to width.
///
/// # Errors
///
/// Returns an invalid-input error if the array dimensions do not form a
/// valid image buffer.
pub fn array_to_gray_image(image: &Array2<f32>) -> GenResult<GrayImage> {
    let (height, width) = image.dim();
    let data: Vec<u8> = image
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();

    GrayImage::from_raw(width as u32, height as u32, data).ok_or_else(|| {
        NumGenError::invalid_input(format!(
            "array of {}x{} cannot be viewed as a grayscale image",
            height, width
        ))
    })
}

/// Saves a normalized `[0,1]` array as a grayscale PNG.
///
/// # Errors
///
/// Returns an invalid-input error for a malformed array and an encode
/// error if the image cannot be written.
pub fn save_grayscale(path: &Path, image: &Array2<f32>) -> GenResult<()> {
    let gray = array_to_gray_image(image)?;
    gray.save(path).map_err(NumGenError::ImageEncode)
}
