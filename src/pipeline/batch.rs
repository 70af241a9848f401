//! Batch dataset generation and persistence.
//!
//! The batch loop is an independent-trials sequence: every iteration draws
//! a fresh phone number, renders it, masks it with noise, and writes it as
//! `<digits>.png`. Generation is fail-fast: the first failing item aborts
//! the remaining batch and no partial image is emitted for it.

use crate::core::{GenResult, NumGenError, ProcessingStage};
use crate::glyphs::GlyphStore;
use crate::pipeline::phone::{PhoneNumberSynthesizer, WritingStyle};
use crate::processors::{NoiseInjector, SequenceCompositor, SpacingRange};
use crate::utils::save_grayscale;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for a batch phone-number generation run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Inter-digit spacing range.
    pub spacing: SpacingRange,
    /// Target width of every generated image.
    pub image_width: u32,
    /// Number of images to generate.
    pub num_images: usize,
    /// Directory the images are written into (created if absent).
    pub output_dir: PathBuf,
    /// Write a `labels.json` manifest next to the images.
    pub write_manifest: bool,
}

/// One manifest record: a generated file and its ground-truth label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name of the generated image.
    pub file: String,
    /// The significant digits the image shows.
    pub digits: String,
    /// The writing style the image was laid out in.
    pub style: WritingStyle,
}

/// Name of the manifest file written next to the generated images.
pub const MANIFEST_FILE: &str = "labels.json";

/// Generates a batch of phone-number images into the output directory.
///
/// Each image is synthesized, masked with noise, and saved as
/// `<digits>.png`. Returns the paths of the written images in generation
/// order. When requested, a `labels.json` manifest mapping each file to
/// its digit string and writing style is written after the last image.
///
/// # Errors
///
/// Returns a validation error for a zero image count and propagates the
/// first synthesis or persistence failure, aborting the batch.
pub fn generate_phone_dataset(
    store: &GlyphStore,
    options: &BatchOptions,
    rng: &mut impl Rng,
) -> GenResult<Vec<PathBuf>> {
    if options.num_images == 0 {
        return Err(NumGenError::validation_error(
            "batch generation",
            "num_images",
            "a count greater than 0",
            "0",
        ));
    }

    std::fs::create_dir_all(&options.output_dir)?;
    let synthesizer = PhoneNumberSynthesizer::new(store, options.spacing, options.image_width)?;
    let injector = NoiseInjector::default();

    let mut written = Vec::with_capacity(options.num_images);
    let mut manifest = Vec::with_capacity(options.num_images);
    for index in 0..options.num_images {
        let (phone, style, image) = synthesizer.synthesize(rng)?;
        let noisy = injector.add_noise(&image, rng)?;

        let file = format!("{}.png", phone.digit_string());
        let path = options.output_dir.join(&file);
        save_grayscale(&path, &noisy)?;
        debug!(
            image = index + 1,
            total = options.num_images,
            path = %path.display(),
            "phone-number image written"
        );

        manifest.push(ManifestEntry {
            file,
            digits: phone.digit_string(),
            style,
        });
        written.push(path);
    }

    if options.write_manifest {
        write_manifest(&options.output_dir, &manifest)?;
    }

    info!(
        images = written.len(),
        output = %options.output_dir.display(),
        "batch generation finished"
    );
    Ok(written)
}

fn write_manifest(output_dir: &Path, entries: &[ManifestEntry]) -> GenResult<()> {
    let path = output_dir.join(MANIFEST_FILE);
    let file = std::fs::File::create(&path)?;
    serde_json::to_writer_pretty(file, entries).map_err(|e| {
        NumGenError::processing_error(
            ProcessingStage::Batch,
            format!("manifest write to '{}'", path.display()),
            e,
        )
    })
}

/// Renders one digit sequence and saves it as `<digits>.png`.
///
/// Returns the path of the written image.
///
/// # Errors
///
/// Propagates rendering validation failures and persistence errors.
pub fn render_sequence_to_file(
    store: &GlyphStore,
    digits: &[u8],
    spacing: SpacingRange,
    width: u32,
    output_dir: &Path,
    rng: &mut impl Rng,
) -> GenResult<PathBuf> {
    let compositor = SequenceCompositor::new(store);
    let image = compositor.render(digits, spacing, width, rng)?;

    std::fs::create_dir_all(output_dir)?;
    let file: String = digits.iter().map(u8::to_string).collect();
    let path = output_dir.join(format!("{}.png", file));
    save_grayscale(&path, &image)?;
    info!(path = %path.display(), "sequence image written");
    Ok(path)
}
