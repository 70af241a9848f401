//! Command-line entry point for the number-image generator.
//!
//! Two subcommands are exposed: `sequence` renders an arbitrary digit
//! sequence to one image, `phone-numbers` batch-generates N phone-number
//! images. Both take spacing bounds, the target width, and an output
//! directory; any validation or generation failure is logged and mapped to
//! a non-zero exit.

use clap::{Args, Parser, Subcommand};
use numgen::core::{GenResult, NumGenError};
use numgen::glyphs::GlyphStore;
use numgen::pipeline::{generate_phone_dataset, render_sequence_to_file, BatchOptions};
use numgen::processors::SpacingRange;
use numgen::utils::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "numgen")]
#[command(about = "Synthesizes handwritten digit-sequence and phone-number image datasets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generates an image from an input sequence of digits
    Sequence(SequenceArgs),
    /// Generates random phone-number images
    PhoneNumbers(PhoneNumbersArgs),
}

/// Options shared by both subcommands.
#[derive(Args)]
struct CommonArgs {
    /// Minimum space (in pixels) between consecutive digits
    #[arg(long)]
    min_space: u32,

    /// Maximum space (in pixels) between consecutive digits
    #[arg(long)]
    max_space: u32,

    /// Width of the generated image in pixels
    #[arg(long)]
    image_width: u32,

    /// Directory where the generated images are stored
    #[arg(long, default_value = ".")]
    output_path: PathBuf,

    /// Directory holding the extracted glyph source collection
    #[arg(long, default_value = "resources")]
    data_path: PathBuf,

    /// Seed for the pseudo-random generator (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct SequenceArgs {
    /// The sequence of digits to render, e.g. 123
    #[arg(long)]
    sequence: String,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct PhoneNumbersArgs {
    /// Number of images to generate
    #[arg(long)]
    num_images: usize,

    /// Write a labels.json manifest next to the images
    #[arg(long)]
    manifest: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Parses a digit string like "123" into digit values.
fn parse_digit_sequence(sequence: &str) -> GenResult<Vec<u8>> {
    if sequence.is_empty() {
        return Err(NumGenError::validation_error(
            "cli",
            "sequence",
            "a non-empty digit string",
            sequence,
        ));
    }
    sequence
        .chars()
        .map(|c| {
            c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                NumGenError::validation_error(
                    "cli",
                    "sequence",
                    "decimal digits only",
                    sequence,
                )
            })
        })
        .collect()
}

fn run_sequence(args: SequenceArgs) -> GenResult<()> {
    let digits = parse_digit_sequence(&args.sequence)?;
    let spacing = SpacingRange::new(args.common.min_space, args.common.max_space)?;
    let store = GlyphStore::load(&args.common.data_path)?;
    let mut rng = make_rng(args.common.seed);

    info!("generating the number sequence");
    let path = render_sequence_to_file(
        &store,
        &digits,
        spacing,
        args.common.image_width,
        &args.common.output_path,
        &mut rng,
    )?;
    info!("saved image path: {}", path.display());
    Ok(())
}

fn run_phone_numbers(args: PhoneNumbersArgs) -> GenResult<()> {
    let spacing = SpacingRange::new(args.common.min_space, args.common.max_space)?;
    let store = GlyphStore::load(&args.common.data_path)?;
    let mut rng = make_rng(args.common.seed);

    let options = BatchOptions {
        spacing,
        image_width: args.common.image_width,
        num_images: args.num_images,
        output_dir: args.common.output_path.clone(),
        write_manifest: args.manifest,
    };

    info!("generating {} random phone numbers", args.num_images);
    let written = generate_phone_dataset(&store, &options, &mut rng)?;
    info!(
        "generated {} images saved at: {}",
        written.len(),
        args.common.output_path.display()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Sequence(args) => run_sequence(args),
        Command::PhoneNumbers(args) => run_phone_numbers(args),
    };

    if let Err(err) = &result {
        error!("generation failed: {}", err);
    }
    result.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digit_strings_with_leading_zero() {
        assert_eq!(parse_digit_sequence("0123").unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn rejects_non_digit_input() {
        assert!(parse_digit_sequence("12a").is_err());
        assert!(parse_digit_sequence("").is_err());
    }
}
