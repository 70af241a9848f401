//! # numgen
//!
//! A Rust library that synthesizes labeled image datasets of handwritten
//! digit sequences by sampling glyphs from an MNIST-style source collection,
//! compositing them horizontally with randomized spacing, and rescaling to a
//! target width. Plain digit strings and phone-number-shaped sequences are
//! supported, the latter with optional scan-artifact noise.
//!
//! ## Components
//!
//! - **Glyph store**: loads the labeled glyph collection once and serves
//!   random, padding-trimmed, polarity-inverted glyphs by digit class
//! - **Sequence compositing**: assembles a digit sequence into a single
//!   normalized image strip with uniform-random inter-digit gaps
//! - **Phone-number synthesis**: draws the three structural parts of a
//!   phone number and lays them out in one of two writing styles
//! - **Noise injection**: masks a finished image against a Gaussian noise
//!   field to simulate scan artifacts
//!
//! ## Modules
//!
//! * [`core`] - Error handling and shared constants
//! * [`glyphs`] - Glyph source loading and retrieval
//! * [`processors`] - Sequence compositing, resizing, and noise
//! * [`pipeline`] - Phone-number synthesis and batch dataset generation
//! * [`utils`] - Image conversion, saving, and logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use numgen::prelude::*;
//! use rand::SeedableRng;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = GlyphStore::load(Path::new("resources"))?;
//! let compositor = SequenceCompositor::new(&store);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let spacing = SpacingRange::new(2, 5)?;
//! let image = compositor.render(&[1, 2, 3], spacing, 50, &mut rng)?;
//! assert_eq!(image.dim(), (28, 50));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod glyphs;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use numgen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{GenResult, NumGenError};
    pub use crate::glyphs::GlyphStore;
    pub use crate::pipeline::{
        generate_phone_dataset, render_sequence_to_file, BatchOptions, PhoneNumber,
        PhoneNumberSynthesizer, WritingStyle,
    };
    pub use crate::processors::{NoiseInjector, SequenceCompositor, SpacingRange};
    pub use crate::utils::save_grayscale;
}
