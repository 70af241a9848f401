//! Constants used throughout the generation pipeline.
//!
//! This module defines the glyph geometry, the structural constants of
//! synthesized phone numbers, and the file names of the glyph source
//! collection.

/// The height and width, in pixels, of a single source glyph.
///
/// Every image in the glyph collection is a square of this size, and all
/// composited strips share this height.
pub const GLYPH_SIZE: u32 = 28;

/// The number of digit classes in the glyph collection.
pub const DIGIT_CLASSES: usize = 10;

/// The background intensity of an inverted glyph (white paper).
pub const BACKGROUND: f32 = 255.0;

/// The fixed 3-digit mobile prefixes usable as an area code.
pub const MOBILE_PREFIXES: [[u8; 3]; 3] = [[0, 7, 0], [0, 8, 0], [0, 9, 0]];

/// Combined digit budget of area code plus exchange number for landline
/// numbers. A landline area code of length `n` pairs with a `6 - n` digit
/// exchange number.
pub const LANDLINE_PREFIX_DIGITS: usize = 6;

/// The exchange-number length paired with a mobile area code.
pub const MOBILE_EXCHANGE_LEN: usize = 4;

/// The subscriber-number length, identical for every phone number.
pub const SUBSCRIBER_LEN: usize = 4;

/// Extra white-space, in pixels, added to the spacing draw for the blocks
/// padding the outer edges of a phone-number image.
pub const EDGE_PAD_EXTRA: u32 = 5;

/// Extra white-space, in pixels, added to the spacing draw for the blocks
/// separating the parts of a spaced-style phone-number image.
pub const PART_GAP_EXTRA: u32 = 25;

/// File name of the IDX-format image file inside the glyph source directory.
pub const IMAGES_FILE: &str = "train-images-idx3-ubyte";

/// File name of the IDX-format label file inside the glyph source directory.
pub const LABELS_FILE: &str = "train-labels-idx1-ubyte";

/// Default standard-deviation range for noise injection.
pub const DEFAULT_NOISE_STDDEV_RANGE: (u32, u32) = (0, 255);
