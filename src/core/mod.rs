//! Core functionality for the number-image generation pipeline.
//!
//! This module contains the error types shared by every component and the
//! constants that define the glyph geometry and phone-number structure.

pub mod constants;
pub mod errors;

pub use errors::{GenResult, NumGenError, ProcessingStage};
