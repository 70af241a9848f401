//! Error types for the number-image generation pipeline.
//!
//! This module defines the single error kind surfaced to callers of the
//! generation pipeline, the processing stages used to tag internal
//! failures, and helper constructors for creating well-structured errors
//! with appropriate context and error chaining.
//!
//! Every component normalizes its internal failure reasons into
//! [`NumGenError`] at its boundary: callers match on the variant tag
//! instead of relying on blind propagation, and the original cause stays
//! attached via `source`.

use thiserror::Error;

/// Enum representing different stages of the generation pipeline.
///
/// This enum is used to identify which stage an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Error occurred while fetching or trimming a glyph.
    GlyphFetch,
    /// Error occurred while compositing a digit sequence.
    Composition,
    /// Error occurred during image resizing.
    Resize,
    /// Error occurred while assembling a phone-number image.
    PhoneAssembly,
    /// Error occurred during noise injection.
    Noise,
    /// Error occurred during batch generation.
    Batch,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::GlyphFetch => write!(f, "glyph fetch"),
            ProcessingStage::Composition => write!(f, "sequence composition"),
            ProcessingStage::Resize => write!(f, "resize"),
            ProcessingStage::PhoneAssembly => write!(f, "phone-number assembly"),
            ProcessingStage::Noise => write!(f, "noise injection"),
            ProcessingStage::Batch => write!(f, "batch generation"),
        }
    }
}

/// Enum representing the errors that can occur while generating images.
///
/// This is the one error kind the crate surfaces: data-load failures,
/// validation failures, and stage-tagged processing failures all normalize
/// to a `NumGenError` carrying the triggering condition in its message and
/// chaining the original cause where one exists.
#[derive(Error, Debug)]
pub enum NumGenError {
    /// The glyph source collection could not be loaded or is malformed.
    #[error("data load failed: {context}")]
    DataLoad {
        /// Additional context about the failure.
        context: String,
        /// The underlying error, if the failure was caused by one.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error occurred during a processing stage.
    #[error("{kind} failed: {context}")]
    Processing {
        /// The stage where the error occurred.
        kind: ProcessingStage,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error occurred while encoding an output image.
    #[error("image encode")]
    ImageEncode(#[source] image::ImageError),

    /// Error from array shape operations.
    #[error("array operation")]
    Shape(#[from] ndarray::ShapeError),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Convenient result alias for generation operations.
pub type GenResult<T> = Result<T, NumGenError>;

impl NumGenError {
    /// Creates a NumGenError for a data-load failure with a chained cause.
    pub fn data_load(
        context: impl Into<String>,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataLoad {
            context: context.into(),
            source: Some(Box::new(error)),
        }
    }

    /// Creates a NumGenError for a data-load failure without a cause.
    pub fn data_load_message(context: impl Into<String>) -> Self {
        Self::DataLoad {
            context: context.into(),
            source: None,
        }
    }

    /// Creates a NumGenError for a processing failure in a given stage.
    ///
    /// # Arguments
    ///
    /// * `kind` - The stage where the error occurred.
    /// * `context` - Additional context about the error.
    /// * `error` - The underlying error that caused this error.
    pub fn processing_error(
        kind: ProcessingStage,
        context: impl Into<String>,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind,
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates a NumGenError for invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a NumGenError for a validation failure with field context.
    ///
    /// # Arguments
    ///
    /// * `component` - The component where the validation failed.
    /// * `field` - The field that failed validation.
    /// * `expected` - The expected value.
    /// * `actual` - The actual value.
    pub fn validation_error(component: &str, field: &str, expected: &str, actual: &str) -> Self {
        Self::InvalidInput {
            message: format!(
                "validation failed in {}: field '{}' expected {}, but got '{}'",
                component, field, expected, actual
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_component_and_field() {
        let err = NumGenError::validation_error("compositor", "width", "> 0", "0");
        let message = err.to_string();
        assert!(message.contains("compositor"));
        assert!(message.contains("width"));
    }

    #[test]
    fn processing_error_keeps_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
        let err = NumGenError::processing_error(ProcessingStage::Resize, "strip resize", cause);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("resize"));
    }
}
