//! Error types for engine operations
//!
//! Every failure is an input-validation failure raised synchronously by a
//! pure function. Each kind carries a stable machine-readable code so the
//! transport layer can map it without string matching.

use thiserror::Error;

/// Error type for all fallible engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Hex input is not an optional `#` followed by exactly 6 hex digits
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    /// Deficiency tag outside the closed set of supported types
    #[error("unsupported deficiency type: {0:?} (expected protanopia, deuteranopia, tritanopia or achromatopsia)")]
    UnsupportedDeficiencyType(String),

    /// A batch operation received nothing to work on
    #[error("empty input: no {0} provided")]
    EmptyInput(&'static str),

    /// Pixel buffer length does not match the declared grid dimensions
    #[error("invalid pixel grid: {width}x{height} needs {} samples, got {len}", .width * .height)]
    InvalidGrid {
        width: usize,
        height: usize,
        len: usize,
    },
}

impl EngineError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidColorFormat(_) => "invalid_color_format",
            EngineError::UnsupportedDeficiencyType(_) => "unsupported_deficiency_type",
            EngineError::EmptyInput(_) => "empty_input",
            EngineError::InvalidGrid { .. } => "invalid_grid",
        }
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
