//! color-engine: color accessibility computations
//!
//! Deterministic, pure routines that convert between color representations,
//! measure WCAG contrast, search for an accessible replacement for a failing
//! color, rank the dominant colors of a pixel grid, and approximate how
//! colors appear under common color-vision deficiencies.
//!
//! Nothing here performs I/O or keeps state between calls. Every function
//! takes its inputs by value or shared reference and may be called from any
//! number of threads at once.
//!
//! # Quick Start
//!
//! ```
//! use color_engine::{contrast_ratio, suggest_accessible, WcagLevel};
//!
//! let ratio = contrast_ratio("#777777", "#FFFFFF").unwrap();
//! assert_eq!(WcagLevel::for_ratio(ratio), WcagLevel::Fail);
//!
//! let fixed = suggest_accessible("#777777", 7.0, "#FFFFFF").unwrap();
//! assert_eq!(WcagLevel::for_ratio(contrast_ratio(&fixed, "#FFFFFF").unwrap()), WcagLevel::AAA);
//! ```
//!
//! # Components
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`color`] | Hex codec around [`Rgb`], OKLCH display string |
//! | [`contrast`] | WCAG relative luminance and contrast ratio |
//! | [`corrector`] | Bounded darkening search for an accessible color |
//! | [`dominant`] | Frequency ranking of a pixel grid |
//! | [`deficiency`] | Linear color-vision deficiency approximations |
//! | [`analysis`] | Batch analysis combining all of the above |
//!
//! # Two Linearisations
//!
//! The OKLCH display path gamma-decodes with the IEC 61966-2-1 threshold
//! (0.04045), while WCAG luminance uses the 0.03928 threshold printed in
//! WCAG 2.0. Both thresholds fall between 8-bit values 10 and 11, so they
//! agree on every valid input; each is written as its standard states it.
//!
//! # Errors
//!
//! All failures are input-validation failures, reported as [`EngineError`]:
//!
//! - [`EngineError::InvalidColorFormat`] for anything other than
//!   `#RRGGBB` / `RRGGBB`
//! - [`EngineError::UnsupportedDeficiencyType`] for unknown deficiency tags
//! - [`EngineError::EmptyInput`] for empty batches and pixel grids
//! - [`EngineError::InvalidGrid`] for pixel buffers that do not match their
//!   declared dimensions

pub mod analysis;
pub mod color;
pub mod contrast;
pub mod corrector;
pub mod deficiency;
pub mod dominant;
pub mod error;


pub use analysis::{analyze_color, analyze_colors, summarize, AnalysisSummary, ColorAnalysis};
pub use color::{format_hex, parse_hex, to_oklch, HexColor, Oklch, Rgb};
pub use contrast::{
    contrast_ratio, contrast_ratio_rgb, relative_luminance, WcagLevel, WCAG_AA, WCAG_AAA,
};
pub use corrector::{
    darken, suggest_accessible, suggest_accessible_default, suggest_accessible_rgb,
    DEFAULT_BACKGROUND, DEFAULT_TARGET_RATIO,
};
pub use deficiency::{simulate, simulate_all, simulate_hex, DeficiencyType};
pub use dominant::{extract_dominant, DominantColorEntry, PixelGrid, DEFAULT_TOP_N};
pub use error::{EngineError, Result};
