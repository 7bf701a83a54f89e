//! WCAG 2.x relative luminance and contrast ratio
//!
//! Compliance thresholds are exposed as constants and evaluated by callers
//! (or through [`WcagLevel::for_ratio`]); [`contrast_ratio`] itself only
//! measures.

use serde::Serialize;

use crate::color::{parse_hex, Rgb};
use crate::error::Result;

/// Minimum ratio for WCAG AA normal text.
pub const WCAG_AA: f64 = 4.5;

/// Minimum ratio for WCAG AAA normal text.
pub const WCAG_AAA: f64 = 7.0;

/// WCAG linearisation of one channel (threshold 0.03928, as written in WCAG 2.0).
#[inline]
fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio between two already-parsed colors, in `[1, 21]`.
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Contrast ratio between two hex colors.
///
/// Symmetric in its arguments. Fails only if either input is malformed.
///
/// ```
/// let ratio = color_engine::contrast_ratio("#000000", "#FFFFFF").unwrap();
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio_rgb(parse_hex(a)?, parse_hex(b)?))
}

/// Highest WCAG level (normal text) a ratio satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(clippy::upper_case_acronyms)]
pub enum WcagLevel {
    Fail,
    AA,
    AAA,
}

impl WcagLevel {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio >= WCAG_AAA {
            WcagLevel::AAA
        } else if ratio >= WCAG_AA {
            WcagLevel::AA
        } else {
            WcagLevel::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Fail => "FAIL",
            WcagLevel::AA => "AA",
            WcagLevel::AAA => "AAA",
        }
    }
}
