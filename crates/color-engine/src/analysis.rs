//! Batch color analysis against a background
//!
//! Used for palettes extracted from pages or supplied by users: every color
//! is canonicalised, measured against the background, and given a
//! suggestion when it fails AAA.

use std::collections::HashSet;

use serde::Serialize;

use crate::color::{format_hex, parse_hex, to_oklch, HexColor, Rgb};
use crate::contrast::{contrast_ratio_rgb, relative_luminance, WcagLevel, WCAG_AA, WCAG_AAA};
use crate::corrector::suggest_accessible_rgb;
use crate::error::{EngineError, Result};

/// Analysis of a single color against one background.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAnalysis {
    pub hex: HexColor,
    pub rgb: Rgb,
    pub oklch: String,
    pub luminance: f64,
    pub contrast_ratio: f64,
    pub level: WcagLevel,
    pub passes_aa: bool,
    pub passes_aaa: bool,
    /// Darkened replacement, present only when the color fails AAA
    pub suggestion: Option<HexColor>,
}

/// Pass/fail counts over a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub passing_aa: usize,
    pub passing_aaa: usize,
    pub failing: usize,
}

/// Analyse one parsed color.
pub fn analyze_color(rgb: Rgb, background: Rgb) -> ColorAnalysis {
    let ratio = contrast_ratio_rgb(rgb, background);
    let passes_aaa = ratio >= WCAG_AAA;
    ColorAnalysis {
        hex: format_hex(rgb),
        rgb,
        oklch: to_oklch(rgb),
        luminance: relative_luminance(rgb),
        contrast_ratio: ratio,
        level: WcagLevel::for_ratio(ratio),
        passes_aa: ratio >= WCAG_AA,
        passes_aaa,
        suggestion: (!passes_aaa)
            .then(|| format_hex(suggest_accessible_rgb(rgb, WCAG_AAA, background))),
    }
}

/// Analyse a list of hex colors against `background`.
///
/// Output follows input order with duplicates (after canonicalisation)
/// removed. Any malformed color fails the whole batch; an empty list fails
/// with [`EngineError::EmptyInput`] so that "nothing analysed" is never
/// mistaken for "everything passed".
pub fn analyze_colors<S: AsRef<str>>(colors: &[S], background: &str) -> Result<Vec<ColorAnalysis>> {
    if colors.is_empty() {
        return Err(EngineError::EmptyInput("colors"));
    }
    let background = parse_hex(background)?;

    let mut seen = HashSet::new();
    let mut parsed = Vec::with_capacity(colors.len());
    for color in colors {
        let rgb = parse_hex(color.as_ref())?;
        if seen.insert(rgb) {
            parsed.push(rgb);
        }
    }

    Ok(parsed
        .into_iter()
        .map(|rgb| analyze_color(rgb, background))
        .collect())
}

/// Count how many analysed colors pass each level.
pub fn summarize(analyses: &[ColorAnalysis]) -> AnalysisSummary {
    let passing_aa = analyses.iter().filter(|a| a.passes_aa).count();
    AnalysisSummary {
        total: analyses.len(),
        passing_aa,
        passing_aaa: analyses.iter().filter(|a| a.passes_aaa).count(),
        failing: analyses.len() - passing_aa,
    }
}
