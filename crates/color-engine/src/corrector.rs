//! Accessible color suggestion by bounded darkening search
//!
//! The search subtracts a uniform offset from every channel, stepping the
//! offset 0, 5, 10, ..., 255 (52 candidates), and returns the first
//! candidate whose contrast against the background reaches the target.
//! When none does, the best candidate seen wins, with ties going to the
//! smallest offset, so the original color is returned if nothing improves
//! on it.
//!
//! The search only darkens. A dark foreground on a light background, or a
//! light foreground on a dark background, cannot be improved and comes back
//! unchanged.

use crate::color::{format_hex, parse_hex, HexColor, Rgb};
use crate::contrast::{contrast_ratio_rgb, WCAG_AAA};
use crate::error::Result;

/// Target ratio used when the caller does not supply one (WCAG AAA).
pub const DEFAULT_TARGET_RATIO: f64 = WCAG_AAA;

/// Background used when the caller does not supply one.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// Offset increment between candidates.
const OFFSET_STEP: usize = 5;

/// Subtract `offset` from every channel, clamping each at zero.
#[inline]
pub fn darken(rgb: Rgb, offset: u8) -> Rgb {
    Rgb::new(
        rgb.r.saturating_sub(offset),
        rgb.g.saturating_sub(offset),
        rgb.b.saturating_sub(offset),
    )
}

/// Run the darkening search on parsed colors.
pub fn suggest_accessible_rgb(original: Rgb, target_ratio: f64, background: Rgb) -> Rgb {
    let mut best = original;
    let mut best_ratio = contrast_ratio_rgb(original, background);

    for offset in (0..=u8::MAX).step_by(OFFSET_STEP) {
        let candidate = darken(original, offset);
        let ratio = contrast_ratio_rgb(candidate, background);
        if ratio >= target_ratio {
            return candidate;
        }
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }

    best
}

/// Suggest a color near `original` that reaches `target_ratio` against
/// `background`.
///
/// ```
/// use color_engine::{contrast_ratio, suggest_accessible};
///
/// let fixed = suggest_accessible("#777777", 7.0, "#FFFFFF").unwrap();
/// assert_eq!(fixed, "#595959");
/// assert!(contrast_ratio(&fixed, "#FFFFFF").unwrap() >= 7.0);
/// ```
pub fn suggest_accessible(original: &str, target_ratio: f64, background: &str) -> Result<HexColor> {
    let original = parse_hex(original)?;
    let background = parse_hex(background)?;
    Ok(format_hex(suggest_accessible_rgb(
        original,
        target_ratio,
        background,
    )))
}

/// [`suggest_accessible`] with the AAA target against white.
pub fn suggest_accessible_default(original: &str) -> Result<HexColor> {
    suggest_accessible(original, DEFAULT_TARGET_RATIO, DEFAULT_BACKGROUND)
}
