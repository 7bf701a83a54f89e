//! OKLCH-style display rendering.
//!
//! The lightness/chroma/hue triple is computed through CIE Lab (D65) and its
//! polar LCH form, not through true OKLab. Lightness is Lab L scaled to
//! 0..1 and chroma is Lab chroma divided by 150, a display compression
//! chosen so typical sRGB colors land in roughly 0..0.9. The result is for
//! display only; no other computation consumes it.

use std::fmt;

use serde::Serialize;

use super::rgb::Rgb;

/// D65 reference white used to normalise XYZ before the Lab transform.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// Lab companding threshold, (6/29)^3.
const LAB_EPSILON: f64 = 0.008856;

/// Lab chroma is divided by this for display.
const CHROMA_SCALE: f64 = 150.0;

/// Rounded lightness, chroma and hue (degrees in `[0, 360)`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Gamma-decode one sRGB channel.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl From<Rgb> for Oklch {
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r);
        let g = srgb_to_linear(rgb.g);
        let b = srgb_to_linear(rgb.b);

        let x = (0.4124 * r + 0.3576 * g + 0.1805 * b) / WHITE_X;
        let y = (0.2126 * r + 0.7152 * g + 0.0722 * b) / WHITE_Y;
        let z = (0.0193 * r + 0.1192 * g + 0.9505 * b) / WHITE_Z;

        let (fx, fy, fz) = (lab_f(x), lab_f(y), lab_f(z));
        let lightness = 116.0 * fy - 16.0;
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);

        let chroma = a.hypot(b);
        let mut hue = b.atan2(a).to_degrees();
        if hue < 0.0 {
            hue += 360.0;
        }

        // Rounding can push 359.996 up to 360.00
        let mut h = round_to(hue, 2);
        if h >= 360.0 {
            h -= 360.0;
        }

        Self {
            l: round_to(lightness / 100.0, 2),
            c: round_to(chroma / CHROMA_SCALE, 3),
            h,
        }
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.2} {:.3} {:.2})", self.l, self.c, self.h)
    }
}

/// Render an RGB color as `oklch(L C H)`.
pub fn to_oklch(rgb: Rgb) -> String {
    Oklch::from(rgb).to_string()
}
