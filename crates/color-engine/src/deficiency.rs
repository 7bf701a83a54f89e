//! Color-vision deficiency approximation
//!
//! Each deficiency is a fixed linear transform applied directly to 8-bit
//! sRGB values, rounded to the nearest integer. These are coarse
//! approximations, not a physiological model: no gamma decode, no
//! cone-space projection.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::color::{format_hex, parse_hex, HexColor, Rgb};
use crate::error::{EngineError, Result};

/// The closed set of supported deficiency types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeficiencyType {
    /// Missing L (red) cones
    Protanopia,
    /// Missing M (green) cones
    Deuteranopia,
    /// Missing S (blue) cones
    Tritanopia,
    /// No color perception
    Achromatopsia,
}

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.0, 0.242]];

const DEUTERANOPIA: Matrix = [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.0, 0.3]];

const TRITANOPIA: Matrix = [[0.95, 0.0, 0.05], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]];

/// Rec. 601 luma weights
const LUMA: [f64; 3] = [0.299, 0.587, 0.114];

impl DeficiencyType {
    pub const ALL: [DeficiencyType; 4] = [
        DeficiencyType::Protanopia,
        DeficiencyType::Deuteranopia,
        DeficiencyType::Tritanopia,
        DeficiencyType::Achromatopsia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeficiencyType::Protanopia => "protanopia",
            DeficiencyType::Deuteranopia => "deuteranopia",
            DeficiencyType::Tritanopia => "tritanopia",
            DeficiencyType::Achromatopsia => "achromatopsia",
        }
    }
}

impl FromStr for DeficiencyType {
    type Err = EngineError;

    /// Only the four exact lowercase tags are accepted.
    fn from_str(s: &str) -> Result<Self> {
        DeficiencyType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EngineError::UnsupportedDeficiencyType(s.to_string()))
    }
}

impl fmt::Display for DeficiencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[inline]
fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn apply(matrix: &Matrix, rgb: Rgb) -> Rgb {
    let input = [rgb.r as f64, rgb.g as f64, rgb.b as f64];
    let row = |m: &[f64; 3]| to_channel(m[0] * input[0] + m[1] * input[1] + m[2] * input[2]);
    Rgb::new(row(&matrix[0]), row(&matrix[1]), row(&matrix[2]))
}

/// Approximate how `rgb` appears with the given deficiency.
pub fn simulate(rgb: Rgb, kind: DeficiencyType) -> Rgb {
    match kind {
        DeficiencyType::Protanopia => apply(&PROTANOPIA, rgb),
        DeficiencyType::Deuteranopia => apply(&DEUTERANOPIA, rgb),
        DeficiencyType::Tritanopia => apply(&TRITANOPIA, rgb),
        DeficiencyType::Achromatopsia => {
            let gray = to_channel(
                LUMA[0] * rgb.r as f64 + LUMA[1] * rgb.g as f64 + LUMA[2] * rgb.b as f64,
            );
            Rgb::new(gray, gray, gray)
        }
    }
}

/// Simulate every deficiency type, in [`DeficiencyType::ALL`] order.
pub fn simulate_all(rgb: Rgb) -> [(DeficiencyType, Rgb); 4] {
    DeficiencyType::ALL.map(|kind| (kind, simulate(rgb, kind)))
}

/// Hex-in, hex-out simulation with a string deficiency tag.
pub fn simulate_hex(hex: &str, kind: &str) -> Result<HexColor> {
    let kind: DeficiencyType = kind.parse()?;
    Ok(format_hex(simulate(parse_hex(hex)?, kind)))
}
