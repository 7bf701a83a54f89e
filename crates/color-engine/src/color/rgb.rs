//! 8-bit RGB color type and hex codec

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Canonical hex rendering: `#` followed by six uppercase hex digits.
pub type HexColor = String;

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// True when all three channels are equal.
    #[inline]
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

/// Parse `#RRGGBB` or `RRGGBB` (case-insensitive) into an [`Rgb`].
///
/// Shorthand (`#RGB`), surrounding whitespace and any other shape are
/// rejected with [`EngineError::InvalidColorFormat`]. Expanding shorthand
/// is the caller's job.
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EngineError::InvalidColorFormat(input.to_string()));
    }

    let channel = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16)
            .map_err(|_| EngineError::InvalidColorFormat(input.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Render as `#RRGGBB` with uppercase digits.
pub fn format_hex(rgb: Rgb) -> HexColor {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

impl FromStr for Rgb {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex(*self))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}
