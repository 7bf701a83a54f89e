//! Color codec: hex parsing and formatting, plus the OKLCH display form
//!
//! [`Rgb`] is the canonical in-memory representation. Every other form
//! (hex strings, OKLCH strings) is produced from or parsed into it.
//!
//! # Example
//!
//! ```
//! use color_engine::{format_hex, parse_hex, to_oklch};
//!
//! let rgb = parse_hex("#ff0000").unwrap();
//! assert_eq!(format_hex(rgb), "#FF0000");
//! assert_eq!(to_oklch(rgb), "oklch(0.53 0.697 40.00)");
//! ```

mod oklch;
mod rgb;

pub use oklch::{to_oklch, Oklch};
pub use rgb::{format_hex, parse_hex, HexColor, Rgb};
