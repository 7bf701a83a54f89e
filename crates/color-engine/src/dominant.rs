//! Dominant color extraction from a decoded pixel grid
//!
//! The grid is taken as given: callers downsample to an analysis resolution
//! (100x100 in the server) before calling, and no dimension limit is
//! enforced here.
//!
//! # Percentage semantics
//!
//! [`DominantColorEntry::percentage`] is `round(count / top_n * 100)`. It is
//! relative to the requested number of entries, **not** to the total pixel
//! count, so it neither sums to 100 nor says how much of the image a color
//! covers.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use crate::color::{format_hex, HexColor, Rgb};
use crate::contrast::relative_luminance;
use crate::error::{EngineError, Result};

/// Number of entries returned when the caller does not choose.
pub const DEFAULT_TOP_N: usize = 10;

/// A rectangular grid of RGB samples in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Wrap a row-major pixel buffer.
    ///
    /// Fails with [`EngineError::InvalidGrid`] when `pixels.len()` is not
    /// `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(EngineError::InvalidGrid {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from rows, top to bottom. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().find(|row| row.len() != width) {
            return Err(EngineError::InvalidGrid {
                width,
                height,
                len: ragged.len(),
            });
        }
        let pixels: Vec<Rgb> = rows.into_iter().flatten().collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// One ranked color from [`extract_dominant`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantColorEntry {
    pub hex: HexColor,
    pub rgb: Rgb,
    pub luminance: f64,
    /// Share relative to `top_n`; see the module docs.
    pub percentage: u32,
    /// Exact number of samples with this color.
    pub count: usize,
}

/// Rank the exact colors of `grid` by frequency and keep the top `top_n`.
///
/// Ties keep first-encountered order in a row-major scan. An empty grid
/// fails with [`EngineError::EmptyInput`]; `top_n == 0` yields no entries.
pub fn extract_dominant(grid: &PixelGrid, top_n: usize) -> Result<Vec<DominantColorEntry>> {
    if grid.is_empty() {
        return Err(EngineError::EmptyInput("pixels"));
    }

    // Tallies are kept in first-seen order; the map only locates a color's slot.
    let mut slots: HashMap<Rgb, usize> = HashMap::new();
    let mut tallies: Vec<(Rgb, usize)> = Vec::new();
    for &pixel in grid.pixels() {
        match slots.entry(pixel) {
            Entry::Occupied(slot) => tallies[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(tallies.len());
                tallies.push((pixel, 1));
            }
        }
    }

    // Stable sort preserves scan order among equal counts
    tallies.sort_by(|a, b| b.1.cmp(&a.1));
    tallies.truncate(top_n);

    Ok(tallies
        .into_iter()
        .map(|(rgb, count)| DominantColorEntry {
            hex: format_hex(rgb),
            rgb,
            luminance: relative_luminance(rgb),
            percentage: (count as f64 / top_n as f64 * 100.0).round() as u32,
            count,
        })
        .collect())
}
