//! Margin values and the coordinate → margin lookup table.
//!
//! Margins position each tappad on the page. The built-in table holds the
//! 27 hand-tuned values for the default 3×3×3 layout; it is constructed
//! once, never mutated, and extended only through a margin file
//! (see [`crate::config`]).

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use thiserror::Error;

use crate::grid::{Coordinate, coordinates};

// ============================================================================
// Margin
// ============================================================================

/// Pixel offsets positioning one tappad: left, top, right, bottom.
///
/// Rendered into markup as the comma-joined string `"L,T,R,B"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
    /// Offset from the left edge
    pub left: i32,
    /// Offset from the top edge
    pub top: i32,
    /// Offset from the right edge
    pub right: i32,
    /// Offset from the bottom edge
    pub bottom: i32,
}

impl Margin {
    /// Creates a margin from its four components.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

/// Error parsing a `"L,T,R,B"` margin string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected four comma-separated integers, got \"{0}\"")]
pub struct MarginParseError(pub String);

impl FromStr for Margin {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [left, top, right, bottom] = parts.as_slice() else {
            return Err(MarginParseError(s.to_string()));
        };
        Ok(Self::new(
            component(left, s)?,
            component(top, s)?,
            component(right, s)?,
            component(bottom, s)?,
        ))
    }
}

fn component(raw: &str, full: &str) -> Result<i32, MarginParseError> {
    raw.trim()
        .parse()
        .map_err(|_| MarginParseError(full.to_string()))
}

// ============================================================================
// Built-in Table
// ============================================================================

/// The 27 hand-tuned margins for the default 3×3×3 cube layout.
///
/// These are fixed pixel positions for the isometric face layout of the
/// cube view. They are literal values, not computed from geometry.
const BUILTIN: [(Coordinate, Margin); 27] = [
    (Coordinate::new(0, 0, 0), Margin::new(40, 402, 0, 0)),
    (Coordinate::new(1, 0, 0), Margin::new(165, 402, 0, 0)),
    (Coordinate::new(2, 0, 0), Margin::new(290, 402, 0, 0)),
    (Coordinate::new(0, 0, 1), Margin::new(83, 357, 0, 0)),
    (Coordinate::new(1, 0, 1), Margin::new(206, 357, 0, 0)),
    (Coordinate::new(2, 0, 1), Margin::new(329, 357, 0, 0)),
    (Coordinate::new(0, 0, 2), Margin::new(118, 312, 0, 0)),
    (Coordinate::new(1, 0, 2), Margin::new(241, 312, 0, 0)),
    (Coordinate::new(2, 0, 2), Margin::new(364, 312, 0, 0)),
    (Coordinate::new(0, 1, 0), Margin::new(40, 260, 0, 0)),
    (Coordinate::new(1, 1, 0), Margin::new(165, 260, 0, 0)),
    (Coordinate::new(2, 1, 0), Margin::new(290, 260, 0, 0)),
    (Coordinate::new(0, 1, 1), Margin::new(83, 215, 0, 0)),
    (Coordinate::new(1, 1, 1), Margin::new(206, 215, 0, 0)),
    (Coordinate::new(2, 1, 1), Margin::new(329, 215, 0, 0)),
    (Coordinate::new(0, 1, 2), Margin::new(118, 170, 0, 0)),
    (Coordinate::new(1, 1, 2), Margin::new(241, 170, 0, 0)),
    (Coordinate::new(2, 1, 2), Margin::new(364, 170, 0, 0)),
    (Coordinate::new(0, 2, 0), Margin::new(40, 115, 0, 0)),
    (Coordinate::new(1, 2, 0), Margin::new(165, 115, 0, 0)),
    (Coordinate::new(2, 2, 0), Margin::new(290, 115, 0, 0)),
    (Coordinate::new(0, 2, 1), Margin::new(83, 70, 0, 0)),
    (Coordinate::new(1, 2, 1), Margin::new(206, 70, 0, 0)),
    (Coordinate::new(2, 2, 1), Margin::new(329, 70, 0, 0)),
    (Coordinate::new(0, 2, 2), Margin::new(118, 25, 0, 0)),
    (Coordinate::new(1, 2, 2), Margin::new(241, 25, 0, 0)),
    (Coordinate::new(2, 2, 2), Margin::new(364, 25, 0, 0)),
];

// ============================================================================
// MarginTable
// ============================================================================

/// Immutable-after-construction coordinate → margin mapping.
///
/// Insertion-ordered so listings are deterministic across runs.
#[derive(Debug, Clone)]
pub struct MarginTable {
    entries: IndexMap<Coordinate, Margin>,
}

impl MarginTable {
    /// Creates an empty table (used with `replace: true` margin files).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates the built-in 27-entry table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN.iter().copied().collect(),
        }
    }

    /// Inserts or replaces an entry, returning the previous margin if any.
    pub fn insert(&mut self, cell: Coordinate, margin: Margin) -> Option<Margin> {
        self.entries.insert(cell, margin)
    }

    /// Looks up the margin for a cell.
    #[must_use]
    pub fn get(&self, cell: Coordinate) -> Option<&Margin> {
        self.entries.get(&cell)
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Coordinate, &Margin)> {
        self.entries.iter()
    }

    /// Cells of the n×n×n iteration space without an entry, in emission
    /// order.
    #[must_use]
    pub fn missing_cells(&self, n: u8) -> Vec<Coordinate> {
        coordinates(n)
            .filter(|cell| !self.entries.contains_key(cell))
            .collect()
    }

    /// Entries outside the n×n×n iteration space, in insertion order.
    #[must_use]
    pub fn surplus_cells(&self, n: u8) -> Vec<Coordinate> {
        self.entries
            .keys()
            .copied()
            .filter(|cell| !cell.in_grid(n))
            .collect()
    }
}

impl Default for MarginTable {
    fn default() -> Self {
        Self::builtin()
    }
}
