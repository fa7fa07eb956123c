//! Margin-table file schema.
//!
//! These types are deserialized from YAML margin files. A margin file
//! either overlays the built-in table (the default) or replaces it
//! wholesale (`replace: true`), and may declare the grid size it is
//! meant to cover.
//!
//! ```yaml
//! grid:
//!   size: 4
//! replace: false
//! margins:
//!   - cell: [0, 0, 3]
//!     margin: "118,267,0,0"
//! ```

use serde::{Deserialize, Serialize};

/// Root of a margin-table file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginFile {
    /// Grid declaration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSection>,

    /// Replace the built-in table instead of overlaying it
    #[serde(default)]
    pub replace: bool,

    /// Margin entries
    pub margins: Vec<MarginEntry>,
}

/// Grid declaration inside a margin file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridSection {
    /// Grid dimension the table is meant to cover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u8>,
}

/// One coordinate → margin entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginEntry {
    /// Cell coordinate as `[x, y, z]`
    pub cell: [u8; 3],

    /// Margin string in `"L,T,R,B"` form
    pub margin: String,
}
