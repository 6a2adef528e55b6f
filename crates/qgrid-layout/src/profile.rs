//! Size profiles.
//!
//! Smaller grids get larger cells. The profile is picked once from the grid
//! dimensions and is plain data afterwards.

use serde::Serialize;

/// Vertical gap between rows, shared by every profile.
pub const VERTICAL_SPACING: f64 = 8.0;

/// Pixel sizes used to place cells and wires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProfile {
    /// Width and height of one gate cell.
    pub gate_size: f64,
    /// Gap between columns. Obstructed wires detour through it.
    pub horizontal_spacing: f64,
    /// Qubit wire drawn before the first and after the last column.
    pub wire_extension: f64,
    /// Gap between rows.
    pub vertical_spacing: f64,
}

impl LayoutProfile {
    /// Six-column grids.
    pub const EXTRA_SMALL: Self = Self::new(32.0, 2.0, 2.0);
    /// Five-column grids.
    pub const SMALL: Self = Self::new(32.0, 8.0, 16.0);
    /// Up to four rows and four columns.
    pub const MEDIUM: Self = Self::new(48.0, 8.0, 16.0);
    /// Up to three rows and four columns.
    pub const LARGE: Self = Self::new(56.0, 8.0, 16.0);

    const fn new(gate_size: f64, horizontal_spacing: f64, wire_extension: f64) -> Self {
        Self {
            gate_size,
            horizontal_spacing,
            wire_extension,
            vertical_spacing: VERTICAL_SPACING,
        }
    }

    /// Pick the profile for a grid of the given size.
    pub fn for_grid(rows: usize, columns: usize) -> Self {
        if rows <= 3 && columns <= 4 {
            Self::LARGE
        } else if rows <= 4 && columns <= 4 {
            Self::MEDIUM
        } else if columns == 5 {
            Self::SMALL
        } else {
            Self::EXTRA_SMALL
        }
    }
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self::SMALL
    }
}
