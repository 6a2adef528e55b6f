//! Grid coordinates to pixels.
//!
//! All coordinates are absolute within the drawing: x starts at the left end
//! of the qubit wires, y at the top edge of row 0.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::path::WireTrack;
use crate::profile::LayoutProfile;

/// Horizontal extent of the black-box block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlackBoxRect {
    /// Left edge.
    pub x: f64,
    /// Width.
    pub width: f64,
}

/// Coordinate functions for one size profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Geometry {
    profile: LayoutProfile,
}

impl Geometry {
    /// Geometry for the given profile.
    pub fn new(profile: LayoutProfile) -> Self {
        Self { profile }
    }

    /// Geometry with the profile picked for a grid of this size.
    pub fn for_grid(rows: usize, columns: usize) -> Self {
        Self::new(LayoutProfile::for_grid(rows, columns))
    }

    /// The profile in use.
    pub fn profile(&self) -> &LayoutProfile {
        &self.profile
    }

    /// Vertical center of a row.
    pub fn row_center(&self, row: usize) -> f64 {
        let p = &self.profile;
        p.gate_size / 2.0 + row as f64 * (p.gate_size + p.vertical_spacing)
    }

    /// Top edge of a row.
    pub fn row_top(&self, row: usize) -> f64 {
        self.row_center(row) - self.profile.gate_size / 2.0
    }

    /// Left edge of a column.
    pub fn column_left(&self, column: usize) -> f64 {
        let p = &self.profile;
        p.wire_extension + column as f64 * (p.gate_size + p.horizontal_spacing)
    }

    /// Horizontal center of a column.
    pub fn column_center(&self, column: usize) -> f64 {
        self.column_left(column) + self.profile.gate_size / 2.0
    }

    /// x of a gutter track in the gap to the right of a column.
    pub fn gutter_x(&self, column: usize, track: WireTrack) -> f64 {
        let p = &self.profile;
        self.column_left(column) + p.gate_size + track.fraction() * p.horizontal_spacing
    }

    /// Width of a drawing with `columns` columns, wire extensions included.
    pub fn total_width(&self, columns: usize) -> f64 {
        let p = &self.profile;
        2.0 * p.wire_extension + span(columns, p.gate_size, p.horizontal_spacing)
    }

    /// Height of a drawing with `rows` rows.
    pub fn total_height(&self, rows: usize) -> f64 {
        let p = &self.profile;
        span(rows, p.gate_size, p.vertical_spacing)
    }

    /// Block covering a range of columns.
    pub fn black_box_rect(&self, columns: &RangeInclusive<usize>) -> BlackBoxRect {
        let p = &self.profile;
        let count = columns.end().saturating_sub(*columns.start()) + 1;
        BlackBoxRect {
            x: self.column_left(*columns.start()),
            width: span(count, p.gate_size, p.horizontal_spacing),
        }
    }
}

/// Length of `n` cells with `gap` between neighbours.
fn span(n: usize, cell: f64, gap: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    n as f64 * cell + (n - 1) as f64 * gap
}
