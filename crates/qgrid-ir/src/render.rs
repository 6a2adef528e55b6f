//! Renderable view of a grid.
//!
//! The canonical grid stores a binary gate once, on its control row. Drawing
//! needs both ends, so this view splits every pair into a control marker and
//! an action marker.

use serde::Serialize;
use std::ops::RangeInclusive;

use crate::cell::Cell;
use crate::gate::{BinaryGate, UnaryGate};
use crate::grid::Grid;

/// A drawable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "gate", rename_all = "snake_case")]
pub enum RenderCell {
    /// Nothing to draw but the qubit wire.
    Empty,
    /// A single-qubit gate box.
    Unary(UnaryGate),
    /// Control dot of a binary gate.
    Control(BinaryGate),
    /// Target symbol of a binary gate.
    Action(BinaryGate),
}

/// Grid of drawable cells, derived from a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderGrid {
    cells: Vec<Vec<RenderCell>>,
}

impl RenderGrid {
    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Get the drawable cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> RenderCell {
        self.cells[row][column]
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[Vec<RenderCell>] {
        &self.cells
    }

    /// Blank out the columns hidden behind a black box.
    #[must_use]
    pub fn masked(mut self, black_box: &RangeInclusive<usize>) -> Self {
        for row in &mut self.cells {
            for (column, cell) in row.iter_mut().enumerate() {
                if black_box.contains(&column) {
                    *cell = RenderCell::Empty;
                }
            }
        }
        self
    }
}

impl Grid {
    /// Split binary pairs into control and action markers.
    pub fn renderable(&self) -> RenderGrid {
        let mut cells: Vec<Vec<RenderCell>> = self
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => RenderCell::Empty,
                        Cell::Unary(g) => RenderCell::Unary(*g),
                        Cell::Control { gate, .. } => RenderCell::Control(*gate),
                    })
                    .collect()
            })
            .collect();

        for (row, cells_in_row) in self.rows().iter().enumerate() {
            for (column, cell) in cells_in_row.iter().enumerate() {
                if let Cell::Control { gate, action_row } = cell {
                    debug_assert!(*action_row != row);
                    cells[*action_row][column] = RenderCell::Action(*gate);
                }
            }
        }

        RenderGrid { cells }
    }
}
