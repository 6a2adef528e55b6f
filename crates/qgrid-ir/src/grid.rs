//! The circuit grid.
//!
//! Rows are qubit lines (row 0 at the top) and columns are time-steps
//! (column 0 first). A [`Grid`] is a value: every mutation returns a new
//! snapshot and leaves the receiver untouched, so earlier snapshots can be
//! compared against later ones.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{IrError, IrResult};

/// A rows × columns matrix of cells.
///
/// Invariants for every [`Cell::Control`] at `(row, col)` targeting `r2`:
/// `r2` is in bounds and differs from `row`, `(r2, col)` is empty, and no
/// other control in `col` targets `r2`. [`Grid::add_gate`] and
/// [`Grid::remove_gate`] preserve them; [`Grid::from_rows`] checks them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn empty(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![Cell::Empty; columns]; rows],
        }
    }

    /// Build a grid from nested rows, checking shape and gate invariants.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> IrResult<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(IrError::EmptyGrid);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(IrError::RaggedRow {
                    row,
                    expected,
                    got: cells.len(),
                });
            }
        }

        let grid = Self { cells: rows };
        grid.check_binary_gates()?;
        Ok(grid)
    }

    fn check_binary_gates(&self) -> IrResult<()> {
        for column in 0..self.num_columns() {
            let mut targeted = vec![false; self.num_rows()];
            for row in 0..self.num_rows() {
                let Some(action_row) = self.cells[row][column].action_row() else {
                    continue;
                };
                if action_row >= self.num_rows() || action_row == row {
                    return Err(IrError::InvalidActionRow {
                        row,
                        column,
                        action_row,
                    });
                }
                if !self.cells[action_row][column].is_empty() {
                    return Err(IrError::ActionCellOccupied {
                        row,
                        column,
                        action_row,
                    });
                }
                if std::mem::replace(&mut targeted[action_row], true) {
                    return Err(IrError::DuplicateActionRow { column, action_row });
                }
            }
        }
        Ok(())
    }

    /// Number of qubit rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of time-step columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Get the cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn gate_at(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Borrow the rows of the grid.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Iterate over the cells of one column, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |row| row[column])
    }

    /// Find the control row whose gate targets `(row, column)`.
    pub fn controlling_row(&self, row: usize, column: usize) -> Option<usize> {
        self.column(column)
            .position(|cell| cell.action_row() == Some(row))
    }

    /// Check if `(row, column)` is the action end of some binary gate.
    #[inline]
    pub fn is_action_target(&self, row: usize, column: usize) -> bool {
        self.controlling_row(row, column).is_some()
    }

    /// Return a new grid with `gate` placed at `(row, column)`.
    ///
    /// Any control gate that targeted `(row, column)` is cleared first. When
    /// `gate` is a binary pair, a control gate targeting its action row is
    /// cleared too and the action cell is forced empty. Placing
    /// [`Cell::Empty`] is the same as [`Grid::remove_gate`].
    ///
    /// # Panics
    ///
    /// Panics if `(row, column)` or the action row is out of bounds.
    #[must_use]
    pub fn add_gate(&self, row: usize, column: usize, gate: Cell) -> Grid {
        let mut next = self.clone();
        match gate {
            Cell::Control { action_row, .. } => {
                debug_assert_ne!(row, action_row, "control gate cannot target its own row");
                next.clear_controller_of(row, column);
                next.clear_controller_of(action_row, column);
                next.cells[row][column] = gate;
                next.cells[action_row][column] = Cell::Empty;
            }
            _ => {
                next.cells[row][column] = gate;
                next.clear_controller_of(row, column);
            }
        }
        next
    }

    /// Return a new grid with `(row, column)` emptied, along with any control
    /// gate that targeted it.
    ///
    /// # Panics
    ///
    /// Panics if `(row, column)` is out of bounds.
    #[must_use]
    pub fn remove_gate(&self, row: usize, column: usize) -> Grid {
        let mut next = self.clone();
        next.cells[row][column] = Cell::Empty;
        next.clear_controller_of(row, column);
        next
    }

    fn clear_controller_of(&mut self, row: usize, column: usize) {
        for cells in &mut self.cells {
            if cells[column].action_row() == Some(row) {
                cells[column] = Cell::Empty;
            }
        }
    }

    /// Check if `row` takes part in a binary gate, as control or action, in
    /// any column from 0 up to and including `column`.
    ///
    /// A qubit that has never interacted can be read on its own.
    pub fn is_qubit_entangled_after_column(&self, row: usize, column: usize) -> bool {
        (0..=column).any(|c| {
            self.cells[row][c].is_binary_pair() || self.is_action_target(row, c)
        })
    }

    /// Count non-empty cells.
    pub fn num_gates(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = IrError;

    fn try_from(rows: Vec<Vec<Cell>>) -> IrResult<Self> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{BinaryGate, UnaryGate};

    fn h() -> Cell {
        Cell::Unary(UnaryGate::H)
    }

    fn cx(action_row: usize) -> Cell {
        Cell::control(BinaryGate::CX, action_row)
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty(3, 4);
        assert_eq!(grid.num_rows(), 3);
        assert_eq!(grid.num_columns(), 4);
        assert_eq!(grid.num_gates(), 0);
        assert!(grid.column(2).all(|c| c.is_empty()));
    }

    #[test]
    fn test_add_gate_returns_new_snapshot() {
        let start = Grid::empty(2, 2);
        let next = start.add_gate(0, 1, h());
        assert_eq!(start.gate_at(0, 1), Cell::Empty);
        assert_eq!(next.gate_at(0, 1), h());
        assert_ne!(start, next);
        assert_eq!(start, Grid::empty(2, 2));
    }

    #[test]
    fn test_add_binary_gate_clears_action_cell() {
        let grid = Grid::empty(3, 1).add_gate(2, 0, h());
        let grid = grid.add_gate(0, 0, cx(2));
        assert_eq!(grid.gate_at(0, 0), cx(2));
        assert_eq!(grid.gate_at(2, 0), Cell::Empty);
        assert_eq!(grid.controlling_row(2, 0), Some(0));
        assert!(grid.is_action_target(2, 0));
    }

    #[test]
    fn test_unary_on_action_cell_clears_control() {
        let grid = Grid::empty(3, 1).add_gate(0, 0, cx(1));
        let grid = grid.add_gate(1, 0, h());
        assert_eq!(grid.gate_at(0, 0), Cell::Empty);
        assert_eq!(grid.gate_at(1, 0), h());
    }

    #[test]
    fn test_binary_retarget_clears_previous_controller() {
        // Row 1 controls row 2; a new gate on row 0 also targets row 2.
        let grid = Grid::empty(3, 1).add_gate(1, 0, cx(2));
        let grid = grid.add_gate(0, 0, Cell::control(BinaryGate::CZ, 2));
        assert_eq!(grid.gate_at(1, 0), Cell::Empty);
        assert_eq!(grid.gate_at(0, 0), Cell::control(BinaryGate::CZ, 2));
        assert!(Grid::from_rows(grid.rows().to_vec()).is_ok());
    }

    #[test]
    fn test_binary_over_existing_control_on_action_row() {
        // Row 2 holds a control targeting row 3; it gets overwritten as an action cell.
        let grid = Grid::empty(4, 1).add_gate(2, 0, cx(3));
        let grid = grid.add_gate(0, 0, cx(2));
        assert_eq!(grid.gate_at(2, 0), Cell::Empty);
        assert_eq!(grid.gate_at(3, 0), Cell::Empty);
        assert_eq!(grid.num_gates(), 1);
    }

    #[test]
    fn test_remove_gate_clears_controller() {
        let grid = Grid::empty(2, 2).add_gate(1, 1, cx(0));
        let removed = grid.remove_gate(0, 1);
        assert_eq!(removed, Grid::empty(2, 2));
        assert_eq!(removed.remove_gate(0, 1), removed);
    }

    #[test]
    fn test_entanglement_scan() {
        let grid = Grid::empty(3, 3)
            .add_gate(0, 0, h())
            .add_gate(0, 1, cx(2));
        assert!(!grid.is_qubit_entangled_after_column(0, 0));
        assert!(grid.is_qubit_entangled_after_column(0, 1));
        assert!(grid.is_qubit_entangled_after_column(2, 1));
        assert!(grid.is_qubit_entangled_after_column(2, 2));
        assert!(!grid.is_qubit_entangled_after_column(1, 2));
    }

    #[test]
    fn test_from_rows_checks_invariants() {
        assert!(matches!(Grid::from_rows(vec![]), Err(IrError::EmptyGrid)));
        assert!(matches!(
            Grid::from_rows(vec![vec![Cell::Empty], vec![]]),
            Err(IrError::RaggedRow { row: 1, .. })
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![cx(5)], vec![Cell::Empty]]),
            Err(IrError::InvalidActionRow { action_row: 5, .. })
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![cx(0)], vec![Cell::Empty]]),
            Err(IrError::InvalidActionRow { action_row: 0, .. })
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![cx(1)], vec![h()]]),
            Err(IrError::ActionCellOccupied { .. })
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![cx(1)], vec![Cell::Empty], vec![cx(1)]]),
            Err(IrError::DuplicateActionRow { action_row: 1, .. })
        ));
    }

    #[test]
    fn test_grid_serde() {
        let grid = Grid::empty(2, 2).add_gate(0, 0, cx(1)).add_gate(1, 1, h());
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[[["CX",1],"-"],["-","H"]]"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        assert!(serde_json::from_str::<Grid>(r#"[[["CX",1]],["H"]]"#).is_err());
    }
}
