//! Error types for the grid model.

use thiserror::Error;

/// Errors that can occur when building a grid from untrusted rows.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate name outside the vocabulary.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// A grid must have at least one row and one column.
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,

    /// Rows of different lengths.
    #[error("Row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },

    /// Binary gate pointing outside the grid or at its own row.
    #[error("Control gate at ({row}, {column}) targets invalid row {action_row}")]
    InvalidActionRow {
        /// Control row.
        row: usize,
        /// Column of the gate.
        column: usize,
        /// The row it targets.
        action_row: usize,
    },

    /// Binary gate whose action cell is not empty.
    #[error("Control gate at ({row}, {column}) targets row {action_row}, which is occupied")]
    ActionCellOccupied {
        /// Control row.
        row: usize,
        /// Column of the gate.
        column: usize,
        /// The row it targets.
        action_row: usize,
    },

    /// Two binary gates targeting the same cell.
    #[error("Row {action_row} in column {column} is targeted by more than one control gate")]
    DuplicateActionRow {
        /// Column of the gates.
        column: usize,
        /// The doubly targeted row.
        action_row: usize,
    },
}

/// Result type for grid operations.
pub type IrResult<T> = Result<T, IrError>;
