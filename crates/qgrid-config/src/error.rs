//! Configuration and session errors.
//!
//! Every configuration message names the constraint that failed and the value that broke
//! it. Messages are shown to the author of the configuration as they are.

use std::path::PathBuf;

use thiserror::Error;

use qgrid_ir::GateKind;

use crate::config::{MAX_COLUMNS, MAX_ROWS};

/// A configuration that cannot start a session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// Configuration file could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        /// The file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration text is not a valid payload.
    #[error("Failed to parse configuration: {0}")]
    Syntax(String),

    /// Row count outside `[1, MAX_ROWS]`.
    #[error(
        "You must have between 1 and {max} rows. Your configuration has {rows}.",
        max = MAX_ROWS
    )]
    RowsOutOfRange {
        /// Declared row count.
        rows: i64,
    },

    /// Column count outside `[1, MAX_COLUMNS]`.
    #[error(
        "You must have between 1 and {max} columns. Your configuration has {columns}.",
        max = MAX_COLUMNS
    )]
    ColumnsOutOfRange {
        /// Declared column count.
        columns: i64,
    },

    /// Starting grid has the wrong number of rows.
    #[error(
        "You've said in your configuration that you have {declared} rows, but your startingGrid shows {found} rows"
    )]
    StartingGridRows {
        /// Declared row count.
        declared: i64,
        /// Rows in the starting grid.
        found: usize,
    },

    /// A starting grid row has the wrong number of columns.
    #[error(
        "You've said in your configuration that you have {declared} columns, but in your startingGrid in row #{row}, we have a row with {found} columns"
    )]
    StartingGridColumns {
        /// Declared column count.
        declared: i64,
        /// One-based row number.
        row: usize,
        /// Cells in that row.
        found: usize,
    },

    /// A success grid has the wrong number of rows.
    #[error("Success state {index} has {found} rows, but {expected} rows were expected.")]
    SuccessGridRows {
        /// One-based index among non-empty success grids.
        index: usize,
        /// Rows in the success grid.
        found: usize,
        /// Declared row count.
        expected: i64,
    },

    /// A success grid row has the wrong number of columns.
    #[error(
        "Success state {index}, row {row} has {found} columns, but {expected} columns were expected."
    )]
    SuccessGridColumns {
        /// One-based index among non-empty success grids.
        index: usize,
        /// One-based row number.
        row: usize,
        /// Cells in that row.
        found: usize,
        /// Declared column count.
        expected: i64,
    },

    /// A cell names a gate outside the unary vocabulary.
    #[error(
        "Your circuit includes a unary gate of type {gate}. We don't support that! Valid unary gates are: H,X,Y,Z,S,T,R8,XH."
    )]
    UnsupportedUnaryGate {
        /// The name found.
        gate: String,
    },

    /// A binary gate pair that is not a two-element array.
    #[error(
        "Your circuit includes a malformed binary gate. It looks like {found}. We expect binary gates to be in the form [gateType, actionRow]. Example: [\"CX\", 2]"
    )]
    MalformedBinaryGate {
        /// The pair as written.
        found: String,
    },

    /// A binary gate pair whose gate is not a binary gate.
    #[error(
        "Your circuit includes a binary gate that looks like {found}. We don't support that type of gate! Valid binary gates are: CX,CZ."
    )]
    UnsupportedBinaryGate {
        /// The pair as written.
        found: String,
    },

    /// A binary gate pair pointing outside the grid.
    #[error(
        "Your control gate of type {gate} is trying to connect to wire {action_row}, which doesn't exist. The rows are 0-indexed, so the top row is 0 and the last row (in this case) is {last_row}"
    )]
    ActionRowOutOfRange {
        /// Gate name.
        gate: String,
        /// The action row as written.
        action_row: String,
        /// Index of the bottom row.
        last_row: usize,
    },

    /// A binary gate pair whose action cell is not empty.
    #[error(
        "Your control gate in column #{column} is targeting row #{action_row}. This cell needs to be empty. It currently contains a {contents}."
    )]
    ActionCellOccupied {
        /// Zero-based column.
        column: usize,
        /// Targeted row.
        action_row: usize,
        /// What the action cell holds.
        contents: String,
    },

    /// Two binary gate pairs in one column targeting the same row.
    #[error(
        "Your control gates in rows #{first} and #{second} of column #{column} both target row #{action_row}. Each row can be the target of only one control gate."
    )]
    DuplicateActionRow {
        /// Zero-based column.
        column: usize,
        /// Targeted row.
        action_row: usize,
        /// Row of the first control gate.
        first: usize,
        /// Row of the second control gate.
        second: usize,
    },

    /// Black box starts outside the grid.
    #[error(
        "The start column for your black box must fall between 0 and {last_column}. Currently, it starts at column {start}"
    )]
    BlackBoxStartOutOfRange {
        /// Configured start column.
        start: i64,
        /// Index of the last column.
        last_column: i64,
    },

    /// Black box ends outside the grid.
    #[error(
        "The end column for your black box must fall between 0 and {last_column}. Currently, it ends at column {end}"
    )]
    BlackBoxEndOutOfRange {
        /// Configured end column.
        end: i64,
        /// Index of the last column.
        last_column: i64,
    },

    /// Black box ends before it starts.
    #[error(
        "The end column for your black box must be greater than or equal to the start column. Currently, the start column is {start}, while the end column is earlier, at {end}."
    )]
    BlackBoxReversed {
        /// Configured start column.
        start: i64,
        /// Configured end column.
        end: i64,
    },

    /// A cell-level problem inside a success grid.
    #[error("Success state {index}: {source}")]
    InSuccessGrid {
        /// One-based index among non-empty success grids.
        index: usize,
        /// The cell-level error.
        source: Box<ConfigurationError>,
    },

    /// Interactive puzzles need something to compare against.
    #[error("One or more success states are required for interactive Quantum Circuit solvables")]
    MissingSuccessGrids,

    /// Grid rejected by the grid model.
    #[error("Invalid grid: {0}")]
    Grid(#[from] qgrid_ir::IrError),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// An edit the session refused. The grid is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EditError {
    /// Cell outside the grid.
    #[error("Cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        columns: usize,
    },

    /// Gate not offered by the palette.
    #[error("Gate {0} is not allowed in this circuit")]
    GateNotAllowed(GateKind),

    /// Column hidden behind the black box.
    #[error("Column {0} is inside the black box and cannot be edited")]
    InBlackBox(usize),

    /// Binary gate whose action row is its own row or outside the grid.
    #[error("A {gate} gate on row {row} cannot target row {action_row}")]
    InvalidActionRow {
        /// The gate.
        gate: GateKind,
        /// Control row.
        row: usize,
        /// Requested action row.
        action_row: usize,
    },
}

/// Why a saved grid was not restored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RestoreRejection {
    /// Saved grid has a different shape than the starting grid.
    #[error("Saved grid is {found_rows}x{found_columns}, but the circuit is {rows}x{columns}")]
    ShapeMismatch {
        /// Circuit rows.
        rows: usize,
        /// Circuit columns.
        columns: usize,
        /// Saved rows.
        found_rows: usize,
        /// Saved columns.
        found_columns: usize,
    },

    /// Saved grid uses a gate the palette no longer offers.
    #[error("Saved grid uses gate {gate} at ({row}, {column}), which is not allowed")]
    GateNotAllowed {
        /// The gate.
        gate: GateKind,
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        column: usize,
    },
}
