//! Grid cells.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::{BinaryGate, GateKind, UnaryGate};

/// Wire symbol for an empty cell.
pub const EMPTY_SYMBOL: &str = "-";

/// Contents of one grid cell.
///
/// A binary gate lives only on its control row. The action row's cell stays
/// [`Cell::Empty`] in the canonical grid; see [`crate::RenderGrid`] for the
/// view that shows both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No gate.
    #[default]
    Empty,
    /// A single-qubit gate.
    Unary(UnaryGate),
    /// The control end of a binary gate, pointing at its action row.
    Control {
        /// The controlled operation.
        gate: BinaryGate,
        /// Row holding the action end, in the same column.
        action_row: usize,
    },
}

impl Cell {
    /// Create the control cell of a binary gate.
    pub fn control(gate: BinaryGate, action_row: usize) -> Self {
        Cell::Control { gate, action_row }
    }

    /// Check if the cell holds no gate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if the cell is the control end of a binary gate pair.
    #[inline]
    pub fn is_binary_pair(&self) -> bool {
        matches!(self, Cell::Control { .. })
    }

    /// The row targeted by this cell, if it is a control.
    #[inline]
    pub fn action_row(&self) -> Option<usize> {
        match self {
            Cell::Control { action_row, .. } => Some(*action_row),
            _ => None,
        }
    }

    /// The gate held by this cell.
    pub fn gate_kind(&self) -> Option<GateKind> {
        match self {
            Cell::Empty => None,
            Cell::Unary(g) => Some(GateKind::Unary(*g)),
            Cell::Control { gate, .. } => Some(GateKind::Binary(*gate)),
        }
    }
}

impl From<UnaryGate> for Cell {
    fn from(gate: UnaryGate) -> Self {
        Cell::Unary(gate)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str(EMPTY_SYMBOL),
            Cell::Unary(g) => f.write_str(g.name()),
            Cell::Control { gate, action_row } => write!(f, "[{}, {action_row}]", gate.name()),
        }
    }
}

/// On-the-wire form: `"-"`, `"H"`, or `["CX", 2]`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CellRepr {
    Symbol(String),
    Pair(BinaryGate, usize),
}

impl Serialize for Cell {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self {
            Cell::Empty => CellRepr::Symbol(EMPTY_SYMBOL.to_string()),
            Cell::Unary(g) => CellRepr::Symbol(g.name().to_string()),
            Cell::Control { gate, action_row } => CellRepr::Pair(*gate, *action_row),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CellRepr::deserialize(deserializer)? {
            CellRepr::Symbol(s) if s == EMPTY_SYMBOL => Ok(Cell::Empty),
            CellRepr::Symbol(s) => s
                .parse::<UnaryGate>()
                .map(Cell::Unary)
                .map_err(serde::de::Error::custom),
            CellRepr::Pair(gate, action_row) => Ok(Cell::Control { gate, action_row }),
        }
    }
}
