//! Lowering a grid to a simulator program, and the simulator contract.
//!
//! The state simulator is an external service. This module only fixes what
//! goes in (a column-ordered list of gate applications) and what comes back
//! (an amplitude and probability per computational basis state).

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::cell::Cell;
use crate::gate::GateKind;
use crate::grid::Grid;

/// Probabilities below this are treated as impossible outcomes.
pub const EPSILON: f64 = 1e-10;

/// One gate application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimOp {
    /// Time-step the gate belongs to.
    pub column: usize,
    /// The gate.
    pub gate: GateKind,
    /// The row the gate acts on (the action row for binary gates).
    pub target: usize,
    /// Control row, for binary gates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<usize>,
}

/// A column-ordered list of gate applications on a fixed number of qubits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Program {
    /// Number of qubits (grid rows).
    pub num_qubits: usize,
    /// Operations, column by column, top row first within a column.
    pub ops: Vec<SimOp>,
}

impl Program {
    /// Walk the grid and collect its gate applications.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut ops = Vec::with_capacity(grid.num_gates());
        for column in 0..grid.num_columns() {
            for (row, cell) in grid.column(column).enumerate() {
                match cell {
                    Cell::Empty => {}
                    Cell::Unary(gate) => ops.push(SimOp {
                        column,
                        gate: gate.into(),
                        target: row,
                        control: None,
                    }),
                    Cell::Control { gate, action_row } => ops.push(SimOp {
                        column,
                        gate: gate.into(),
                        target: action_row,
                        control: Some(row),
                    }),
                }
            }
        }
        debug!(
            "Lowered {}x{} grid to {} simulator ops",
            grid.num_rows(),
            grid.num_columns(),
            ops.len()
        );
        Self {
            num_qubits: grid.num_rows(),
            ops,
        }
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program applies no gates.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Amplitude and probability of one basis state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasisState {
    /// Complex amplitude.
    pub amplitude: Complex64,
    /// Probability in `[0, 1]`.
    pub probability: f64,
}

impl BasisState {
    /// Build from an amplitude, deriving the probability as `|a|²`.
    pub fn from_amplitude(amplitude: Complex64) -> Self {
        Self {
            amplitude,
            probability: amplitude.norm_sqr(),
        }
    }
}

/// Simulator output keyed by binary state string (e.g. `"01"`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateTable {
    states: BTreeMap<String, BasisState>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a dense amplitude vector, labelling index `i` with
    /// its `num_qubits`-wide binary form.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Self {
        let states = amplitudes
            .iter()
            .enumerate()
            .map(|(i, a)| (format!("{i:0num_qubits$b}"), BasisState::from_amplitude(*a)))
            .collect();
        Self { states }
    }

    /// Insert or replace one state.
    pub fn insert(&mut self, state: impl Into<String>, value: BasisState) {
        self.states.insert(state.into(), value);
    }

    /// Look up a state.
    pub fn get(&self, state: &str) -> Option<&BasisState> {
        self.states.get(state)
    }

    /// Iterate over states in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BasisState)> {
        self.states.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Drop states whose probability is below [`EPSILON`].
    #[must_use]
    pub fn possible(mut self) -> Self {
        self.states.retain(|_, s| s.probability >= EPSILON);
        self
    }
}

/// A quantum state simulator.
pub trait StateSimulator {
    /// Error raised by the simulator.
    type Error: std::error::Error;

    /// Run `program` from the all-zero state and report the final state.
    fn run(&self, program: &Program) -> Result<StateTable, Self::Error>;
}

/// What a single-qubit probe sees.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeReading {
    /// The qubit has interacted with another one; it has no state of its own.
    Entangled,
    /// One-qubit state table with entries `"0"` and `"1"`.
    Separable(StateTable),
}

/// Read the state of qubit `row` right after `column`.
///
/// When the qubit has not taken part in a binary gate up to `column`, its row
/// prefix `0..=column` is simulated on its own.
pub fn probe<S: StateSimulator>(
    row: usize,
    column: usize,
    grid: &Grid,
    simulator: &S,
) -> Result<ProbeReading, S::Error> {
    if grid.is_qubit_entangled_after_column(row, column) {
        return Ok(ProbeReading::Entangled);
    }

    let mut prefix = Grid::empty(1, column + 1);
    for (c, cell) in grid.rows()[row][..=column].iter().enumerate() {
        if let Cell::Unary(_) = cell {
            prefix = prefix.add_gate(0, c, *cell);
        }
    }
    let states = simulator.run(&Program::from_grid(&prefix))?;
    Ok(ProbeReading::Separable(states))
}
