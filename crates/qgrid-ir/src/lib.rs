//! Circuit grid model for editable quantum circuit diagrams.
//!
//! A circuit is drawn as a grid: qubits are rows, time-steps are columns and
//! every cell holds at most one gate. This crate owns that grid and the rules
//! for changing it. It is the foundation for configuration validation
//! (`qgrid-config`) and wire routing (`qgrid-layout`).
//!
//! # Core Components
//!
//! - **Gates**: [`UnaryGate`], [`BinaryGate`] and the [`GateKind`] vocabulary
//! - **Cells**: [`Cell`], a tagged value that is empty, a unary gate, or the
//!   control end of a binary gate
//! - **Grid**: [`Grid`], an immutable snapshot with copy-on-write mutation
//! - **Renderable view**: [`RenderGrid`], with both ends of each binary gate
//! - **Simulation contract**: [`Program`], [`StateSimulator`], [`probe`]
//!
//! # Example: Placing a CNOT
//!
//! ```rust
//! use qgrid_ir::{BinaryGate, Cell, Grid, UnaryGate};
//!
//! let start = Grid::empty(3, 4);
//! let grid = start
//!     .add_gate(0, 0, Cell::Unary(UnaryGate::H))
//!     .add_gate(0, 1, Cell::control(BinaryGate::CX, 2));
//!
//! // The action cell stays empty in the canonical grid.
//! assert_eq!(grid.gate_at(2, 1), Cell::Empty);
//! assert!(grid.is_action_target(2, 1));
//!
//! // Earlier snapshots are unaffected.
//! assert_eq!(start, Grid::empty(3, 4));
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `T` | 1 | Phase gates |
//! | `R8` | 1 | Eighth-turn phase gate |
//! | `XH` | 1 | X then H |
//! | `CX` | 2 | Controlled-NOT (CNOT) |
//! | `CZ` | 2 | Controlled-Z |

pub mod cell;
pub mod error;
pub mod gate;
pub mod grid;
pub mod program;
pub mod render;

pub use cell::{Cell, EMPTY_SYMBOL};
pub use error::{IrError, IrResult};
pub use gate::{BinaryGate, GateKind, UnaryGate};
pub use grid::Grid;
pub use program::{
    BasisState, EPSILON, Program, ProbeReading, SimOp, StateSimulator, StateTable, probe,
};
pub use render::{RenderCell, RenderGrid};
