//! Configuration loading, validation and editing sessions for circuit grids.
//!
//! A configuration is authored by hand (JSON or YAML) and describes one
//! circuit widget. This crate turns it into something safe to edit:
//!
//! 1. [`CircuitConfig`] parses the payload without trusting it
//! 2. [`validate`] checks it, reporting the first problem as a
//!    [`ConfigurationError`]
//! 3. [`CircuitSetup`] is the canonical form, with defaults applied
//! 4. [`Session`] holds the grid being edited and tracks puzzle progress
//!
//! # Example
//!
//! ```rust
//! use qgrid_config::{CircuitConfig, Session};
//! use qgrid_ir::{Cell, UnaryGate};
//!
//! let config = CircuitConfig::from_json_str(
//!     r#"{"rows": 2, "columns": 2, "startingGrid": [["H", ["CX", 1]], ["-", "-"]]}"#,
//! )?;
//! let mut session = Session::from_config(&config)?;
//!
//! session.add_gate(1, 0, Cell::Unary(UnaryGate::X)).unwrap();
//! assert!(!session.is_unchanged());
//! # Ok::<(), qgrid_config::ConfigurationError>(())
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod setup;
pub mod validate;

pub use config::{
    BlackBoxColumns, CircuitConfig, CircuitOutput, MAX_COLUMNS, MAX_ROWS, RawCell, RawGrid,
    SolvableType, SuccessGrid,
};
pub use error::{ConfigResult, ConfigurationError, EditError, RestoreRejection};
pub use session::{Session, SolveStatus};
pub use setup::{BlackBox, CircuitSetup};
pub use validate::validate;
