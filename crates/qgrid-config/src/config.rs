//! The configuration payload.
//!
//! A configuration describes one circuit widget: its size, the grid it starts
//! from, the grids that count as solutions, which gates the palette offers and
//! an optional black box hiding a range of columns.
//!
//! Cells are written the way authors write them by hand:
//!
//! ```json
//! {
//!   "rows": 2,
//!   "columns": 3,
//!   "startingGrid": [["H", ["CX", 1], "-"], ["-", "-", "-"]]
//! }
//! ```
//!
//! Nothing here is trusted: sizes are signed so that out-of-range values reach
//! the validator, and cells are kept raw until [`crate::validate`] has looked
//! at them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

use qgrid_ir::GateKind;

use crate::error::{ConfigResult, ConfigurationError};

/// Largest supported number of rows.
pub const MAX_ROWS: i64 = 5;

/// Largest supported number of columns.
pub const MAX_COLUMNS: i64 = 6;

/// A cell exactly as written in the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    /// `"-"` or a gate name.
    Symbol(String),
    /// Anything written as an array; well-formed pairs look like `["CX", 2]`.
    Pair(Vec<serde_json::Value>),
    /// Any other value, such as a number, `null` or an object.
    Other(serde_json::Value),
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Symbol(s) => f.write_str(s),
            RawCell::Pair(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            RawCell::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Rows of raw cells.
pub type RawGrid = Vec<Vec<RawCell>>;

/// A grid that counts as a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessGrid {
    /// The target grid. Empty grids are ignored.
    #[serde(alias = "circuit")]
    pub grid: RawGrid,
}

/// Columns hidden behind an opaque, labelled block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackBoxColumns {
    /// First hidden column.
    pub start: i64,
    /// Last hidden column, inclusive.
    pub end: i64,
    /// Text shown on the block.
    #[serde(default)]
    pub label: String,
}

/// Read-outs shown next to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CircuitOutput {
    /// Draggable single-qubit state probe.
    BlochSphereProbe,
    /// Probability of measuring 1 on each row.
    PerQubitProbability,
    /// Sampled measurement histogram.
    Histogram,
    /// Amplitude table.
    CheatTable,
}

/// How an interactive puzzle decides it has been solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolvableType {
    /// The user presses a button to check the answer.
    Submittable,
    /// Every edit is checked.
    AutoCheck,
}

/// Top-level configuration payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitConfig {
    /// Number of qubit rows.
    pub rows: i64,

    /// Number of time-step columns.
    pub columns: i64,

    /// Gates offered in the palette. Defaults to every gate.
    #[serde(default)]
    pub allowed_gates: Option<Vec<GateKind>>,

    /// Grid the session starts from. Defaults to an empty grid.
    #[serde(default)]
    pub starting_grid: Option<RawGrid>,

    /// Grids that count as solutions.
    #[serde(default, alias = "successStates")]
    pub success_grids: Option<Vec<SuccessGrid>>,

    /// Columns hidden behind a black box.
    #[serde(default)]
    pub black_box_columns: Option<BlackBoxColumns>,

    /// Color name for each row label.
    #[serde(default)]
    pub row_colors: Option<Vec<String>>,

    /// Read-outs to show.
    #[serde(default)]
    pub circuit_outputs: Vec<CircuitOutput>,

    /// Set for interactive puzzles.
    #[serde(default)]
    pub interactive_solvable_type: Option<SolvableType>,
}

impl CircuitConfig {
    /// A configuration with only its size set.
    pub fn with_size(rows: i64, columns: i64) -> Self {
        Self {
            rows,
            columns,
            allowed_gates: None,
            starting_grid: None,
            success_grids: None,
            black_box_columns: None,
            row_colors: None,
            circuit_outputs: vec![],
            interactive_solvable_type: None,
        }
    }

    /// Parse a JSON payload.
    pub fn from_json_str(source: &str) -> ConfigResult<Self> {
        serde_json::from_str(source).map_err(|e| ConfigurationError::Syntax(e.to_string()))
    }

    /// Parse a YAML payload.
    pub fn from_yaml_str(source: &str) -> ConfigResult<Self> {
        serde_yaml_ng::from_str(source).map_err(|e| ConfigurationError::Syntax(e.to_string()))
    }

    /// Load a configuration file.
    ///
    /// `.yaml` and `.yml` files are read as YAML, everything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => {
                info!("Loading YAML configuration from {}", path.display());
                Self::from_yaml_str(&source)
            }
            _ => {
                info!("Loading JSON configuration from {}", path.display());
                Self::from_json_str(&source)
            }
        }
    }
}
