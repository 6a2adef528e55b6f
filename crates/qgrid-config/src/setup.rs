//! The validated, canonical form of a configuration.

use serde::Serialize;
use std::ops::RangeInclusive;

use qgrid_ir::{GateKind, Grid};

use crate::config::{CircuitConfig, CircuitOutput, SolvableType};
use crate::error::ConfigResult;
use crate::validate;

/// Columns hidden behind an opaque block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlackBox {
    /// Hidden columns.
    pub columns: RangeInclusive<usize>,
    /// Text shown on the block.
    pub label: String,
}

impl BlackBox {
    /// Whether `column` is hidden.
    pub fn contains(&self, column: usize) -> bool {
        self.columns.contains(&column)
    }
}

/// Everything a session needs, with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitSetup {
    /// Grid the session starts from.
    pub starting_grid: Grid,
    /// Non-empty success grids, in configuration order.
    pub success_grids: Vec<Grid>,
    /// Gates offered in the palette.
    pub allowed_gates: Vec<GateKind>,
    /// Optional black box.
    pub black_box: Option<BlackBox>,
    /// Color name per row label; may be shorter than the grid.
    pub row_colors: Vec<String>,
    /// Read-outs to show.
    pub circuit_outputs: Vec<CircuitOutput>,
    /// Set for interactive puzzles.
    pub solvable: Option<SolvableType>,
}

impl CircuitSetup {
    /// Validate a configuration and build its canonical form.
    pub fn from_config(config: &CircuitConfig) -> ConfigResult<Self> {
        let checked = validate::check(config)?;

        // Sizes are within the caps once checked.
        let rows = config.rows as usize;
        let columns = config.columns as usize;

        let starting_grid = match checked.starting {
            Some(cells) => Grid::from_rows(cells)?,
            None => Grid::empty(rows, columns),
        };
        let success_grids = checked
            .success
            .into_iter()
            .map(Grid::from_rows)
            .collect::<Result<Vec<_>, _>>()?;

        let black_box = checked.black_box.map(|columns| BlackBox {
            columns,
            label: config
                .black_box_columns
                .as_ref()
                .map(|b| b.label.clone())
                .unwrap_or_default(),
        });

        Ok(Self {
            starting_grid,
            success_grids,
            allowed_gates: config
                .allowed_gates
                .clone()
                .unwrap_or_else(|| GateKind::PALETTE.to_vec()),
            black_box,
            row_colors: config.row_colors.clone().unwrap_or_default(),
            circuit_outputs: config.circuit_outputs.clone(),
            solvable: config.interactive_solvable_type,
        })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.starting_grid.num_rows()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.starting_grid.num_columns()
    }

    /// Whether the palette offers `gate`.
    pub fn is_allowed(&self, gate: GateKind) -> bool {
        self.allowed_gates.contains(&gate)
    }

    /// Whether `column` is hidden behind the black box.
    pub fn is_hidden(&self, column: usize) -> bool {
        self.black_box.as_ref().is_some_and(|b| b.contains(column))
    }

    /// Whether the read-out is enabled.
    pub fn shows(&self, output: CircuitOutput) -> bool {
        self.circuit_outputs.contains(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use qgrid_ir::{BinaryGate, Cell, UnaryGate};

    #[test]
    fn test_defaults() {
        let setup = CircuitSetup::from_config(&CircuitConfig::with_size(2, 3)).unwrap();
        assert_eq!(setup.starting_grid, Grid::empty(2, 3));
        assert!(setup.success_grids.is_empty());
        assert_eq!(setup.allowed_gates, GateKind::PALETTE.to_vec());
        assert_eq!(setup.black_box, None);
        assert!(setup.row_colors.is_empty());
        assert_eq!(setup.solvable, None);
    }

    #[test]
    fn test_canonical_grids() {
        let config = CircuitConfig::from_json_str(
            r#"{
                "rows": 2,
                "columns": 2,
                "startingGrid": [["H", "-"], ["-", "-"]],
                "successGrids": [
                    {"grid": []},
                    {"grid": [["H", ["CZ", 1]], ["-", "-"]]}
                ],
                "blackBoxColumns": {"start": 1, "end": 1, "label": "U"}
            }"#,
        )
        .unwrap();
        let setup = CircuitSetup::from_config(&config).unwrap();

        assert_eq!(setup.starting_grid.gate_at(0, 0), Cell::Unary(UnaryGate::H));
        assert_eq!(setup.success_grids.len(), 1);
        assert_eq!(
            setup.success_grids[0].gate_at(0, 1),
            Cell::control(BinaryGate::CZ, 1)
        );
        assert!(setup.is_hidden(1));
        assert!(!setup.is_hidden(0));
        assert_eq!(setup.black_box.unwrap().label, "U");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            CircuitSetup::from_config(&CircuitConfig::with_size(9, 1)),
            Err(ConfigurationError::RowsOutOfRange { rows: 9 })
        ));
    }
}
