//! Configuration validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. row and column counts are within the supported caps
//! 2. the starting grid has the declared shape
//! 3. every non-empty success grid has the declared shape
//! 4. every starting grid cell is empty, a known unary gate, or a well-formed
//!    binary gate pair whose action cell is empty
//! 5. the black box column range lies inside the grid
//! 6. every non-empty success grid passes the cell checks of step 4
//!
//! Within one cell the pair-shape check comes before the gate-name check,
//! which comes before the action-row range check.

use std::ops::RangeInclusive;
use tracing::debug;

use qgrid_ir::{BinaryGate, Cell, UnaryGate};

use crate::config::{BlackBoxColumns, CircuitConfig, MAX_COLUMNS, MAX_ROWS, RawCell, RawGrid};
use crate::error::{ConfigResult, ConfigurationError};

/// Check a configuration without building anything from it.
pub fn validate(config: &CircuitConfig) -> ConfigResult<()> {
    check(config).map(|_| ())
}

/// Canonical cells extracted while validating.
#[derive(Debug)]
pub(crate) struct Checked {
    pub(crate) starting: Option<Vec<Vec<Cell>>>,
    pub(crate) success: Vec<Vec<Vec<Cell>>>,
    pub(crate) black_box: Option<RangeInclusive<usize>>,
}

pub(crate) fn check(config: &CircuitConfig) -> ConfigResult<Checked> {
    check_size(config)?;

    let starting = config
        .starting_grid
        .as_ref()
        .map(check_cells)
        .transpose()?;

    let black_box = config
        .black_box_columns
        .as_ref()
        .map(|black_box| check_black_box(black_box, config.columns))
        .transpose()?;

    let success = non_empty_success_grids(config)
        .enumerate()
        .map(|(i, grid)| {
            check_cells(grid).map_err(|e| ConfigurationError::InSuccessGrid {
                index: i + 1,
                source: Box::new(e),
            })
        })
        .collect::<ConfigResult<Vec<_>>>()?;

    debug!(
        "Configuration valid: {}x{} grid, {} success grid(s)",
        config.rows,
        config.columns,
        success.len()
    );

    Ok(Checked {
        starting,
        success,
        black_box,
    })
}

fn non_empty_success_grids(config: &CircuitConfig) -> impl Iterator<Item = &RawGrid> {
    config
        .success_grids
        .iter()
        .flatten()
        .map(|s| &s.grid)
        .filter(|grid| !grid.is_empty())
}

fn check_size(config: &CircuitConfig) -> ConfigResult<()> {
    let CircuitConfig { rows, columns, .. } = *config;

    if !(1..=MAX_ROWS).contains(&rows) {
        return Err(ConfigurationError::RowsOutOfRange { rows });
    }
    if !(1..=MAX_COLUMNS).contains(&columns) {
        return Err(ConfigurationError::ColumnsOutOfRange { columns });
    }

    if let Some(grid) = &config.starting_grid {
        if !matches_len(grid.len(), rows) {
            return Err(ConfigurationError::StartingGridRows {
                declared: rows,
                found: grid.len(),
            });
        }
        for (i, row) in grid.iter().enumerate() {
            if !matches_len(row.len(), columns) {
                return Err(ConfigurationError::StartingGridColumns {
                    declared: columns,
                    row: i + 1,
                    found: row.len(),
                });
            }
        }
    }

    for (index, grid) in non_empty_success_grids(config).enumerate() {
        if !matches_len(grid.len(), rows) {
            return Err(ConfigurationError::SuccessGridRows {
                index: index + 1,
                found: grid.len(),
                expected: rows,
            });
        }
        for (i, row) in grid.iter().enumerate() {
            if !matches_len(row.len(), columns) {
                return Err(ConfigurationError::SuccessGridColumns {
                    index: index + 1,
                    row: i + 1,
                    found: row.len(),
                    expected: columns,
                });
            }
        }
    }

    Ok(())
}

fn matches_len(len: usize, declared: i64) -> bool {
    i64::try_from(len).is_ok_and(|len| len == declared)
}

/// Check every cell of a correctly shaped grid, left to right and top to
/// bottom, against the grid as written.
fn check_cells(grid: &RawGrid) -> ConfigResult<Vec<Vec<Cell>>> {
    let num_columns = grid.first().map_or(0, Vec::len);
    // Control row that first targeted (row, column), indexed [column][row].
    let mut controllers: Vec<Vec<Option<usize>>> = vec![vec![None; grid.len()]; num_columns];

    let mut cells = Vec::with_capacity(grid.len());
    for (row, raw_row) in grid.iter().enumerate() {
        let mut cells_in_row = Vec::with_capacity(raw_row.len());
        for (column, raw) in raw_row.iter().enumerate() {
            let cell = check_cell(raw, column, grid)?;
            if let Cell::Control { action_row, .. } = cell {
                if let Some(first) = controllers[column][action_row] {
                    return Err(ConfigurationError::DuplicateActionRow {
                        column,
                        action_row,
                        first,
                        second: row,
                    });
                }
                controllers[column][action_row] = Some(row);
            }
            cells_in_row.push(cell);
        }
        cells.push(cells_in_row);
    }
    Ok(cells)
}

fn check_cell(raw: &RawCell, column: usize, grid: &RawGrid) -> ConfigResult<Cell> {
    match raw {
        RawCell::Symbol(s) if is_empty_symbol(s) => Ok(Cell::Empty),
        RawCell::Symbol(s) => s
            .parse::<UnaryGate>()
            .map(Cell::Unary)
            .map_err(|_| ConfigurationError::UnsupportedUnaryGate { gate: s.clone() }),
        RawCell::Pair(items) => {
            let [gate, action_row] = items.as_slice() else {
                return Err(ConfigurationError::MalformedBinaryGate {
                    found: raw.to_string(),
                });
            };

            let gate = gate
                .as_str()
                .and_then(|name| name.parse::<BinaryGate>().ok())
                .ok_or_else(|| ConfigurationError::UnsupportedBinaryGate {
                    found: raw.to_string(),
                })?;

            let row = row_index(action_row)
                .filter(|r| *r < grid.len())
                .ok_or_else(|| ConfigurationError::ActionRowOutOfRange {
                    gate: gate.name().to_string(),
                    action_row: action_row.to_string(),
                    last_row: grid.len().saturating_sub(1),
                })?;

            let target = &grid[row][column];
            if !matches!(target, RawCell::Symbol(s) if is_empty_symbol(s)) {
                return Err(ConfigurationError::ActionCellOccupied {
                    column,
                    action_row: row,
                    contents: target.to_string(),
                });
            }

            Ok(Cell::control(gate, row))
        }
        RawCell::Other(_) => Err(ConfigurationError::MalformedBinaryGate {
            found: raw.to_string(),
        }),
    }
}

/// Row index written as a non-negative integer, `2.0` included.
fn row_index(value: &serde_json::Value) -> Option<usize> {
    if let Some(row) = value.as_u64() {
        return usize::try_from(row).ok();
    }
    value
        .as_f64()
        .filter(|row| row.fract() == 0.0 && *row >= 0.0 && *row <= MAX_ROWS as f64)
        .map(|row| row as usize)
}

fn is_empty_symbol(s: &str) -> bool {
    s == qgrid_ir::EMPTY_SYMBOL
}

fn check_black_box(black_box: &BlackBoxColumns, columns: i64) -> ConfigResult<RangeInclusive<usize>> {
    let BlackBoxColumns { start, end, .. } = *black_box;
    let last_column = columns - 1;

    if !(0..columns).contains(&start) {
        return Err(ConfigurationError::BlackBoxStartOutOfRange { start, last_column });
    }
    if !(0..columns).contains(&end) {
        return Err(ConfigurationError::BlackBoxEndOutOfRange { end, last_column });
    }
    if end < start {
        return Err(ConfigurationError::BlackBoxReversed { start, end });
    }

    // Both bounds are in [0, MAX_COLUMNS) here.
    Ok(start as usize..=end as usize)
}
