//! Editing sessions.
//!
//! A [`Session`] holds the grid a user is editing. Every edit replaces the
//! current snapshot with a new one, so earlier snapshots handed out by
//! [`Session::grid`] stay valid for as long as the caller keeps them.

use serde::Serialize;
use tracing::{debug, info};

use qgrid_ir::{Cell, Grid};

use crate::config::{CircuitConfig, SolvableType};
use crate::error::{ConfigResult, ConfigurationError, EditError, RestoreRejection};
use crate::setup::CircuitSetup;

/// Progress of an interactive puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// Not solved yet.
    #[default]
    Unsolved,
    /// A success grid was reached.
    Solved,
    /// The last submitted answer was wrong.
    GuessedWrong,
}

impl SolveStatus {
    /// Caption shown next to the puzzle.
    pub fn caption(self) -> &'static str {
        match self {
            SolveStatus::Unsolved => "Drag gates onto the circuit",
            SolveStatus::Solved => "🎊 You got it!",
            SolveStatus::GuessedWrong => "🤔 Try that again.",
        }
    }
}

/// A circuit being edited.
#[derive(Debug, Clone)]
pub struct Session {
    setup: CircuitSetup,
    grid: Grid,
    status: SolveStatus,
}

impl Session {
    /// Start a session on the setup's starting grid.
    ///
    /// Interactive setups need at least one success grid.
    pub fn new(setup: CircuitSetup) -> ConfigResult<Self> {
        if setup.solvable.is_some() && setup.success_grids.is_empty() {
            return Err(ConfigurationError::MissingSuccessGrids);
        }
        Ok(Self {
            grid: setup.starting_grid.clone(),
            setup,
            status: SolveStatus::Unsolved,
        })
    }

    /// Validate a configuration and start a session from it.
    pub fn from_config(config: &CircuitConfig) -> ConfigResult<Self> {
        Self::new(CircuitSetup::from_config(config)?)
    }

    /// Carry over a puzzle solved in an earlier visit.
    #[must_use]
    pub fn with_solved(mut self, solved: bool) -> Self {
        if solved {
            self.status = SolveStatus::Solved;
        }
        self
    }

    /// The setup this session was started from.
    pub fn setup(&self) -> &CircuitSetup {
        &self.setup
    }

    /// The current snapshot.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Puzzle progress.
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// Place a gate.
    ///
    /// Refuses cells outside the grid or inside the black box, gates the
    /// palette does not offer, and binary gates targeting their own row or a
    /// row outside the grid.
    pub fn add_gate(&mut self, row: usize, column: usize, gate: Cell) -> Result<&Grid, EditError> {
        self.check_editable(row, column)?;
        if let Some(kind) = gate.gate_kind() {
            if !self.setup.is_allowed(kind) {
                return Err(EditError::GateNotAllowed(kind));
            }
        }
        if let Cell::Control { gate: binary, action_row } = gate {
            if action_row == row || action_row >= self.grid.num_rows() {
                return Err(EditError::InvalidActionRow {
                    gate: binary.into(),
                    row,
                    action_row,
                });
            }
        }

        let next = self.grid.add_gate(row, column, gate);
        self.commit(next);
        Ok(&self.grid)
    }

    /// Clear a cell and any binary gate targeting it.
    pub fn remove_gate(&mut self, row: usize, column: usize) -> Result<&Grid, EditError> {
        self.check_editable(row, column)?;
        let next = self.grid.remove_gate(row, column);
        self.commit(next);
        Ok(&self.grid)
    }

    /// Go back to the starting grid.
    pub fn reset(&mut self) -> &Grid {
        let next = self.setup.starting_grid.clone();
        self.commit(next);
        &self.grid
    }

    /// Whether the grid equals the starting grid.
    pub fn is_unchanged(&self) -> bool {
        self.grid == self.setup.starting_grid
    }

    /// Whether the grid equals any success grid.
    pub fn is_solved(&self) -> bool {
        self.setup.success_grids.iter().any(|g| *g == self.grid)
    }

    /// Submit the current grid.
    ///
    /// Only submittable puzzles record the outcome. Other sessions report
    /// their status unchanged.
    pub fn check_answer(&mut self) -> SolveStatus {
        if self.setup.solvable == Some(SolvableType::Submittable) {
            self.status = if self.is_solved() {
                SolveStatus::Solved
            } else {
                SolveStatus::GuessedWrong
            };
            info!("Answer checked: {:?}", self.status);
        }
        self.status
    }

    /// Replace the grid with one saved earlier.
    ///
    /// The saved grid must have the starting grid's shape and use only
    /// allowed gates. On rejection the current grid is kept.
    pub fn restore(&mut self, saved: Grid) -> Result<(), RestoreRejection> {
        let (rows, columns) = (self.setup.num_rows(), self.setup.num_columns());
        if saved.num_rows() != rows || saved.num_columns() != columns {
            return Err(RestoreRejection::ShapeMismatch {
                rows,
                columns,
                found_rows: saved.num_rows(),
                found_columns: saved.num_columns(),
            });
        }

        for (row, cells) in saved.rows().iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                if let Some(gate) = cell.gate_kind() {
                    if !self.setup.is_allowed(gate) {
                        return Err(RestoreRejection::GateNotAllowed { gate, row, column });
                    }
                }
            }
        }

        debug!("Restored saved grid with {} gates", saved.num_gates());
        self.grid = saved;
        Ok(())
    }

    fn check_editable(&self, row: usize, column: usize) -> Result<(), EditError> {
        let (rows, columns) = (self.grid.num_rows(), self.grid.num_columns());
        if row >= rows || column >= columns {
            return Err(EditError::OutOfBounds {
                row,
                column,
                rows,
                columns,
            });
        }
        if self.setup.is_hidden(column) {
            return Err(EditError::InBlackBox(column));
        }
        Ok(())
    }

    fn commit(&mut self, next: Grid) {
        if next == self.grid {
            return;
        }
        self.grid = next;
        debug!("Grid now holds {} gates", self.grid.num_gates());

        if self.setup.solvable == Some(SolvableType::AutoCheck) && self.is_solved() {
            info!("Auto-check: circuit solved");
            self.status = SolveStatus::Solved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qgrid_ir::{BinaryGate, GateKind, UnaryGate};

    fn puzzle(solvable: &str) -> CircuitConfig {
        CircuitConfig::from_json_str(&format!(
            r#"{{
                "rows": 2,
                "columns": 3,
                "allowedGates": ["H", "X", "CX"],
                "successGrids": [{{"grid": [["H", ["CX", 1], "-"], ["-", "-", "-"]]}}],
                "blackBoxColumns": {{"start": 2, "end": 2}},
                "interactiveSolvableType": "{solvable}"
            }}"#
        ))
        .unwrap()
    }

    fn solve(session: &mut Session) {
        session.add_gate(0, 0, UnaryGate::H.into()).unwrap();
        session
            .add_gate(0, 1, Cell::control(BinaryGate::CX, 1))
            .unwrap();
    }

    #[test]
    fn test_interactive_requires_success_grids() {
        let mut config = puzzle("submittable");
        config.success_grids = Some(vec![]);
        assert!(matches!(
            Session::from_config(&config),
            Err(ConfigurationError::MissingSuccessGrids)
        ));

        config.interactive_solvable_type = None;
        assert!(Session::from_config(&config).is_ok());
    }

    #[test]
    fn test_edits_and_reset() {
        let mut session = Session::from_config(&puzzle("submittable")).unwrap();
        assert!(session.is_unchanged());

        let before = session.grid().clone();
        session.add_gate(1, 0, UnaryGate::X.into()).unwrap();
        assert!(!session.is_unchanged());
        assert_eq!(before, Grid::empty(2, 3));

        session.remove_gate(1, 0).unwrap();
        assert!(session.is_unchanged());

        session.add_gate(1, 1, UnaryGate::H.into()).unwrap();
        session.reset();
        assert!(session.is_unchanged());
    }

    #[test]
    fn test_refused_edits_leave_grid_alone() {
        let mut session = Session::from_config(&puzzle("submittable")).unwrap();

        assert_eq!(
            session.add_gate(0, 0, UnaryGate::T.into()),
            Err(EditError::GateNotAllowed(GateKind::Unary(UnaryGate::T)))
        );
        assert_eq!(
            session.add_gate(0, 2, UnaryGate::H.into()),
            Err(EditError::InBlackBox(2))
        );
        assert_eq!(session.remove_gate(1, 2), Err(EditError::InBlackBox(2)));
        assert!(matches!(
            session.add_gate(2, 0, UnaryGate::H.into()),
            Err(EditError::OutOfBounds { .. })
        ));
        assert!(matches!(
            session.add_gate(1, 0, Cell::control(BinaryGate::CX, 1)),
            Err(EditError::InvalidActionRow { action_row: 1, .. })
        ));
        assert!(session.is_unchanged());
    }

    #[test]
    fn test_submittable_check_answer() {
        let mut session = Session::from_config(&puzzle("submittable")).unwrap();
        session.add_gate(0, 0, UnaryGate::X.into()).unwrap();
        assert_eq!(session.check_answer(), SolveStatus::GuessedWrong);
        assert_eq!(session.status().caption(), "🤔 Try that again.");

        solve(&mut session);
        // Submittable puzzles wait for a check.
        assert_eq!(session.status(), SolveStatus::GuessedWrong);
        assert!(session.is_solved());
        assert_eq!(session.check_answer(), SolveStatus::Solved);
    }

    #[test]
    fn test_auto_check_marks_solved_on_edit() {
        let mut session = Session::from_config(&puzzle("auto-check")).unwrap();
        solve(&mut session);
        assert_eq!(session.status(), SolveStatus::Solved);

        // Stays solved after moving away.
        session.reset();
        assert_eq!(session.status(), SolveStatus::Solved);
        assert_eq!(session.check_answer(), SolveStatus::Solved);
    }

    #[test]
    fn test_with_solved() {
        let session = Session::from_config(&puzzle("auto-check"))
            .unwrap()
            .with_solved(true);
        assert_eq!(session.status(), SolveStatus::Solved);
    }

    #[test]
    fn test_restore() {
        let mut session = Session::from_config(&puzzle("submittable")).unwrap();

        let saved = Grid::empty(2, 3).add_gate(1, 1, UnaryGate::X.into());
        session.restore(saved.clone()).unwrap();
        assert_eq!(session.grid(), &saved);

        assert!(matches!(
            session.restore(Grid::empty(3, 3)),
            Err(RestoreRejection::ShapeMismatch { found_rows: 3, .. })
        ));
        let forbidden = Grid::empty(2, 3).add_gate(0, 0, Cell::control(BinaryGate::CZ, 1));
        assert_eq!(
            session.restore(forbidden),
            Err(RestoreRejection::GateNotAllowed {
                gate: GateKind::Binary(BinaryGate::CZ),
                row: 0,
                column: 0
            })
        );
        assert_eq!(session.grid(), &saved);
    }
}
