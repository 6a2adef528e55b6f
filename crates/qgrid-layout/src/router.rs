//! Control-wire routing.
//!
//! Every binary gate draws a wire between its control row and its action
//! row. When a cell between them is occupied the straight wire would run
//! through it, so the wire detours through the gap right of the column
//! instead. Routing works column by column:
//!
//! 1. collect the span of every binary gate in the column
//! 2. mark a span obstructed if a row strictly inside it holds a gate or is
//!    the action row of another gate
//! 3. give each obstructed span a gutter lane and jog lanes so that no two
//!    detours touch
//! 4. build straight or jogged paths
//!
//! A column holds at most two binary gates on a five-row grid, so at most two
//! detours ever share a gutter. Larger grids would need general interval
//! scheduling in [`assign_tracks`].

use rustc_hash::FxHashSet;
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::{debug, instrument, warn};

use qgrid_ir::{Cell, Grid};

use crate::geometry::Geometry;
use crate::path::{JogTracks, JoggedPath, StraightPath, WirePath, WireTrack};

/// The rows a control wire connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlSpan {
    /// Column of the gate.
    pub column: usize,
    /// Upper end.
    pub from_row: usize,
    /// Lower end.
    pub to_row: usize,
}

impl ControlSpan {
    /// Span between a control row and its action row.
    pub fn new(column: usize, control_row: usize, action_row: usize) -> Self {
        Self {
            column,
            from_row: control_row.min(action_row),
            to_row: control_row.max(action_row),
        }
    }

    /// Rows strictly between the two ends.
    pub fn interior(&self) -> std::ops::Range<usize> {
        self.from_row + 1..self.to_row
    }
}

/// Spans of every binary gate in a column, in control-row order.
pub fn discover_spans(grid: &Grid, column: usize) -> Vec<ControlSpan> {
    grid.column(column)
        .enumerate()
        .filter_map(|(row, cell)| match cell {
            Cell::Control { action_row, .. } => Some(ControlSpan::new(column, row, action_row)),
            _ => None,
        })
        .collect()
}

/// Check if a straight wire for `span` would cross an occupied row.
pub fn is_obstructed(span: &ControlSpan, grid: &Grid) -> bool {
    obstructed_by(span, grid, &action_rows(grid, span.column))
}

/// Check if any wire in the column needs a detour.
pub fn column_has_jogged_wires(column: usize, grid: &Grid) -> bool {
    let targets = action_rows(grid, column);
    discover_spans(grid, column)
        .iter()
        .any(|span| obstructed_by(span, grid, &targets))
}

fn action_rows(grid: &Grid, column: usize) -> FxHashSet<usize> {
    grid.column(column).filter_map(|cell| cell.action_row()).collect()
}

fn obstructed_by(span: &ControlSpan, grid: &Grid, targets: &FxHashSet<usize>) -> bool {
    span.interior()
        .any(|row| !grid.gate_at(row, span.column).is_empty() || targets.contains(&row))
}

/// Assign lanes to the obstructed spans of one column.
///
/// `spans` must be sorted by `from_row`. Returns one [`JogTracks`] per span,
/// in the same order.
///
/// - one span uses the middle lane everywhere
/// - two spans split the gutter, the upper one taking the outside lane; when
///   the upper span's lower end meets or sits one row below the lower span's
///   upper end their jogs would collide, so the upper span comes back in on
///   the outside lane and the lower span leaves on the inside lane
/// - more than two spans cannot occur on supported grid sizes; they all get
///   the middle lane
pub fn assign_tracks(spans: &[ControlSpan]) -> Vec<JogTracks> {
    match spans {
        [first, second] => {
            if jogs_collide(first, second) {
                vec![
                    JogTracks {
                        gutter: WireTrack::Outside,
                        jog_start: WireTrack::Middle,
                        jog_end: WireTrack::Outside,
                    },
                    JogTracks {
                        gutter: WireTrack::Inside,
                        jog_start: WireTrack::Inside,
                        jog_end: WireTrack::Middle,
                    },
                ]
            } else {
                vec![
                    JogTracks {
                        gutter: WireTrack::Outside,
                        ..JogTracks::MIDDLE
                    },
                    JogTracks {
                        gutter: WireTrack::Inside,
                        ..JogTracks::MIDDLE
                    },
                ]
            }
        }
        _ => {
            if spans.len() > 2 {
                warn!(
                    "{} obstructed wires share column {}; lanes will overlap",
                    spans.len(),
                    spans[0].column
                );
            }
            vec![JogTracks::MIDDLE; spans.len()]
        }
    }
}

fn jogs_collide(upper: &ControlSpan, lower: &ControlSpan) -> bool {
    upper.to_row == lower.from_row || upper.to_row == lower.from_row + 1
}

/// A routed control wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedWire {
    /// Upper end.
    pub from_row: usize,
    /// Lower end.
    pub to_row: usize,
    /// Whether the wire detours.
    pub obstructed: bool,
    /// The path to draw.
    pub path: WirePath,
}

/// Wires of one column, ordered by upper end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnWires {
    /// The column.
    pub column: usize,
    /// Wires to draw. Empty for black-boxed columns.
    pub wires: Vec<RoutedWire>,
}

/// Plans control-wire paths for a grid.
#[derive(Debug, Clone, Default)]
pub struct Router {
    geometry: Geometry,
    black_box: Option<RangeInclusive<usize>>,
}

impl Router {
    /// Router drawing with the given geometry.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            black_box: None,
        }
    }

    /// Skip wires in a range of hidden columns.
    #[must_use]
    pub fn with_black_box(mut self, columns: RangeInclusive<usize>) -> Self {
        self.black_box = Some(columns);
        self
    }

    /// The geometry paths are built with.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Route every column.
    #[instrument(skip_all, fields(rows = grid.num_rows(), columns = grid.num_columns()))]
    pub fn route(&self, grid: &Grid) -> Vec<ColumnWires> {
        (0..grid.num_columns())
            .map(|column| self.route_column(grid, column))
            .collect()
    }

    /// Route one column.
    pub fn route_column(&self, grid: &Grid, column: usize) -> ColumnWires {
        if self.black_box.as_ref().is_some_and(|b| b.contains(&column)) {
            debug!("Column {column} is inside the black box, no wires drawn");
            return ColumnWires {
                column,
                wires: Vec::new(),
            };
        }

        let targets = action_rows(grid, column);
        let mut spans: Vec<(ControlSpan, bool)> = discover_spans(grid, column)
            .into_iter()
            .map(|span| {
                let obstructed = obstructed_by(&span, grid, &targets);
                (span, obstructed)
            })
            .collect();
        spans.sort_by_key(|(span, _)| span.from_row);

        let obstructed: Vec<ControlSpan> = spans
            .iter()
            .filter(|(_, obstructed)| *obstructed)
            .map(|(span, _)| *span)
            .collect();
        let mut tracks = assign_tracks(&obstructed).into_iter();

        debug!(
            "Column {column}: {} wire(s), {} obstructed",
            spans.len(),
            obstructed.len()
        );

        let wires = spans
            .into_iter()
            .map(|(span, obstructed)| {
                let lanes = if obstructed { tracks.next() } else { None };
                let path = match lanes {
                    Some(lanes) => WirePath::Jogged(JoggedPath::between(
                        &self.geometry,
                        column,
                        span.from_row,
                        span.to_row,
                        lanes,
                    )),
                    None => WirePath::Straight(StraightPath::between(
                        &self.geometry,
                        column,
                        span.from_row,
                        span.to_row,
                    )),
                };
                RoutedWire {
                    from_row: span.from_row,
                    to_row: span.to_row,
                    obstructed,
                    path,
                }
            })
            .collect();

        ColumnWires { column, wires }
    }
}
