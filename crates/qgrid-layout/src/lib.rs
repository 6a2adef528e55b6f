//! Layout geometry and control-wire routing for circuit grids.
//!
//! This crate plans where a circuit grid is drawn. It does not draw anything
//! itself; the presentation layer consumes its coordinates and paths.
//!
//! - [`LayoutProfile`] and [`Geometry`] map rows and columns to pixels
//! - [`Router`] turns every binary gate into a [`RoutedWire`], straight when
//!   nothing is in the way and jogged through the gap right of the column
//!   otherwise
//!
//! # Example
//!
//! ```rust
//! use qgrid_ir::{BinaryGate, Cell, Grid, UnaryGate};
//! use qgrid_layout::{Geometry, Router};
//!
//! let grid = Grid::empty(3, 1)
//!     .add_gate(0, 0, Cell::control(BinaryGate::CX, 2))
//!     .add_gate(1, 0, Cell::Unary(UnaryGate::H));
//!
//! let router = Router::new(Geometry::for_grid(3, 1));
//! let columns = router.route(&grid);
//!
//! let wire = &columns[0].wires[0];
//! assert!(wire.obstructed);
//! assert!(wire.path.to_svg_path().starts_with("M "));
//! ```

pub mod geometry;
pub mod path;
pub mod profile;
pub mod router;

pub use geometry::{BlackBoxRect, Geometry};
pub use path::{
    CORNER_RADIUS, JogTracks, JoggedPath, PathSegment, StraightPath, WirePath, WireTrack,
};
pub use profile::{LayoutProfile, VERTICAL_SPACING};
pub use router::{
    ColumnWires, ControlSpan, RoutedWire, Router, assign_tracks, column_has_jogged_wires,
    discover_spans, is_obstructed,
};
