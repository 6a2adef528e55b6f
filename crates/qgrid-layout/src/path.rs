//! Wire paths.
//!
//! Paths are lists of drawing commands in absolute coordinates, close to SVG
//! path data so that a presentation layer can emit them directly.

use serde::Serialize;
use std::fmt;

use crate::geometry::Geometry;

/// Radius of every rounded corner on a jogged path.
pub const CORNER_RADIUS: f64 = 4.0;

/// One of three evenly spaced lanes, as a fraction of a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WireTrack {
    /// One third of the way across.
    Inside,
    /// Halfway across.
    Middle,
    /// Two thirds of the way across.
    Outside,
}

impl WireTrack {
    /// Offset as a fraction of the gap.
    pub fn fraction(self) -> f64 {
        match self {
            WireTrack::Inside => 1.0 / 3.0,
            WireTrack::Middle => 1.0 / 2.0,
            WireTrack::Outside => 2.0 / 3.0,
        }
    }
}

/// Lanes used by one obstructed wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JogTracks {
    /// Lane in the horizontal gap right of the column.
    pub gutter: WireTrack,
    /// Lane in the vertical gap below the start row.
    pub jog_start: WireTrack,
    /// Lane in the vertical gap above the end row.
    pub jog_end: WireTrack,
}

impl JogTracks {
    /// Middle lane everywhere.
    pub const MIDDLE: Self = Self {
        gutter: WireTrack::Middle,
        jog_start: WireTrack::Middle,
        jog_end: WireTrack::Middle,
    };
}

/// A drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathSegment {
    /// Move the pen without drawing.
    MoveTo { x: f64, y: f64 },
    /// Straight line to a point.
    LineTo { x: f64, y: f64 },
    /// Vertical line to `y`.
    Vertical { y: f64 },
    /// Horizontal line to `x`.
    Horizontal { x: f64 },
    /// Quarter-circle arc of `radius` ending at `(x, y)`.
    ///
    /// `clockwise` is the SVG sweep flag.
    Arc {
        radius: f64,
        clockwise: bool,
        x: f64,
        y: f64,
    },
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathSegment::MoveTo { x, y } => write!(f, "M {x},{y}"),
            PathSegment::LineTo { x, y } => write!(f, "L {x},{y}"),
            PathSegment::Vertical { y } => write!(f, "V {y}"),
            PathSegment::Horizontal { x } => write!(f, "H {x}"),
            PathSegment::Arc {
                radius,
                clockwise,
                x,
                y,
            } => write!(f, "A {radius},{radius} 0 0,{} {x},{y}", u8::from(clockwise)),
        }
    }
}

/// A wire drawn straight down the column center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StraightPath {
    /// Column center.
    pub x: f64,
    /// Center of the upper row.
    pub y_start: f64,
    /// Center of the lower row.
    pub y_end: f64,
}

impl StraightPath {
    /// Path between two rows of a column.
    pub fn between(geometry: &Geometry, column: usize, from_row: usize, to_row: usize) -> Self {
        Self {
            x: geometry.column_center(column),
            y_start: geometry.row_center(from_row),
            y_end: geometry.row_center(to_row),
        }
    }

    /// Drawing commands.
    pub fn segments(&self) -> Vec<PathSegment> {
        vec![
            PathSegment::MoveTo {
                x: self.x,
                y: self.y_start,
            },
            PathSegment::LineTo {
                x: self.x,
                y: self.y_end,
            },
        ]
    }
}

/// A wire that leaves the column, runs down a gutter lane and comes back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoggedPath {
    /// Lanes used.
    pub tracks: JogTracks,
    /// Drawing commands.
    pub segments: Vec<PathSegment>,
}

impl JoggedPath {
    /// Detour between two rows of a column through the given lanes.
    pub fn between(
        geometry: &Geometry,
        column: usize,
        from_row: usize,
        to_row: usize,
        tracks: JogTracks,
    ) -> Self {
        let profile = geometry.profile();
        let half_gate = profile.gate_size / 2.0;
        let spacing = profile.vertical_spacing;
        let r = CORNER_RADIUS;

        let x_center = geometry.column_center(column);
        let x_gutter = geometry.gutter_x(column, tracks.gutter);

        let y_start = geometry.row_center(from_row);
        let y_jog_start = y_start + half_gate + tracks.jog_start.fraction() * spacing;
        let y_end = geometry.row_center(to_row);
        let y_jog_end = y_end - half_gate - spacing + tracks.jog_end.fraction() * spacing;

        let segments = vec![
            PathSegment::MoveTo {
                x: x_center,
                y: y_start,
            },
            PathSegment::Vertical { y: y_jog_start - r },
            PathSegment::Arc {
                radius: r,
                clockwise: false,
                x: x_center + r,
                y: y_jog_start,
            },
            PathSegment::Horizontal { x: x_gutter - r },
            PathSegment::Arc {
                radius: r,
                clockwise: true,
                x: x_gutter,
                y: y_jog_start + r,
            },
            PathSegment::Vertical { y: y_jog_end - r },
            PathSegment::Arc {
                radius: r,
                clockwise: true,
                x: x_gutter - r,
                y: y_jog_end,
            },
            PathSegment::Horizontal { x: x_center + r },
            PathSegment::Arc {
                radius: r,
                clockwise: false,
                x: x_center,
                y: y_jog_end + r,
            },
            PathSegment::Vertical { y: y_end },
        ];

        Self { tracks, segments }
    }
}

/// Path of one control wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WirePath {
    /// Unobstructed wire.
    Straight(StraightPath),
    /// Obstructed wire.
    Jogged(JoggedPath),
}

impl WirePath {
    /// Check if this is a detour.
    pub fn is_jogged(&self) -> bool {
        matches!(self, WirePath::Jogged(_))
    }

    /// Lanes used, for jogged paths.
    pub fn tracks(&self) -> Option<JogTracks> {
        match self {
            WirePath::Straight(_) => None,
            WirePath::Jogged(path) => Some(path.tracks),
        }
    }

    /// Drawing commands.
    pub fn segments(&self) -> Vec<PathSegment> {
        match self {
            WirePath::Straight(path) => path.segments(),
            WirePath::Jogged(path) => path.segments.clone(),
        }
    }

    /// SVG path data (`d` attribute).
    pub fn to_svg_path(&self) -> String {
        self.segments()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::LayoutProfile;

    fn large() -> Geometry {
        Geometry::new(LayoutProfile::LARGE)
    }

    #[test]
    fn test_track_fractions() {
        assert!(WireTrack::Inside.fraction() < WireTrack::Middle.fraction());
        assert!(WireTrack::Middle.fraction() < WireTrack::Outside.fraction());
        assert_eq!(WireTrack::Middle.fraction(), 0.5);
    }

    #[test]
    fn test_straight_svg() {
        let path = WirePath::Straight(StraightPath::between(&large(), 0, 0, 2));
        assert_eq!(path.to_svg_path(), "M 44,28 L 44,156");
        assert!(!path.is_jogged());
        assert_eq!(path.tracks(), None);
    }

    #[test]
    fn test_jogged_geometry() {
        // LARGE: gate 56, gap 8, extension 16, row pitch 64.
        let path = JoggedPath::between(&large(), 0, 0, 2, JogTracks::MIDDLE);
        let segments = &path.segments;
        assert_eq!(segments.len(), 10);

        // Leaves row 0's center, jogs halfway into the gap below row 0.
        assert_eq!(segments[0], PathSegment::MoveTo { x: 44.0, y: 28.0 });
        assert_eq!(segments[1], PathSegment::Vertical { y: 56.0 + 4.0 - 4.0 });
        // Gutter lane halfway across the gap right of the column.
        assert_eq!(segments[3], PathSegment::Horizontal { x: 76.0 - 4.0 });
        // Comes back halfway into the gap above row 2.
        let y_jog_end = 156.0 - 28.0 - 8.0 + 4.0;
        assert_eq!(segments[5], PathSegment::Vertical { y: y_jog_end - 4.0 });
        assert_eq!(segments[9], PathSegment::Vertical { y: 156.0 });
    }

    #[test]
    fn test_jogged_svg_commands() {
        let path = WirePath::Jogged(JoggedPath::between(&large(), 1, 0, 1, JogTracks::MIDDLE));
        let d = path.to_svg_path();
        let commands: Vec<char> = d
            .split(' ')
            .filter_map(|token| token.chars().next())
            .filter(char::is_ascii_uppercase)
            .collect();
        assert_eq!(commands, vec!['M', 'V', 'A', 'H', 'A', 'V', 'A', 'H', 'A', 'V']);
        assert!(d.contains("A 4,4 0 0,1"));
    }

    #[test]
    fn test_svg_path_joins_segments_with_single_spaces() {
        let path = WirePath::Jogged(JoggedPath::between(&large(), 0, 0, 2, JogTracks::MIDDLE));
        let d = path.to_svg_path();
        assert!(d.starts_with("M 44,28 V "));
        assert!(d.ends_with(" V 156"));
        assert!(!d.contains("  "));
        assert_eq!(d.matches(['M', 'V', 'A', 'H']).count(), 10);
    }
}
