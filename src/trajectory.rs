//! Planner output types.
//!
//! A [`Trajectory`] is the complete result of one planner invocation: the
//! ordered waypoint list, the forbidden rectangles that were carved out of
//! the wall, and computed metadata. All types serialize to JSON with stable
//! field order so that stored results round-trip exactly.

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Rect};

/// Version identifier for the planner logic, reported in metadata.
pub const PLANNER_VERSION: &str = "v2";

/// An oriented waypoint along the coverage path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// X coordinate in meters.
    pub x: f64,
    /// Y coordinate in meters.
    pub y: f64,
    /// Heading in radians, CCW from +X.
    pub theta: f64,
}

impl Waypoint {
    /// Create a new waypoint.
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Position without the heading.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Non-fatal conditions surfaced in trajectory metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    /// The usable lane span is empty; the wall is smaller than the tool.
    WallTooSmall,
    /// Every lane is fully covered by obstacles.
    NoFreeSpace,
    /// An input obstacle had zero area after clipping and was dropped.
    DegenerateObstacle,
}

impl Warning {
    /// Stable string code, identical to the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::WallTooSmall => "wall_too_small",
            Self::NoFreeSpace => "no_free_space",
            Self::DegenerateObstacle => "degenerate_obstacle",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Metadata computed over a finished trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryMeta {
    /// Total path length in meters.
    pub path_length_m: f64,
    /// Fraction of the wall area reachable by the swept lanes, in `[0, 1]`.
    pub coverage_fraction: f64,
    /// Number of waypoints in the trajectory.
    pub num_waypoints: usize,
    /// Version identifier of the planner logic.
    pub planner_version: String,
    /// Non-fatal conditions encountered while planning.
    pub warnings: Vec<Warning>,
}

/// Complete result of one planner invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Inflated, clipped, merged forbidden rectangles.
    pub forbidden_rects: Vec<Rect>,
    /// Ordered coverage waypoints.
    pub waypoints: Vec<Waypoint>,
    /// Computed metadata.
    pub meta: TrajectoryMeta,
}
