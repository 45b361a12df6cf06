//! Sweep orientation selection and lane generation.
//!
//! Lanes are the parallel lines the tool sweeps along. The first and last
//! lane sit half a tool width inside the wall so the footprint never
//! overhangs an edge, and when the wall width is not an exact multiple of
//! the lane spacing an extra lane is appended at the far edge to close the
//! remainder gap.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Point2D, EPS_GEOM};
use crate::params::{Orientation, PlannerParams, Wall};
use crate::trajectory::Warning;

/// Axis a lane runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Lane runs along +Y at a fixed X.
    Vertical,
    /// Lane runs along +X at a fixed Y.
    Horizontal,
}

/// A single sweep lane before obstacle subtraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lane {
    /// Axis the lane runs along.
    pub axis: Axis,
    /// Fixed cross-axis position of the lane.
    pub coordinate: f64,
    /// Start of the lane span along its free axis.
    pub start: f64,
    /// End of the lane span along its free axis.
    pub end: f64,
}

impl Lane {
    /// Point on the lane at the given free-axis coordinate.
    #[inline]
    pub fn point_at(&self, free: f64) -> Point2D {
        match self.axis {
            Axis::Vertical => Point2D::new(self.coordinate, free),
            Axis::Horizontal => Point2D::new(free, self.coordinate),
        }
    }
}

/// Resolve the sweep axis for the given wall.
///
/// Explicit orientations pass through. `Auto` sweeps across the shorter
/// wall dimension, which yields the smaller lane count and therefore fewer
/// cross-lane transitions; a square wall resolves to vertical.
pub fn select_axis(orientation: Orientation, wall: &Wall) -> Axis {
    match orientation {
        Orientation::Vertical => Axis::Vertical,
        Orientation::Horizontal => Axis::Horizontal,
        Orientation::Auto => {
            if wall.width <= wall.height {
                Axis::Vertical
            } else {
                Axis::Horizontal
            }
        }
    }
}

/// Generate the sweep lanes for the wall.
///
/// Lane positions are `S/2 + i * d` across the wall, with a final lane at
/// `cross_extent - S/2` when the regular grid leaves a remainder. Returns
/// an empty list with [`Warning::WallTooSmall`] when the wall cannot fit
/// the tool in either dimension.
pub fn generate(wall: &Wall, params: &PlannerParams, axis: Axis) -> (Vec<Lane>, Option<Warning>) {
    let (cross_extent, free_extent) = match axis {
        Axis::Vertical => (wall.width, wall.height),
        Axis::Horizontal => (wall.height, wall.width),
    };

    let half = params.tool_width / 2.0;
    let spacing = params.lane_spacing();

    if cross_extent < params.tool_width - EPS_GEOM || free_extent < params.tool_width - EPS_GEOM {
        debug!(
            "[Lanes] wall {}x{} too small for tool width {}",
            wall.width, wall.height, params.tool_width
        );
        return (Vec::new(), Some(Warning::WallTooSmall));
    }

    let cross_max = cross_extent - half;
    let (span_start, span_end) = (half, free_extent - half);

    let mut lanes = Vec::new();
    let mut i = 0usize;
    loop {
        let coordinate = half + i as f64 * spacing;
        if coordinate > cross_max + EPS_GEOM {
            break;
        }
        lanes.push(Lane {
            axis,
            coordinate,
            start: span_start,
            end: span_end,
        });
        i += 1;
    }

    // Close the remainder gap at the far edge.
    if let Some(last) = lanes.last() {
        if last.coordinate < cross_max - EPS_GEOM {
            lanes.push(Lane {
                axis,
                coordinate: cross_max,
                start: span_start,
                end: span_end,
            });
        }
    }

    debug!(
        "[Lanes] {} {:?} lanes at spacing {:.3}, span [{:.3}, {:.3}]",
        lanes.len(),
        axis,
        spacing,
        span_start,
        span_end
    );
    (lanes, None)
}
