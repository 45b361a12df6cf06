//! Trajectory self-check and metadata computation.
//!
//! The collision check re-tests every waypoint against the forbidden set.
//! Correct planner output can never fail it: lanes strictly inside a
//! rectangle were subtracted, and tangent waypoints sit on the boundary,
//! which strict containment excludes. A failure therefore signals an
//! implementation bug and is fatal.

use log::{debug, trace};

use crate::core::Rect;
use crate::error::{PlanError, Result};
use crate::params::{PlannerParams, Wall};
use crate::segments::FreeSegment;
use crate::trajectory::Waypoint;

/// Verify that no waypoint lies strictly inside a forbidden rectangle.
pub fn check_collisions(waypoints: &[Waypoint], forbidden: &[Rect]) -> Result<()> {
    for (index, waypoint) in waypoints.iter().enumerate() {
        let position = waypoint.position();
        for rect in forbidden {
            if rect.contains_strict(position) {
                return Err(PlanError::CollisionDetected {
                    index,
                    position,
                    rect: *rect,
                });
            }
        }
    }
    trace!(
        "[Validation] {} waypoints clear of {} forbidden rects",
        waypoints.len(),
        forbidden.len()
    );
    Ok(())
}

/// Sum of Euclidean distances between consecutive waypoints.
///
/// The fold runs in waypoint order so equal inputs always sum to the same
/// bits.
pub fn path_length(waypoints: &[Waypoint]) -> f64 {
    let mut total = 0.0;
    for pair in waypoints.windows(2) {
        total += pair[0].position().distance(&pair[1].position());
    }
    total
}

/// Fraction of the wall area reachable by the swept lanes.
///
/// Each free segment contributes its length times the lane spacing (the
/// new area a lane adds over its neighbor's overlap); the first and last
/// lane each get an extra half tool width for the strip between them and
/// the wall edge. Clamped to `[0, 1]`.
pub fn coverage_fraction(per_lane: &[Vec<FreeSegment>], wall: &Wall, params: &PlannerParams) -> f64 {
    if per_lane.is_empty() {
        return 0.0;
    }

    let spacing = params.lane_spacing();
    let mut covered = 0.0;
    for segments in per_lane {
        for segment in segments {
            covered += segment.length() * spacing;
        }
    }

    let edge_lane_length = |segments: &Vec<FreeSegment>| -> f64 {
        segments.iter().map(FreeSegment::length).sum()
    };
    let first = edge_lane_length(&per_lane[0]);
    let last = edge_lane_length(&per_lane[per_lane.len() - 1]);
    covered += params.tool_width / 2.0 * (first + last);

    let fraction = (covered / wall.area()).clamp(0.0, 1.0);
    debug!(
        "[Validation] coverage {:.4} ({:.3} m2 of {:.3} m2)",
        fraction,
        covered,
        wall.area()
    );
    fraction
}
