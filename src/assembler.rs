//! Trajectory assembly: boustrophedon ordering and discretization.
//!
//! Lanes are walked in order of increasing cross-axis coordinate, with the
//! traversal direction alternating on each non-empty lane. Empty lanes are
//! skipped without flipping direction, so the sweep keeps its back-and-forth
//! rhythm across obstacle gaps. Within a segment, waypoints are sampled no
//! finer than the lane spacing; the robot drives straight lines between
//! them, so denser samples would add nothing.

use log::debug;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::math::EPS_GEOM;
use crate::lanes::Axis;
use crate::params::PlannerParams;
use crate::segments::FreeSegment;
use crate::trajectory::Waypoint;

/// Build the waypoint list from per-lane free segments.
///
/// Even-positioned non-empty lanes are traversed in ascending free-axis
/// order, odd-positioned ones descending. Each waypoint carries its
/// segment's traversal heading, so the pair formed by a lane-end waypoint
/// and the next lane-start waypoint makes every cross-lane transition
/// observable in the output.
pub fn assemble(per_lane: &[Vec<FreeSegment>], params: &PlannerParams) -> Vec<Waypoint> {
    let step = params.lane_spacing().max(params.spacing());
    let mut waypoints = Vec::new();
    let mut parity = 0usize;

    for segments in per_lane {
        if segments.is_empty() {
            continue;
        }
        let ascending = parity % 2 == 0;
        parity += 1;

        // Segment lists arrive sorted ascending by `from`; a descending
        // pass visits them top-down, entering each at its upper end.
        if ascending {
            for segment in segments {
                emit_segment(&mut waypoints, segment, true, step);
            }
        } else {
            for segment in segments.iter().rev() {
                emit_segment(&mut waypoints, segment, false, step);
            }
        }
    }

    debug!(
        "[Assembler] {} waypoints over {} non-empty lanes (step {:.3})",
        waypoints.len(),
        parity,
        step
    );
    waypoints
}

/// Emit the waypoints of one segment, leading end first.
fn emit_segment(waypoints: &mut Vec<Waypoint>, segment: &FreeSegment, ascending: bool, step: f64) {
    let heading = heading_for(segment.axis, ascending);
    let (lead, trail) = if ascending {
        (segment.from, segment.to)
    } else {
        (segment.to, segment.from)
    };
    let length = segment.length();

    push_waypoint(waypoints, segment, lead, heading);

    // Internal samples at whole multiples of the step from the leading end
    let mut k = 1usize;
    loop {
        let offset = k as f64 * step;
        if offset >= length - EPS_GEOM {
            break;
        }
        let free = if ascending { lead + offset } else { lead - offset };
        push_waypoint(waypoints, segment, free, heading);
        k += 1;
    }

    push_waypoint(waypoints, segment, trail, heading);
}

#[inline]
fn push_waypoint(waypoints: &mut Vec<Waypoint>, segment: &FreeSegment, free: f64, heading: f64) {
    let point = segment.point_at(free);
    waypoints.push(Waypoint::new(point.x, point.y, heading));
}

/// Cardinal heading of a segment traversal.
#[inline]
fn heading_for(axis: Axis, ascending: bool) -> f64 {
    match (axis, ascending) {
        (Axis::Vertical, true) => FRAC_PI_2,
        (Axis::Vertical, false) => -FRAC_PI_2,
        (Axis::Horizontal, true) => 0.0,
        (Axis::Horizontal, false) => PI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn segment(axis: Axis, coordinate: f64, from: f64, to: f64) -> FreeSegment {
        FreeSegment {
            axis,
            coordinate,
            from,
            to,
        }
    }

    fn params() -> PlannerParams {
        // Lane spacing 0.45, spacing 0.25 -> step 0.45
        PlannerParams::new(0.5, 0.1, 0.1)
    }

    #[test]
    fn test_single_segment_discretization() {
        let per_lane = vec![vec![segment(Axis::Vertical, 0.25, 0.25, 1.3)]];
        let waypoints = assemble(&per_lane, &params());

        // 0.25, 0.70, 1.15, 1.30: internal multiples of 0.45 plus endpoints
        assert_eq!(waypoints.len(), 4);
        assert_relative_eq!(waypoints[0].y, 0.25);
        assert_relative_eq!(waypoints[1].y, 0.70);
        assert_relative_eq!(waypoints[2].y, 1.15);
        assert_relative_eq!(waypoints[3].y, 1.30);
        for wp in &waypoints {
            assert_relative_eq!(wp.x, 0.25);
            assert_relative_eq!(wp.theta, FRAC_PI_2);
        }
    }

    #[test]
    fn test_short_segment_yields_endpoints_only() {
        let per_lane = vec![vec![segment(Axis::Horizontal, 0.25, 1.0, 1.2)]];
        let waypoints = assemble(&per_lane, &params());

        assert_eq!(waypoints.len(), 2);
        assert_relative_eq!(waypoints[0].x, 1.0);
        assert_relative_eq!(waypoints[1].x, 1.2);
    }

    #[test]
    fn test_step_multiple_lands_on_endpoint() {
        // Length 0.9 is exactly two steps: the k=2 sample must not
        // duplicate the trailing endpoint
        let per_lane = vec![vec![segment(Axis::Horizontal, 0.25, 0.0, 0.9)]];
        let waypoints = assemble(&per_lane, &params());

        assert_eq!(waypoints.len(), 3);
        assert_relative_eq!(waypoints[1].x, 0.45);
        assert_relative_eq!(waypoints[2].x, 0.9);
    }

    #[test]
    fn test_boustrophedon_alternation() {
        let per_lane = vec![
            vec![segment(Axis::Vertical, 0.25, 0.25, 2.75)],
            vec![segment(Axis::Vertical, 0.70, 0.25, 2.75)],
        ];
        let waypoints = assemble(&per_lane, &params());

        // First lane ends at the top; second starts there and runs down
        let first_lane_last = waypoints.iter().filter(|w| w.x < 0.5).last().unwrap();
        assert_relative_eq!(first_lane_last.y, 2.75);
        assert_relative_eq!(first_lane_last.theta, FRAC_PI_2);

        let second_lane_first = waypoints.iter().find(|w| w.x > 0.5).unwrap();
        assert_relative_eq!(second_lane_first.y, 2.75);
        assert_relative_eq!(second_lane_first.theta, -FRAC_PI_2);

        let last = waypoints.last().unwrap();
        assert_relative_eq!(last.y, 0.25);
    }

    #[test]
    fn test_empty_lane_keeps_parity() {
        // Middle lane fully blocked: the third lane takes odd parity and
        // runs descending
        let per_lane = vec![
            vec![segment(Axis::Vertical, 0.25, 0.25, 2.75)],
            vec![],
            vec![segment(Axis::Vertical, 1.15, 0.25, 2.75)],
        ];
        let waypoints = assemble(&per_lane, &params());

        let third_lane_first = waypoints.iter().find(|w| w.x > 1.0).unwrap();
        assert_relative_eq!(third_lane_first.y, 2.75);
        assert_relative_eq!(third_lane_first.theta, -FRAC_PI_2);
    }

    #[test]
    fn test_descending_lane_visits_upper_segment_first() {
        let per_lane = vec![
            vec![segment(Axis::Vertical, 0.25, 0.25, 2.75)],
            vec![
                segment(Axis::Vertical, 0.70, 0.25, 0.9),
                segment(Axis::Vertical, 0.70, 1.6, 2.75),
            ],
        ];
        let waypoints = assemble(&per_lane, &params());

        // Entry into the split lane is the segment nearest the exit point
        let second_lane: Vec<&Waypoint> = waypoints.iter().filter(|w| w.x > 0.5).collect();
        assert_relative_eq!(second_lane[0].y, 2.75);
        assert_relative_eq!(second_lane.last().unwrap().y, 0.25);
    }

    #[test]
    fn test_horizontal_headings() {
        let per_lane = vec![
            vec![segment(Axis::Horizontal, 0.25, 0.25, 4.75)],
            vec![segment(Axis::Horizontal, 0.70, 0.25, 4.75)],
        ];
        let waypoints = assemble(&per_lane, &params());

        assert_relative_eq!(waypoints[0].theta, 0.0);
        assert_relative_eq!(waypoints.last().unwrap().theta, PI);
    }

    #[test]
    fn test_no_segments_no_waypoints() {
        let per_lane: Vec<Vec<FreeSegment>> = vec![vec![], vec![]];
        assert!(assemble(&per_lane, &params()).is_empty());
    }
}
