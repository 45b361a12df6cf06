//! Lane segmentation: subtracting forbidden rectangles from lanes.
//!
//! Each lane keeps only the parts of its span not blocked by a forbidden
//! rectangle. A rectangle blocks a lane only when the lane's cross-axis
//! coordinate falls strictly inside the rectangle's cross-axis extent; a
//! lane tangent to a rectangle edge may graze it, since the inflation
//! margin is the sole buffer.

use log::trace;

use crate::core::math::{merge_intervals, subtract_intervals, Interval, EPS_GEOM, EPS_SEG};
use crate::core::{Point2D, Rect};
use crate::lanes::{Axis, Lane};
use crate::params::PlannerParams;

/// The free portion of a lane remaining after obstacle subtraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreeSegment {
    /// Axis the parent lane runs along.
    pub axis: Axis,
    /// Fixed cross-axis position of the parent lane.
    pub coordinate: f64,
    /// Lower free-axis bound, `from <= to`.
    pub from: f64,
    /// Upper free-axis bound.
    pub to: f64,
}

impl FreeSegment {
    /// Segment length along the free axis.
    #[inline]
    pub fn length(&self) -> f64 {
        self.to - self.from
    }

    /// Endpoint at the given free-axis coordinate.
    #[inline]
    pub fn point_at(&self, free: f64) -> Point2D {
        match self.axis {
            Axis::Vertical => Point2D::new(self.coordinate, free),
            Axis::Horizontal => Point2D::new(free, self.coordinate),
        }
    }
}

/// Subtract the forbidden set from every lane.
///
/// Returns one segment list per lane, in lane order; a fully blocked lane
/// yields an empty list. Segment lists are sorted ascending by `from`.
pub fn segment_lanes(
    lanes: &[Lane],
    forbidden: &[Rect],
    params: &PlannerParams,
) -> Vec<Vec<FreeSegment>> {
    let min_len = params.min_segment_length.unwrap_or(0.0).max(EPS_SEG);
    lanes
        .iter()
        .map(|lane| segment_lane(lane, forbidden, min_len))
        .collect()
}

/// Subtract the forbidden set from a single lane.
fn segment_lane(lane: &Lane, forbidden: &[Rect], min_len: f64) -> Vec<FreeSegment> {
    let blocked: Vec<Interval> = forbidden
        .iter()
        .filter(|rect| crosses_lane(rect, lane))
        .map(|rect| project(rect, lane.axis))
        .collect();

    let blocked = merge_intervals(blocked);
    let free = subtract_intervals((lane.start, lane.end), &blocked, min_len);

    trace!(
        "[Segments] lane {:?}@{:.3}: {} blocked -> {} free",
        lane.axis,
        lane.coordinate,
        blocked.len(),
        free.len()
    );

    free.into_iter()
        .map(|(from, to)| FreeSegment {
            axis: lane.axis,
            coordinate: lane.coordinate,
            from,
            to,
        })
        .collect()
}

/// Strict cross-axis overlap test: a rectangle whose edge merely touches
/// the lane does not block it.
#[inline]
fn crosses_lane(rect: &Rect, lane: &Lane) -> bool {
    match lane.axis {
        Axis::Vertical => {
            rect.x + EPS_GEOM < lane.coordinate && lane.coordinate < rect.max_x() - EPS_GEOM
        }
        Axis::Horizontal => {
            rect.y + EPS_GEOM < lane.coordinate && lane.coordinate < rect.max_y() - EPS_GEOM
        }
    }
}

/// Project a rectangle onto the lane's free axis.
#[inline]
fn project(rect: &Rect, axis: Axis) -> Interval {
    match axis {
        Axis::Vertical => (rect.y, rect.max_y()),
        Axis::Horizontal => (rect.x, rect.max_x()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lane(axis: Axis, coordinate: f64) -> Lane {
        Lane {
            axis,
            coordinate,
            start: 0.25,
            end: 4.75,
        }
    }

    #[test]
    fn test_unblocked_lane_is_one_segment() {
        let segments = segment_lane(&lane(Axis::Horizontal, 0.25), &[], EPS_SEG);
        assert_eq!(segments.len(), 1);
        assert_relative_eq!(segments[0].from, 0.25);
        assert_relative_eq!(segments[0].to, 4.75);
    }

    #[test]
    fn test_blocked_lane_splits_in_two() {
        let forbidden = [Rect::new(0.9, 0.9, 0.7, 0.7)];
        let segments = segment_lane(&lane(Axis::Horizontal, 1.15), &forbidden, EPS_SEG);

        assert_eq!(segments.len(), 2);
        assert_relative_eq!(segments[0].from, 0.25);
        assert_relative_eq!(segments[0].to, 0.9);
        assert_relative_eq!(segments[1].from, 1.6);
        assert_relative_eq!(segments[1].to, 4.75);
    }

    #[test]
    fn test_tangent_lane_is_not_blocked() {
        let forbidden = [Rect::new(0.9, 0.9, 0.7, 0.7)];
        // Lane exactly on the rectangle's top edge
        let segments = segment_lane(&lane(Axis::Horizontal, 1.6), &forbidden, EPS_SEG);
        assert_eq!(segments.len(), 1);

        let segments = segment_lane(&lane(Axis::Horizontal, 0.9), &forbidden, EPS_SEG);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_vertical_lane_projection() {
        let forbidden = [Rect::new(0.9, 0.9, 0.7, 0.7)];
        let segments = segment_lane(&lane(Axis::Vertical, 1.2), &forbidden, EPS_SEG);

        assert_eq!(segments.len(), 2);
        assert_relative_eq!(segments[0].to, 0.9);
        assert_relative_eq!(segments[1].from, 1.6);
    }

    #[test]
    fn test_adjacent_blocks_merge() {
        // Two rectangles sharing an edge along the lane: one combined block
        let forbidden = [Rect::new(1.0, 1.0, 1.0, 0.5), Rect::new(2.0, 1.0, 1.0, 0.5)];
        let segments = segment_lane(&lane(Axis::Horizontal, 1.25), &forbidden, EPS_SEG);

        assert_eq!(segments.len(), 2);
        assert_relative_eq!(segments[0].to, 1.0);
        assert_relative_eq!(segments[1].from, 3.0);
    }

    #[test]
    fn test_fully_blocked_lane() {
        let forbidden = [Rect::new(0.0, 1.0, 5.0, 0.5)];
        let segments = segment_lane(&lane(Axis::Horizontal, 1.25), &forbidden, EPS_SEG);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_min_segment_length_filter() {
        // Block leaves a 0.1 m sliver at the left end
        let forbidden = [Rect::new(0.35, 1.0, 4.0, 0.5)];
        let keep_all = segment_lane(&lane(Axis::Horizontal, 1.25), &forbidden, EPS_SEG);
        assert_eq!(keep_all.len(), 2);

        let filtered = segment_lane(&lane(Axis::Horizontal, 1.25), &forbidden, 0.2);
        assert_eq!(filtered.len(), 1);
        assert_relative_eq!(filtered[0].from, 4.35);
    }

    #[test]
    fn test_segment_lanes_per_lane_lists() {
        let lanes = vec![lane(Axis::Horizontal, 1.15), lane(Axis::Horizontal, 2.5)];
        let forbidden = [Rect::new(0.9, 0.9, 0.7, 0.7)];
        let params = PlannerParams::new(0.5, 0.1, 0.1);

        let per_lane = segment_lanes(&lanes, &forbidden, &params);
        assert_eq!(per_lane.len(), 2);
        assert_eq!(per_lane[0].len(), 2);
        assert_eq!(per_lane[1].len(), 1);
    }
}
