//! Numeric tolerances and 1D interval arithmetic.
//!
//! The planner compares floating-point coordinates with two tolerances:
//! [`EPS_GEOM`] for geometric predicates (containment, tangency) and
//! [`EPS_SEG`] for filtering segments too short to sweep. Interval
//! subtraction here is the workhorse of lane segmentation: blocked spans
//! are merged and removed from a lane's full span in a single ordered pass
//! so that results are bit-for-bit reproducible.

/// Geometric comparison tolerance (meters).
pub const EPS_GEOM: f64 = 1e-9;

/// Minimum usable free-segment length (meters).
pub const EPS_SEG: f64 = 1e-6;

/// A closed interval `[lo, hi]` on a lane's free axis.
pub type Interval = (f64, f64);

/// Merge overlapping or touching intervals.
///
/// Input order does not matter; the result is sorted by `lo` and pairwise
/// disjoint with gaps wider than [`EPS_GEOM`].
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for (lo, hi) in intervals {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + EPS_GEOM => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }

    merged
}

/// Subtract a set of blocked intervals from `full`, returning the free
/// remainder in ascending order.
///
/// `blocked` must already be merged (sorted, disjoint); pieces shorter than
/// `min_len` are dropped.
pub fn subtract_intervals(full: Interval, blocked: &[Interval], min_len: f64) -> Vec<Interval> {
    let (start, end) = full;
    let mut free = Vec::new();
    let mut cursor = start;

    for &(lo, hi) in blocked {
        if lo > cursor {
            let piece_end = lo.min(end);
            if piece_end - cursor >= min_len {
                free.push((cursor, piece_end));
            }
        }
        cursor = cursor.max(hi);
        if cursor >= end {
            break;
        }
    }

    if end - cursor >= min_len {
        free.push((cursor, end));
    }

    free
}
