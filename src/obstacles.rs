//! Obstacle preprocessing: inflate, clip, merge.
//!
//! Raw obstacles become forbidden rectangles in three steps: each is
//! inflated by the safe margin, clipped to the wall, and overlapping
//! results are merged into their bounding boxes until the set is pairwise
//! interior-disjoint. Bounding-box merging over-approximates the blocked
//! area, which keeps everything downstream working on plain axis-aligned
//! rectangles; it can only grow the forbidden set, never shrink it.

use log::debug;

use crate::core::Rect;
use crate::params::Wall;
use crate::trajectory::Warning;

/// Inflate, clip, and merge raw obstacles into a disjoint forbidden set.
///
/// Obstacles sharing no area with the wall before inflation are dropped
/// with a [`Warning::DegenerateObstacle`]; the same applies to anything
/// that ends up with zero area after clipping. The result is sorted by
/// `(x, y, width, height)` so equal inputs in any order produce identical
/// output.
pub fn preprocess(wall: &Wall, obstacles: &[Rect], safe_margin: f64) -> (Vec<Rect>, Vec<Warning>) {
    let wall_rect = Rect::new(0.0, 0.0, wall.width, wall.height);
    let mut clipped = Vec::with_capacity(obstacles.len());
    let mut warnings = Vec::new();

    for obstacle in obstacles {
        // An obstacle entirely off the wall contributes nothing; inflation
        // must not pull phantom geometry back inside.
        if obstacle.intersection(&wall_rect).is_none() {
            debug!("[Obstacles] dropped out-of-bounds obstacle {:?}", obstacle);
            warnings.push(Warning::DegenerateObstacle);
            continue;
        }

        match obstacle.inflate(safe_margin).intersection(&wall_rect) {
            Some(rect) if !rect.is_degenerate() => clipped.push(rect),
            _ => {
                debug!("[Obstacles] dropped degenerate obstacle {:?}", obstacle);
                warnings.push(Warning::DegenerateObstacle);
            }
        }
    }

    let mut merged = merge_overlapping(clipped);
    merged.sort_by(|a, b| {
        a.x.total_cmp(&b.x)
            .then(a.y.total_cmp(&b.y))
            .then(a.width.total_cmp(&b.width))
            .then(a.height.total_cmp(&b.height))
    });

    debug!(
        "[Obstacles] {} raw -> {} forbidden rects ({} dropped)",
        obstacles.len(),
        merged.len(),
        warnings.len()
    );
    (merged, warnings)
}

/// Merge rectangles with positive-area overlap into their bounding boxes,
/// iterating to a fixpoint. Pairs sharing only an edge stay separate.
fn merge_overlapping(mut rects: Vec<Rect>) -> Vec<Rect> {
    let mut changed = true;
    while changed {
        changed = false;
        'scan: for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                if rects[i].overlaps(&rects[j]) {
                    let merged = rects[i].union(&rects[j]);
                    rects.swap_remove(j);
                    rects[i] = merged;
                    changed = true;
                    break 'scan;
                }
            }
        }
    }
    rects
}

/// Check that every pair of rectangles is interior-disjoint.
#[cfg(test)]
fn pairwise_disjoint(rects: &[Rect]) -> bool {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].overlaps(&rects[j]) {
                return false;
            }
        }
    }
    true
}
