//! The coverage planning pipeline.
//!
//! [`plan`] is the single entry point: a pure, synchronous function from
//! wall, obstacles, and parameters to a finished [`Trajectory`]. Stages run
//! in fixed order (obstacle preprocessing, orientation selection, lane
//! generation, lane segmentation, trajectory assembly, validation), and the
//! planner holds no state between calls, so concurrent invocations need no
//! coordination and equal inputs produce identical output.

use log::debug;

use crate::core::Rect;
use crate::error::Result;
use crate::params::{PlannerParams, Wall};
use crate::trajectory::{Trajectory, TrajectoryMeta, Warning, PLANNER_VERSION};
use crate::{assembler, lanes, obstacles, segments, validation};

/// Plan a coverage trajectory over the wall.
///
/// Returns a complete trajectory (possibly with an empty waypoint list and
/// a warning) or an error; there is no partial success. Fatal conditions
/// are invalid parameters and the internal collision self-check.
pub fn plan(wall: &Wall, raw_obstacles: &[Rect], params: &PlannerParams) -> Result<Trajectory> {
    params.validate(wall)?;
    debug!(
        "[Planner] wall {}x{}, {} obstacles, tool {:.3} overlap {:.2} margin {:.3}",
        wall.width,
        wall.height,
        raw_obstacles.len(),
        params.tool_width,
        params.overlap,
        params.safe_margin
    );

    let (forbidden, mut warnings) = obstacles::preprocess(wall, raw_obstacles, params.safe_margin);

    let axis = lanes::select_axis(params.orientation, wall);
    let (lane_list, lane_warning) = lanes::generate(wall, params, axis);
    warnings.extend(lane_warning);

    let per_lane = segments::segment_lanes(&lane_list, &forbidden, params);
    if !lane_list.is_empty() && per_lane.iter().all(Vec::is_empty) {
        debug!("[Planner] all lanes blocked");
        warnings.push(Warning::NoFreeSpace);
    }

    let waypoints = assembler::assemble(&per_lane, params);

    validation::check_collisions(&waypoints, &forbidden)?;

    let meta = TrajectoryMeta {
        path_length_m: validation::path_length(&waypoints),
        coverage_fraction: validation::coverage_fraction(&per_lane, wall, params),
        num_waypoints: waypoints.len(),
        planner_version: PLANNER_VERSION.to_string(),
        warnings,
    };

    debug!(
        "[Planner] done: {} waypoints, {:.2} m, coverage {:.3}",
        meta.num_waypoints, meta.path_length_m, meta.coverage_fraction
    );

    Ok(Trajectory {
        forbidden_rects: forbidden,
        waypoints,
        meta,
    })
}
