//! Job-level request and response records.
//!
//! These mirror the JSON documents the surrounding service exchanges with
//! clients: a request carries the wall, the raw obstacles, and the planner
//! parameters under one named job; the response echoes the inputs and adds
//! the planner output. The planner itself never sees these; they exist so
//! callers (the CLI here, an endpoint layer elsewhere) share one canonical
//! wire shape.

use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::Result;
use crate::params::{PlannerParams, Wall};
use crate::planner;
use crate::trajectory::{TrajectoryMeta, Waypoint};

/// A planning job as submitted by a caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Optional human-friendly name for the job.
    #[serde(default)]
    pub job_name: Option<String>,
    /// Wall to be covered.
    pub wall: Wall,
    /// Raw obstacle rectangles on the wall.
    #[serde(default)]
    pub obstacles: Vec<Rect>,
    /// Planner configuration.
    pub planner_params: PlannerParams,
}

impl PlanRequest {
    /// Run the planner on this job.
    pub fn run(&self) -> Result<PlanResponse> {
        let trajectory = planner::plan(&self.wall, &self.obstacles, &self.planner_params)?;
        Ok(PlanResponse {
            job_name: self.job_name.clone(),
            wall: self.wall,
            obstacles: self.obstacles.clone(),
            planner_params: self.planner_params,
            forbidden_rects: trajectory.forbidden_rects,
            waypoints: trajectory.waypoints,
            meta: trajectory.meta,
        })
    }
}

/// Result of a planning job: the inputs echoed back plus the trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Name assigned to the job, if any.
    pub job_name: Option<String>,
    /// Original wall dimensions.
    pub wall: Wall,
    /// Original obstacles as provided.
    pub obstacles: Vec<Rect>,
    /// Planner configuration used.
    pub planner_params: PlannerParams,
    /// Inflated, clipped, merged forbidden rectangles.
    pub forbidden_rects: Vec<Rect>,
    /// Generated coverage waypoints.
    pub waypoints: Vec<Waypoint>,
    /// Computed trajectory metadata.
    pub meta: TrajectoryMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "job_name": "living-room-north",
            "wall": {"width": 5.0, "height": 3.0},
            "obstacles": [{"x": 1.0, "y": 1.0, "width": 0.5, "height": 0.5}],
            "planner_params": {
                "tool_width": 0.5,
                "overlap": 0.1,
                "safe_margin": 0.1,
                "orientation": "auto"
            }
        }"#;

        let request: PlanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.job_name.as_deref(), Some("living-room-north"));
        assert_eq!(request.obstacles.len(), 1);
        assert_eq!(request.planner_params.waypoint_spacing, None);

        let response = request.run().unwrap();
        assert_eq!(response.forbidden_rects, vec![Rect::new(0.9, 0.9, 0.7, 0.7)]);
        assert!(!response.waypoints.is_empty());
    }

    #[test]
    fn test_request_minimal_fields() {
        let json = r#"{
            "wall": {"width": 2.0, "height": 2.0},
            "planner_params": {"tool_width": 0.5, "overlap": 0.0, "safe_margin": 0.0}
        }"#;

        let request: PlanRequest = serde_json::from_str(json).unwrap();
        assert!(request.job_name.is_none());
        assert!(request.obstacles.is_empty());
        assert!(request.run().is_ok());
    }

    #[test]
    fn test_response_round_trip() {
        let request = PlanRequest {
            job_name: Some("rt".to_string()),
            wall: Wall::new(3.0, 2.0),
            obstacles: vec![Rect::new(1.0, 0.5, 0.3, 0.3)],
            planner_params: PlannerParams::new(0.4, 0.2, 0.05),
        };

        let response = request.run().unwrap();
        let json = serde_json::to_string(&response).unwrap();
        let back: PlanResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }
}
