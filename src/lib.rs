//! # Lepa-Plan: Coverage Path Planner for Wall-Finishing Robots
//!
//! Given a rectangular wall, axis-aligned rectangular obstacles, and tool
//! parameters, the planner produces an ordered sequence of oriented
//! waypoints that covers all reachable wall area with a boustrophedon
//! (lawnmower) sweep, while guaranteeing the tool center never enters an
//! inflated obstacle zone.
//!
//! ## Quick Start
//!
//! ```rust
//! use lepa_plan::{plan, PlannerParams, Rect, Wall};
//!
//! let wall = Wall::new(5.0, 3.0);
//! let obstacles = [Rect::new(1.0, 1.0, 0.5, 0.5)];
//! let params = PlannerParams::new(0.5, 0.1, 0.1);
//!
//! let trajectory = plan(&wall, &obstacles, &params).unwrap();
//! println!(
//!     "{} waypoints, {:.1} m, coverage {:.1}%",
//!     trajectory.meta.num_waypoints,
//!     trajectory.meta.path_length_m,
//!     trajectory.meta.coverage_fraction * 100.0
//! );
//! ```
//!
//! ## Coordinate Frame
//!
//! Right-handed 2D frame with the origin at the wall's bottom-left corner:
//! +X rightward, +Y upward, units in meters, headings in radians CCW
//! from +X.
//!
//! ## Pipeline
//!
//! ```text
//!   Wall + Obstacles + PlannerParams
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │ Obstacle Preprocess │  inflate by margin, clip to wall,
//!   │    (obstacles)      │  merge overlaps into disjoint rects
//!   └──────────┬──────────┘
//!              ▼
//!   ┌─────────────────────┐
//!   │ Orientation + Lanes │  sweep across the shorter dimension,
//!   │      (lanes)        │  lanes at spacing S·(1-overlap)
//!   └──────────┬──────────┘
//!              ▼
//!   ┌─────────────────────┐
//!   │  Lane Segmentation  │  subtract forbidden intervals,
//!   │     (segments)      │  keep free sub-spans per lane
//!   └──────────┬──────────┘
//!              ▼
//!   ┌─────────────────────┐
//!   │ Trajectory Assembly │  boustrophedon ordering, discretize,
//!   │     (assembler)     │  cardinal headings, transitions
//!   └──────────┬──────────┘
//!              ▼
//!   ┌─────────────────────┐
//!   │ Validate + Metadata │  collision self-check, path length,
//!   │    (validation)     │  coverage fraction, warnings
//!   └──────────┬──────────┘
//!              ▼
//!          Trajectory
//! ```
//!
//! The planner is a pure, synchronous function: no I/O, no shared state,
//! no suspension points. Two invocations with equal inputs produce
//! identical output.

pub mod assembler;
pub mod core;
pub mod error;
pub mod job;
pub mod lanes;
pub mod obstacles;
pub mod params;
pub mod planner;
pub mod segments;
pub mod trajectory;
pub mod validation;

// Re-export the main types at crate root
pub use self::core::{Point2D, Rect};
pub use error::{PlanError, Result};
pub use job::{PlanRequest, PlanResponse};
pub use lanes::Axis;
pub use params::{Orientation, PlannerParams, Wall};
pub use planner::plan;
pub use trajectory::{Trajectory, TrajectoryMeta, Warning, Waypoint, PLANNER_VERSION};
