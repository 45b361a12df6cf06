//! Error types for the planner.

use thiserror::Error;

use crate::core::{Point2D, Rect};

/// Planner error type.
///
/// Soft conditions (dropped obstacles, empty lane spans) are not errors;
/// they surface as warnings in the trajectory metadata. An error here means
/// the planner produced no output at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Input parameters fail validation; nothing was planned.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The self-check found a waypoint strictly inside a forbidden
    /// rectangle. This cannot happen on correct planner output; it exists
    /// to catch implementation bugs.
    #[error(
        "collision detected: waypoint {index} at ({position:?}) inside forbidden rect {rect:?}"
    )]
    CollisionDetected {
        /// Index of the offending waypoint in the trajectory.
        index: usize,
        /// Position of the offending waypoint.
        position: Point2D,
        /// The forbidden rectangle it falls inside.
        rect: Rect,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;
