//! Core geometry types for the planner.
//!
//! This module provides the fundamental types the pipeline is built from:
//! - [`Point2D`]: 2D point/vector
//! - [`Rect`]: axis-aligned rectangle
//! - [`math`]: tolerances and interval arithmetic
//!
//! All coordinates are in meters in a right-handed frame anchored at the
//! wall's bottom-left corner: +X rightward, +Y upward, angles CCW from +X.

pub mod math;
pub mod point;
pub mod rect;

pub use math::{EPS_GEOM, EPS_SEG};
pub use point::Point2D;
pub use rect::Rect;
