//! Planner input records and parameter validation.
//!
//! These are the typed boundary of the planner: callers hand in plain
//! records with primitive fields, validated once on entry. Everything
//! downstream trusts them.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Wall to be covered, anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Width of the wall in meters (+X extent).
    pub width: f64,
    /// Height of the wall in meters (+Y extent).
    pub height: f64,
}

impl Wall {
    /// Create a new wall.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Wall area in square meters.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Lane sweep orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Pick the orientation that yields fewer lanes.
    #[default]
    Auto,
    /// Vertical lanes, swept left to right across the wall width.
    Vertical,
    /// Horizontal lanes, swept bottom to top across the wall height.
    Horizontal,
}

/// Tool and sweep parameters for coverage planning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerParams {
    /// Width of the brush/tool footprint in meters.
    pub tool_width: f64,

    /// Fractional re-sweep between adjacent lanes, in `[0, 1)`.
    pub overlap: f64,

    /// Safety inflation applied around obstacles, in meters.
    pub safe_margin: f64,

    /// Lane sweep orientation.
    #[serde(default)]
    pub orientation: Orientation,

    /// Spacing between waypoints along a segment. Defaults to half the
    /// tool width; the effective step never falls below the lane spacing.
    #[serde(default)]
    pub waypoint_spacing: Option<f64>,

    /// Extra minimum length for free segments, applied on top of the
    /// built-in sliver filter.
    #[serde(default)]
    pub min_segment_length: Option<f64>,
}

impl PlannerParams {
    /// Create parameters with the given tool width, overlap, and margin,
    /// leaving the optional fields at their defaults.
    pub fn new(tool_width: f64, overlap: f64, safe_margin: f64) -> Self {
        Self {
            tool_width,
            overlap,
            safe_margin,
            orientation: Orientation::Auto,
            waypoint_spacing: None,
            min_segment_length: None,
        }
    }

    /// Builder-style setter for the sweep orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Perpendicular distance between adjacent lanes: `S * (1 - overlap)`.
    #[inline]
    pub fn lane_spacing(&self) -> f64 {
        self.tool_width * (1.0 - self.overlap)
    }

    /// Waypoint spacing along a segment, before the lane-spacing floor.
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.waypoint_spacing.unwrap_or(self.tool_width / 2.0)
    }

    /// Validate parameters against the wall.
    ///
    /// Rejects a non-positive tool width, overlap outside `[0, 1)`, a
    /// negative margin, a non-positive wall, and non-positive values for
    /// the optional spacing and segment-length overrides. Fatal: a failed
    /// validation produces no partial output.
    pub fn validate(&self, wall: &Wall) -> Result<()> {
        if !self.tool_width.is_finite() || self.tool_width <= 0.0 {
            return Err(PlanError::InvalidParameters(format!(
                "tool_width must be positive, got {}",
                self.tool_width
            )));
        }
        if !self.overlap.is_finite() || !(0.0..1.0).contains(&self.overlap) {
            return Err(PlanError::InvalidParameters(format!(
                "overlap must be in [0, 1), got {}",
                self.overlap
            )));
        }
        if !self.safe_margin.is_finite() || self.safe_margin < 0.0 {
            return Err(PlanError::InvalidParameters(format!(
                "safe_margin must be non-negative, got {}",
                self.safe_margin
            )));
        }
        if !wall.width.is_finite() || !wall.height.is_finite() || wall.width <= 0.0 || wall.height <= 0.0 {
            return Err(PlanError::InvalidParameters(format!(
                "wall must have positive dimensions, got {}x{}",
                wall.width, wall.height
            )));
        }
        if let Some(spacing) = self.waypoint_spacing {
            if !spacing.is_finite() || spacing <= 0.0 {
                return Err(PlanError::InvalidParameters(format!(
                    "waypoint_spacing must be positive, got {}",
                    spacing
                )));
            }
        }
        if let Some(min_len) = self.min_segment_length {
            if !min_len.is_finite() || min_len < 0.0 {
                return Err(PlanError::InvalidParameters(format!(
                    "min_segment_length must be non-negative, got {}",
                    min_len
                )));
            }
        }
        Ok(())
    }
}
