//! Scale factors and snap-to-grid sizing.
//!
//! A frame's scale factor says how much its nominal content size has
//! been divided to reach the on-screen size. Factors live in
//! `[MIN_FACTOR, MAX_FACTOR]` and are always of the form
//! `GRID_STEPS / step` for an integer `step`, so resizes land on a
//! fixed set of sizes.

use serde::{Deserialize, Serialize};

use crate::Size;

/// Number of grid divisions a factor of 1 spans.
pub const GRID_STEPS: f64 = 50.0;
pub const MIN_FACTOR: f64 = 1.0;
pub const MAX_FACTOR: f64 = 10.0;

/// Width and height scale factors of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub width: f64,
    pub height: f64,
}

impl ScaleFactors {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Snaps both factors onto the grid.
    pub fn snapped(self) -> Self {
        Self::new(snap_factor(self.width), snap_factor(self.height))
    }
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self::new(MIN_FACTOR, MIN_FACTOR)
    }
}

/// Result of [`quantize_to_grid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantized {
    pub factors: ScaleFactors,
    /// The size implied by the snapped factors. This, not the candidate,
    /// is what gets applied to the frame.
    pub size: Size,
}

/// Clamps a raw factor and snaps it to the nearest grid step.
pub fn snap_factor(raw: f64) -> f64 {
    let clamped = if raw.is_finite() {
        raw.clamp(MIN_FACTOR, MAX_FACTOR)
    } else {
        MAX_FACTOR
    };
    let step = (GRID_STEPS / clamped).round();
    GRID_STEPS / step
}

/// Converts a candidate pixel size into grid-consistent factors and size.
///
/// Both the factors and the adjusted size are derived from `origin` and
/// `origin_factors`, the values captured when the gesture began, so
/// repeated calls during one drag never compound rounding error.
pub fn quantize_to_grid(origin: Size, origin_factors: ScaleFactors, candidate: Size) -> Quantized {
    let nominal_w = f64::from(origin.width) * origin_factors.width;
    let nominal_h = f64::from(origin.height) * origin_factors.height;

    let width_factor = snap_factor(nominal_w / f64::from(candidate.width));
    let height_factor = snap_factor(nominal_h / f64::from(candidate.height));

    Quantized {
        factors: ScaleFactors::new(width_factor, height_factor),
        size: Size::new(
            (nominal_w / width_factor).round() as i32,
            (nominal_h / height_factor).round() as i32,
        ),
    }
}
