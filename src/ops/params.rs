//! Declared numeric inputs of the stack operations.
//!
//! Each input carries its admissible range, UI increment and default, so
//! host applications can build input forms without duplicating the
//! limits. Operations validate against the same declarations before any
//! work starts.

use std::fmt::Display;

use crate::foundation::error::{VatformError, VatformResult};

/// Range, step and default for one externally-supplied numeric input.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct ParamSpec<T> {
    /// Short human-facing name.
    pub label: &'static str,
    /// Unit shown next to the value.
    pub unit: &'static str,
    pub min: T,
    pub max: T,
    /// Suggested spinner step for UIs.
    pub increment: T,
    pub default: T,
}

impl<T: PartialOrd + Copy + Display> ParamSpec<T> {
    /// Reject values outside `[min, max]`.
    pub fn check(&self, value: T) -> VatformResult<()> {
        if value < self.min || value > self.max {
            return Err(VatformError::precondition(format!(
                "{} must be between {} and {} {}, got {}",
                self.label, self.min, self.max, self.unit, value
            )));
        }
        Ok(())
    }
}

/// Distance between adjacent parallel grid lines.
pub const GRID_SPACING: ParamSpec<u32> = ParamSpec {
    label: "grid line spacing",
    unit: "px",
    min: 1,
    max: 10_000,
    increment: 1,
    default: 200,
};

/// Stroke thickness of each grid line.
pub const GRID_LINE_WIDTH: ParamSpec<u32> = ParamSpec {
    label: "grid line width",
    unit: "px",
    min: 1,
    max: 500,
    increment: 1,
    default: 1,
};

/// Dot diameter / stroke grain of the shrinkage lattices.
pub const GRAIN_SIZE: ParamSpec<u32> = ParamSpec {
    label: "grain size",
    unit: "px",
    min: 1,
    max: 500,
    increment: 1,
    default: 11,
};

/// Free space left between lattice grains.
pub const GRAIN_SPACING: ParamSpec<u32> = ParamSpec {
    label: "grain spacing",
    unit: "px",
    min: 1,
    max: 500,
    increment: 1,
    default: 9,
};

/// How many layers below the current one an exposure bleeds through.
pub const LOOKBACK_LAYERS: ParamSpec<u16> = ParamSpec {
    label: "exposure bleed depth",
    unit: "layers",
    min: 1,
    max: 500,
    increment: 1,
    default: 5,
};

/// Exposure assigned to the micro-exposure layers of a decomposition.
pub const SUB_EXPOSURE_S: ParamSpec<f32> = ParamSpec {
    label: "micro-exposure time",
    unit: "s",
    min: 0.1,
    max: 300.0,
    increment: 0.1,
    default: 1.5,
};

/// The whole declared parameter surface as one JSON document,
/// keyed by a stable machine name per input.
pub fn declared_params() -> serde_json::Value {
    serde_json::json!({
        "grid_spacing": GRID_SPACING,
        "grid_line_width": GRID_LINE_WIDTH,
        "grain_size": GRAIN_SIZE,
        "grain_spacing": GRAIN_SPACING,
        "lookback_layers": LOOKBACK_LAYERS,
        "sub_exposure_s": SUB_EXPOSURE_S,
    })
}
