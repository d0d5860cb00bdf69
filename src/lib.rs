//! vatform rewrites the layer images of a resin (vat photopolymerization)
//! print job to counter physical printing artifacts.
//!
//! A print is modeled as a [`LayerStack`]: ordered single-channel
//! exposure images sharing one resolution. Three operations rewrite a
//! stack in place:
//!
//! 1. **Cross-bleed compensation** ([`compensate_stack`]): darken pixels
//!    that the layers below would not support, using a per-pixel
//!    occupancy count over a configurable lookback window.
//! 2. **Shrinkage decomposition** ([`decompose_stack`]): split every
//!    layer into two sparse micro-exposures (dot cores, then gap fill)
//!    followed by the full shape, tripling the layer count.
//! 3. **Calibration grid** ([`build_grid_stack`]): replace the stack
//!    with a two-layer center-symmetric grid for backlight measurement.
//!
//! The key behavioral constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: outputs are bit-identical for a given input,
//!   whatever the worker thread count. Workers read a pre-run snapshot
//!   and each writes one owned output slot.
//! - **All-or-nothing**: a stack is swapped only after every layer unit
//!   succeeded; on error or cancellation the input stack is untouched.
#![forbid(unsafe_code)]

mod foundation;
mod ops;
mod pattern;
mod raster;
mod schedule;
mod stack;

pub use foundation::buffer::PixelBuffer;
pub use foundation::error::{VatformError, VatformResult};
pub use foundation::rect::BoundingRect;
pub use ops::bleed::{CrossBleedParams, compensate_layer, compensate_stack};
pub use ops::calibration::build_grid_stack;
pub use ops::occupancy::{Occupancy, OccupancyGrid, accumulate_occupancy};
pub use ops::params::{
    GRAIN_SIZE, GRAIN_SPACING, GRID_LINE_WIDTH, GRID_SPACING, LOOKBACK_LAYERS, ParamSpec,
    SUB_EXPOSURE_S, declared_params,
};
pub use ops::shrink::{ShrinkageParams, decompose_layer, decompose_stack};
pub use pattern::grid::{GridPatternParams, grid_pattern};
pub use pattern::lattice::{LatticeParams, ShrinkMasks, dot_lattice, line_lattice};
pub use schedule::progress::{ProgressSnapshot, ProgressTracker};
pub use schedule::runner::{LayerRange, RewriteStats, RunOptions, run_layer_units};
pub use stack::job::{JobMeta, NullJob};
pub use stack::layer::Layer;
pub use stack::model::LayerStack;
