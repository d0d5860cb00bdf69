use crate::foundation::buffer::PixelBuffer;
use crate::foundation::error::{VatformError, VatformResult};
use crate::ops::occupancy::{Occupancy, accumulate_occupancy};
use crate::ops::params;
use crate::schedule::progress::ProgressTracker;
use crate::schedule::runner::{RewriteStats, RunOptions, run_layer_units};
use crate::stack::layer::Layer;
use crate::stack::model::LayerStack;

/// Inputs for cross-bleed compensation.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CrossBleedParams {
    /// How many layers below the current one the exposure reaches.
    pub lookback_layers: u16,
}

impl Default for CrossBleedParams {
    fn default() -> Self {
        Self {
            lookback_layers: params::LOOKBACK_LAYERS.default,
        }
    }
}

impl CrossBleedParams {
    pub fn validate(&self) -> VatformResult<()> {
        params::LOOKBACK_LAYERS.check(self.lookback_layers)
    }
}

/// Apply the all-or-nothing support rule to one layer.
///
/// A pixel is kept only where every sampled layer below was exposed;
/// anywhere the window disagrees the pixel goes dark. An empty window
/// (`depth == 0`) copies the source through unchanged.
pub fn compensate_layer(source: &PixelBuffer, occ: &Occupancy) -> VatformResult<PixelBuffer> {
    if occ.depth == 0 {
        return Ok(source.clone());
    }
    if source.width() != occ.grid.width() || source.height() != occ.grid.height() {
        return Err(VatformError::dimension_mismatch(format!(
            "compensate: layer is {}x{}, occupancy grid is {}x{}",
            source.width(),
            source.height(),
            occ.grid.width(),
            occ.grid.height()
        )));
    }

    let mut out = PixelBuffer::new(source.width(), source.height());
    let scan = occ.window_rect.clamped(source.width(), source.height());
    if scan.is_empty() {
        return Ok(out);
    }

    let x0 = scan.x as usize;
    let x1 = scan.right() as usize;
    for y in scan.y..scan.bottom() {
        let src = &source.row(y)[x0..x1];
        let counts = &occ.grid.row(y)[x0..x1];
        let dst = &mut out.row_mut(y)[x0..x1];
        for ((d, &s), &c) in dst.iter_mut().zip(src).zip(counts) {
            if c == occ.depth {
                *d = s;
            }
        }
    }
    Ok(out)
}

/// Compensate every in-range layer of the stack in parallel.
///
/// Each layer is rewritten from a pre-run snapshot, so results do not
/// depend on the order workers finish. The stack is only swapped after
/// every unit succeeded; on any error (including cancellation) it keeps
/// its original contents.
#[tracing::instrument(skip(stack, p, opts, progress), fields(layers = stack.layer_count(), lookback = p.lookback_layers))]
pub fn compensate_stack(
    stack: &mut LayerStack,
    p: &CrossBleedParams,
    opts: &RunOptions,
    progress: &ProgressTracker,
) -> VatformResult<RewriteStats> {
    p.validate()?;
    if stack.layer_count() < 2 {
        return Err(VatformError::precondition(
            "cross-bleed compensation needs at least 2 layers",
        ));
    }
    let range = opts.resolve_range(stack.layer_count())?;
    progress.reset("Compensating cross-bleed", range.len() as u64);

    let snapshot = stack.clone_layers();
    let rewritten = run_layer_units(range, opts.threads, progress, |index| {
        let occ = accumulate_occupancy(&snapshot, index, p.lookback_layers)?;
        let source = &snapshot[index];
        let buffer = compensate_layer(source.buffer(), &occ)?;
        Ok(Layer::new(buffer, source.exposure_s()))
    })?;
    if progress.is_cancelled() {
        return Err(VatformError::Cancelled);
    }

    let layers_in = snapshot.len() as u64;
    let mut rewritten = rewritten.into_iter();
    let mut out = Vec::with_capacity(snapshot.len());
    for (index, original) in snapshot.into_iter().enumerate() {
        if range.contains(index) {
            out.push(rewritten.next().ok_or_else(|| {
                VatformError::Other(anyhow::anyhow!(
                    "internal error: rewritten layer missing at index {index}"
                ))
            })?);
        } else {
            out.push(original);
        }
    }

    let stats = RewriteStats {
        layers_in,
        layers_rewritten: range.len() as u64,
        layers_out: out.len() as u64,
    };
    stack.replace_layers(out)?;
    tracing::debug!(
        rewritten = stats.layers_rewritten,
        "cross-bleed compensation installed"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/ops/bleed.rs"]
mod tests;
