use crate::foundation::error::{VatformError, VatformResult};
use crate::pattern::grid::{GridPatternParams, grid_pattern};
use crate::schedule::progress::ProgressTracker;
use crate::schedule::runner::RewriteStats;
use crate::stack::model::LayerStack;

/// Replace the whole stack with a two-layer backlight measurement grid.
///
/// Both remaining layers carry the same synthesized pattern; their
/// exposure metadata is taken from the first two layers of the input
/// stack, which is why at least two layers are required. Everything
/// above them is dropped.
#[tracing::instrument(skip(stack, p, progress), fields(layers = stack.layer_count()))]
pub fn build_grid_stack(
    stack: &mut LayerStack,
    p: &GridPatternParams,
    progress: &ProgressTracker,
) -> VatformResult<RewriteStats> {
    p.validate()?;
    if stack.layer_count() < 2 {
        return Err(VatformError::precondition(
            "calibration grid needs at least 2 layers",
        ));
    }
    progress.reset("Building calibration grid", 2);

    let pattern = grid_pattern(stack.width(), stack.height(), p)?;
    let mut out = Vec::with_capacity(2);
    for mut layer in stack.clone_layers().into_iter().take(2) {
        if progress.is_cancelled() {
            return Err(VatformError::Cancelled);
        }
        layer.set_buffer(pattern.clone());
        out.push(layer);
        progress.increment();
    }

    let stats = RewriteStats {
        layers_in: stack.layer_count() as u64,
        layers_rewritten: 2,
        layers_out: 2,
    };
    stack.replace_layers(out)?;
    tracing::debug!("calibration grid installed");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/ops/calibration.rs"]
mod tests;
