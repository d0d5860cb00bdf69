use crate::foundation::buffer::PixelBuffer;
use crate::foundation::error::{VatformError, VatformResult};
use crate::ops::params;
use crate::pattern::lattice::{LatticeParams, ShrinkMasks};
use crate::schedule::progress::ProgressTracker;
use crate::schedule::runner::{LayerRange, RewriteStats, RunOptions, run_layer_units};
use crate::stack::job::JobMeta;
use crate::stack::layer::Layer;
use crate::stack::model::LayerStack;

/// Inputs for multi-exposure shrinkage decomposition.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ShrinkageParams {
    /// Dot diameter / stroke grain of the lattices, px.
    pub grain_px: u32,
    /// Free space between grains, px.
    pub spacing_px: u32,
    /// Exposure for the two micro-exposure layers; `None` keeps each
    /// source layer's own exposure on all three output layers.
    pub sub_exposure_s: Option<f32>,
}

impl Default for ShrinkageParams {
    fn default() -> Self {
        Self {
            grain_px: params::GRAIN_SIZE.default,
            spacing_px: params::GRAIN_SPACING.default,
            sub_exposure_s: None,
        }
    }
}

impl ShrinkageParams {
    pub fn validate(&self) -> VatformResult<()> {
        self.lattice().validate()?;
        if let Some(s) = self.sub_exposure_s {
            params::SUB_EXPOSURE_S.check(s)?;
        }
        Ok(())
    }

    pub fn lattice(&self) -> LatticeParams {
        LatticeParams {
            grain_px: self.grain_px,
            spacing_px: self.spacing_px,
        }
    }
}

/// Split one layer into `[dot cores, gap fill, full shape]`.
///
/// The first two outputs are anchored: where a previous layer exists,
/// only pixels it also exposed take part in the micro-exposures, so
/// cores always cure onto already-solid material. The third output is
/// the unmodified source layer.
pub fn decompose_layer(
    layer: &Layer,
    previous: Option<&PixelBuffer>,
    masks: &ShrinkMasks,
    sub_exposure_s: Option<f32>,
) -> VatformResult<[Layer; 3]> {
    let mut anchored = layer.buffer().clone();
    if let Some(prev) = previous {
        anchored.and_with(prev)?;
    }

    let mut cores = anchored.clone();
    cores.and_with(&masks.dots)?;
    let mut gaps = anchored;
    gaps.and_with(&masks.dot_lines)?;

    let sub_e = sub_exposure_s.unwrap_or(layer.exposure_s());
    Ok([
        Layer::new(cores, sub_e),
        Layer::new(gaps, sub_e),
        layer.clone(),
    ])
}

/// Count of output slots that precede input index `index` after every
/// in-range layer below it has been expanded to three.
fn expanded_index(index: usize, range: LayerRange) -> usize {
    let in_range_below = range.end.min(index).saturating_sub(range.start.min(index));
    index + 2 * in_range_below
}

/// Decompose every in-range layer of the stack into three exposures.
///
/// The stack grows from N to `N + 2 * range.len()` layers; triplets
/// keep the print order of their source layers and out-of-range layers
/// pass through unchanged. The job's bottom-layer boundary is shifted
/// to match the new indexing. The stack is only swapped after every
/// unit succeeded.
#[tracing::instrument(skip(stack, p, opts, progress, job), fields(layers = stack.layer_count(), grain = p.grain_px))]
pub fn decompose_stack(
    stack: &mut LayerStack,
    p: &ShrinkageParams,
    opts: &RunOptions,
    progress: &ProgressTracker,
    job: &mut dyn JobMeta,
) -> VatformResult<RewriteStats> {
    p.validate()?;
    if stack.is_empty() {
        return Err(VatformError::precondition(
            "shrinkage decomposition needs at least 1 layer",
        ));
    }
    let range = opts.resolve_range(stack.layer_count())?;
    progress.reset("Decomposing exposures", range.len() as u64);

    let masks = ShrinkMasks::build(stack.width(), stack.height(), &p.lattice())?;
    tracing::debug!("shrink masks ready");

    let snapshot = stack.clone_layers();
    let triplets = run_layer_units(range, opts.threads, progress, |index| {
        let layer = &snapshot[index];
        let previous = index.checked_sub(1).map(|below| snapshot[below].buffer());
        decompose_layer(layer, previous, &masks, p.sub_exposure_s)
    })?;
    if progress.is_cancelled() {
        return Err(VatformError::Cancelled);
    }

    let layers_in = snapshot.len() as u64;
    let mut triplets = triplets.into_iter();
    let mut out = Vec::with_capacity(snapshot.len() + 2 * range.len());
    for (index, original) in snapshot.into_iter().enumerate() {
        if range.contains(index) {
            let triplet = triplets.next().ok_or_else(|| {
                VatformError::Other(anyhow::anyhow!(
                    "internal error: triplet missing at index {index}"
                ))
            })?;
            out.extend(triplet);
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

    let bottom = job.bottom_layer_count();
    if bottom > 0 {
        job.set_bottom_layer_count(expanded_index(bottom as usize, range) as u32);
    }
    tracing::debug!(
        layers_out = stats.layers_out,
        "shrinkage decomposition installed"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/ops/shrink.rs"]
mod tests;
