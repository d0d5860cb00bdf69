use rayon::prelude::*;

use crate::foundation::error::{VatformError, VatformResult};
use crate::schedule::progress::ProgressTracker;

/// Contiguous range of layer indices, start inclusive, end exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayerRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl LayerRange {
    pub fn new(start: usize, end: usize) -> VatformResult<Self> {
        if start > end {
            return Err(VatformError::precondition(
                "LayerRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    /// The whole stack: `0..layer_count`.
    pub fn full(layer_count: usize) -> Self {
        Self {
            start: 0,
            end: layer_count,
        }
    }

    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn contains(self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Execution options shared by the stack operations.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RunOptions {
    /// Worker thread count; `None` lets rayon size the pool.
    pub threads: Option<usize>,
    /// Layer indices to rewrite; `None` covers the whole stack.
    /// Layers outside the range pass through unchanged.
    pub range: Option<LayerRange>,
}

impl RunOptions {
    /// Concrete range for a stack of `layer_count` layers.
    pub fn resolve_range(&self, layer_count: usize) -> VatformResult<LayerRange> {
        match self.range {
            None => Ok(LayerRange::full(layer_count)),
            Some(r) if r.end > layer_count => Err(VatformError::precondition(format!(
                "layer range {}..{} exceeds stack of {layer_count} layers",
                r.start, r.end
            ))),
            Some(r) => Ok(r),
        }
    }
}

/// Aggregate outcome of one stack operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RewriteStats {
    pub layers_in: u64,
    pub layers_rewritten: u64,
    pub layers_out: u64,
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> VatformResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(VatformError::precondition(
            "run option 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| VatformError::Other(anyhow::anyhow!("failed to build thread pool: {e}")))
}

/// Run one unit of work per in-range layer index on a bounded pool.
///
/// Results come back in index order whatever the thread interleaving:
/// each index owns the output slot at `index - range.start` and nothing
/// else writes to it. Units observe cancellation on entry, so a cancel
/// request makes the whole run return [`VatformError::Cancelled`]
/// rather than a partial result. Per-unit errors propagate in index
/// order, lowest first.
#[tracing::instrument(skip(progress, unit), fields(start = range.start, end = range.end))]
pub fn run_layer_units<T, F>(
    range: LayerRange,
    threads: Option<usize>,
    progress: &ProgressTracker,
    unit: F,
) -> VatformResult<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> VatformResult<T> + Send + Sync,
{
    if range.is_empty() {
        return Ok(Vec::new());
    }

    let pool = build_thread_pool(threads)?;
    let indices: Vec<usize> = (range.start..range.end).collect();
    let results = pool.install(|| {
        indices
            .par_iter()
            .map(|&index| -> VatformResult<T> {
                if progress.is_cancelled() {
                    return Err(VatformError::Cancelled);
                }
                let value = unit(index)?;
                progress.increment();
                Ok(value)
            })
            .collect::<Vec<_>>()
    });

    let mut out = Vec::with_capacity(results.len());
    for item in results {
        out.push(item?);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/runner.rs"]
mod tests;
