use crate::foundation::buffer::PixelBuffer;
use crate::foundation::error::{VatformError, VatformResult};
use crate::foundation::rect::BoundingRect;
use crate::stack::layer::Layer;

/// Per-pixel count of exposed layers over a sampled window.
///
/// Counts are 16-bit because the lookback limit (500 layers) exceeds
/// what a byte can hold; a u16 cannot overflow within that limit.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    counts: Vec<u16>,
}

impl OccupancyGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            counts: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn count(&self, x: u32, y: u32) -> u16 {
        self.counts[y as usize * self.width as usize + x as usize]
    }

    pub fn counts(&self) -> &[u16] {
        &self.counts
    }

    pub(crate) fn row(&self, y: u32) -> &[u16] {
        let start = y as usize * self.width as usize;
        &self.counts[start..start + self.width as usize]
    }

    /// Add 1 wherever `layer` is exposed (non-zero). Greyscale values
    /// collapse to a single increment regardless of intensity.
    pub fn add_exposed(&mut self, layer: &PixelBuffer) -> VatformResult<()> {
        if layer.width() != self.width || layer.height() != self.height {
            return Err(VatformError::dimension_mismatch(format!(
                "occupancy add: layer is {}x{}, grid is {}x{}",
                layer.width(),
                layer.height(),
                self.width,
                self.height
            )));
        }
        for (count, &v) in self.counts.iter_mut().zip(layer.data()) {
            *count += u16::from(v > 0);
        }
        Ok(())
    }
}

/// One layer's view of the layers printed just below it.
#[derive(Debug)]
pub struct Occupancy {
    /// Exposure counts over the sampled window.
    pub grid: OccupancyGrid,
    /// Union of the sampled layers' cached bounding rectangles.
    pub window_rect: BoundingRect,
    /// How many layers were actually sampled, after clamping the
    /// lookback to the layers that exist below `index`.
    pub depth: u16,
}

/// Accumulate occupancy for the window below `layers[index]`.
///
/// The window covers the `min(lookback, index)` layers directly below
/// the target, so the bottom of the stack degrades gracefully: layer 0
/// gets an empty window instead of an error.
pub fn accumulate_occupancy(
    layers: &[Layer],
    index: usize,
    lookback: u16,
) -> VatformResult<Occupancy> {
    let Some(target) = layers.get(index) else {
        return Err(VatformError::precondition(format!(
            "layer index {index} out of bounds for {} layers",
            layers.len()
        )));
    };

    let depth = (lookback as usize).min(index);
    let mut grid = OccupancyGrid::new(target.width(), target.height());
    let mut window_rect = BoundingRect::EMPTY;
    for back in 1..=depth {
        let prior = &layers[index - back];
        grid.add_exposed(prior.buffer())?;
        window_rect = window_rect.union(prior.bounding_rect());
    }

    Ok(Occupancy {
        grid,
        window_rect,
        depth: depth as u16,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/ops/occupancy.rs"]
mod tests;
