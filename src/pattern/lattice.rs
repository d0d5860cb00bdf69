use crate::foundation::buffer::PixelBuffer;
use crate::foundation::error::{VatformError, VatformResult};
use crate::ops::params;
use crate::raster::draw::{fill_circle, stroke_line};
use crate::raster::morph::{dilate_3x3, invert};

/// Inputs shared by the dot and line lattices.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct LatticeParams {
    /// Dot diameter / stroke grain, px.
    pub grain_px: u32,
    /// Free space between grains, px.
    pub spacing_px: u32,
}

impl Default for LatticeParams {
    fn default() -> Self {
        Self {
            grain_px: params::GRAIN_SIZE.default,
            spacing_px: params::GRAIN_SPACING.default,
        }
    }
}

impl LatticeParams {
    pub fn validate(&self) -> VatformResult<()> {
        params::GRAIN_SIZE.check(self.grain_px)?;
        params::GRAIN_SPACING.check(self.spacing_px)
    }

    /// Column pitch: one grain plus one gap.
    fn pitch(&self) -> i64 {
        i64::from(self.grain_px) + i64::from(self.spacing_px)
    }
}

fn check_dims(width: u32, height: u32, what: &str) -> VatformResult<()> {
    if width == 0 || height == 0 {
        return Err(VatformError::precondition(format!(
            "{what} needs a non-empty image, got {width}x{height}"
        )));
    }
    Ok(())
}

/// Honeycomb lattice of filled dots.
///
/// Rows sit at half the column pitch and every other row shifts by half
/// a column, which packs the dots as evenly as a hex grid allows.
pub fn dot_lattice(width: u32, height: u32, p: &LatticeParams) -> VatformResult<PixelBuffer> {
    p.validate()?;
    check_dims(width, height, "dot lattice")?;

    let mut pat = PixelBuffer::new(width, height);
    let w = i64::from(width);
    let h = i64::from(height);
    let x_step = p.pitch();
    let y_step = x_step / 2;
    let radius = i64::from(p.grain_px / 2);

    let mut offset_row = false;
    let mut y = 0;
    while y < h {
        let x_off = if offset_row { x_step / 2 } else { 0 };
        let mut x = 0;
        while x < w {
            fill_circle(&mut pat, x + x_off, y, radius);
            x += x_step;
        }
        offset_row = !offset_row;
        y += y_step;
    }

    Ok(pat)
}

/// Two families of 45-degree diagonal lines, both slopes.
///
/// Strokes are a fifth of the grain (at least one pixel) so the lattice
/// stays much sparser than the dots it complements.
pub fn line_lattice(width: u32, height: u32, p: &LatticeParams) -> VatformResult<PixelBuffer> {
    p.validate()?;
    check_dims(width, height, "line lattice")?;

    let mut pat = PixelBuffer::new(width, height);
    let h = i64::from(height);
    let w = i64::from(width);
    let stroke = (p.grain_px / 5).max(1);
    let step = p.pitch();

    // Diagonals sweep one image height along x; lines starting in the
    // rightmost columns of a wide image run off the edge and clip.
    let mut x = 0;
    while x < w {
        stroke_line(&mut pat, x, 0, x + h, h, stroke);
        stroke_line(&mut pat, x, h, x + h, 0, stroke);
        x += step;
    }
    let mut y = 0;
    while y < h {
        stroke_line(&mut pat, 0, y, h, y + h, stroke);
        stroke_line(&mut pat, 0, y, h, y - h, stroke);
        y += step;
    }

    Ok(pat)
}

/// The mask pair consumed by shrinkage decomposition, built once per
/// resolution and shared read-only by every worker.
#[derive(Clone, Debug)]
pub struct ShrinkMasks {
    /// Filled dot cores.
    pub dots: PixelBuffer,
    /// Line strokes restricted to the space around the dots.
    pub dot_lines: PixelBuffer,
}

impl ShrinkMasks {
    /// Build both masks. Lines are masked to the dilated complement of
    /// the dots: removed from dot interiors, kept over each dot's
    /// one-pixel rim.
    pub fn build(width: u32, height: u32, p: &LatticeParams) -> VatformResult<Self> {
        let dots = dot_lattice(width, height, p)?;
        let lines = line_lattice(width, height, p)?;
        let mut dot_lines = dilate_3x3(&invert(&dots));
        dot_lines.and_with(&lines)?;
        Ok(Self { dots, dot_lines })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/lattice.rs"]
mod tests;
