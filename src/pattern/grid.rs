use crate::foundation::buffer::PixelBuffer;
use crate::foundation::error::{VatformError, VatformResult};
use crate::ops::params;
use crate::raster::draw::{horizontal_band, vertical_band};

/// Inputs for the axis-aligned measurement grid.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct GridPatternParams {
    /// Distance between adjacent parallel lines, px.
    pub spacing_px: u32,
    /// Stroke thickness of each line, px.
    pub line_px: u32,
}

impl Default for GridPatternParams {
    fn default() -> Self {
        Self {
            spacing_px: params::GRID_SPACING.default,
            line_px: params::GRID_LINE_WIDTH.default,
        }
    }
}

impl GridPatternParams {
    pub fn validate(&self) -> VatformResult<()> {
        params::GRID_SPACING.check(self.spacing_px)?;
        params::GRID_LINE_WIDTH.check(self.line_px)
    }
}

/// Synthesize the center-symmetric calibration grid.
///
/// Lines march outward from the image center in `spacing_px` steps and
/// every line is mirrored across the center, so the pattern stays
/// symmetric for any resolution. Lines landing outside the image are
/// clipped away.
pub fn grid_pattern(width: u32, height: u32, p: &GridPatternParams) -> VatformResult<PixelBuffer> {
    p.validate()?;
    if width == 0 || height == 0 {
        return Err(VatformError::precondition(format!(
            "grid pattern needs a non-empty image, got {width}x{height}"
        )));
    }

    let mut pat = PixelBuffer::new(width, height);
    let w = i64::from(width);
    let h = i64::from(height);
    let step = i64::from(p.spacing_px);

    let mut x = w / 2;
    while x < w {
        vertical_band(&mut pat, x, p.line_px);
        vertical_band(&mut pat, w - x, p.line_px);
        x += step;
    }

    let mut y = h / 2;
    while y < h {
        horizontal_band(&mut pat, y, p.line_px);
        horizontal_band(&mut pat, h - y, p.line_px);
        y += step;
    }

    Ok(pat)
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/grid.rs"]
mod tests;
