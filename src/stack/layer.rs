use crate::foundation::buffer::PixelBuffer;
use crate::foundation::rect::BoundingRect;

/// One cross-sectional exposure image plus its per-layer metadata.
///
/// The pixel buffer is exclusively owned; replacing it is the only way
/// to mutate pixels through a layer, and doing so re-derives the cached
/// bounding rectangle. The cache is what lets occupancy windows union
/// prior-layer extents without rescanning pixels.
#[derive(Clone, Debug)]
pub struct Layer {
    buffer: PixelBuffer,
    exposure_s: f32,
    bounds: BoundingRect,
}

impl Layer {
    pub fn new(buffer: PixelBuffer, exposure_s: f32) -> Self {
        let bounds = buffer.bounding_rect();
        Self {
            buffer,
            exposure_s,
            bounds,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Swap in a new pixel buffer, releasing the old one.
    pub fn set_buffer(&mut self, buffer: PixelBuffer) {
        self.bounds = buffer.bounding_rect();
        self.buffer = buffer;
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    pub fn exposure_s(&self) -> f32 {
        self.exposure_s
    }

    pub fn set_exposure_s(&mut self, seconds: f32) {
        self.exposure_s = seconds;
    }

    /// Cached tight bounding rectangle of the exposed pixels.
    pub fn bounding_rect(&self) -> BoundingRect {
        self.bounds
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }
}
