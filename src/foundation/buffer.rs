use crate::foundation::error::{VatformError, VatformResult};
use crate::foundation::rect::BoundingRect;

/// Owned single-channel exposure image, 8-bit, row-major, tightly packed.
///
/// Value 0 means "not exposed"; any non-zero value means "exposed" for
/// masking purposes, while the full byte range is preserved for greyscale
/// anti-aliased edges. The pixel vector length always equals
/// `width * height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Blank (all zero) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Wrap an existing pixel vector. The length must match the dimensions.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> VatformResult<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(VatformError::precondition(format!(
                "pixel vector length {} does not match {width}x{height} ({expected})",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub fn idx(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let i = self.idx(x, y);
        self.data[i] = value;
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.width as usize;
        let w = self.width as usize;
        &mut self.data[start..start + w]
    }

    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    pub fn same_dims(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub(crate) fn ensure_same_dims(&self, other: &Self, what: &str) -> VatformResult<()> {
        if !self.same_dims(other) {
            return Err(VatformError::dimension_mismatch(format!(
                "{what}: {}x{} vs {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        Ok(())
    }

    /// In-place bitwise AND with `mask`. Keeps this buffer's byte values
    /// wherever the mask is fully lit, zeroes elsewhere for binary masks.
    pub fn and_with(&mut self, mask: &Self) -> VatformResult<()> {
        self.ensure_same_dims(mask, "and_with")?;
        for (dst, m) in self.data.iter_mut().zip(&mask.data) {
            *dst &= m;
        }
        Ok(())
    }

    /// Tight bounding rectangle of all non-zero pixels.
    /// Empty rectangle when every pixel is zero.
    pub fn bounding_rect(&self) -> BoundingRect {
        let w = self.width as usize;
        let mut min_x = w;
        let mut max_x = 0usize;
        let mut min_y = None;
        let mut max_y = 0u32;
        for y in 0..self.height {
            let row = self.row(y);
            let Some(first) = row.iter().position(|&v| v > 0) else {
                continue;
            };
            // rposition cannot fail once position succeeded
            let last = row.iter().rposition(|&v| v > 0).unwrap_or(first);
            min_x = min_x.min(first);
            max_x = max_x.max(last);
            if min_y.is_none() {
                min_y = Some(y);
            }
            max_y = y;
        }
        match min_y {
            None => BoundingRect::EMPTY,
            Some(top) => BoundingRect::new(
                min_x as u32,
                top,
                (max_x - min_x) as u32 + 1,
                max_y - top + 1,
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/buffer.rs"]
mod tests;
