//! Small morphology helpers for mask preparation.

use crate::foundation::buffer::PixelBuffer;

/// Per-pixel bitwise NOT (255 - v).
pub(crate) fn invert(src: &PixelBuffer) -> PixelBuffer {
    let mut out = src.clone();
    for v in out.data_mut() {
        *v = !*v;
    }
    out
}

/// Dilation with a 3x3 rectangular kernel: every pixel becomes the
/// maximum of its in-bounds neighborhood. Single pass, grows lit
/// regions by one pixel in every direction.
pub(crate) fn dilate_3x3(src: &PixelBuffer) -> PixelBuffer {
    let w = src.width();
    let h = src.height();
    let mut out = PixelBuffer::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    for y in 0..h {
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(h - 1);
        for x in 0..w {
            let x0 = x.saturating_sub(1);
            let x1 = (x + 1).min(w - 1);
            let mut m = 0u8;
            for yy in y0..=y1 {
                let row = src.row(yy);
                for xx in x0..=x1 {
                    m = m.max(row[xx as usize]);
                }
            }
            out.set(x, y, m);
        }
    }
    out
}
