//! Clipped drawing primitives for pattern synthesis.
//!
//! Coordinates are signed: pattern generators walk lines past the image
//! edge and rely on per-pixel clipping instead of pre-trimming endpoints.

use crate::foundation::buffer::PixelBuffer;

/// Full exposure value used by every synthesized pattern.
pub(crate) const WHITE: u8 = 255;

/// Paint `width_px` full-height columns centered on column `x`.
pub(crate) fn vertical_band(buf: &mut PixelBuffer, x: i64, width_px: u32) {
    let w = i64::from(buf.width());
    let start = x - i64::from(width_px / 2);
    for col in start..start + i64::from(width_px.max(1)) {
        if col < 0 || col >= w {
            continue;
        }
        let col = col as u32;
        for y in 0..buf.height() {
            buf.set(col, y, WHITE);
        }
    }
}

/// Paint `width_px` full-width rows centered on row `y`.
pub(crate) fn horizontal_band(buf: &mut PixelBuffer, y: i64, width_px: u32) {
    let h = i64::from(buf.height());
    let start = y - i64::from(width_px / 2);
    for row in start..start + i64::from(width_px.max(1)) {
        if row < 0 || row >= h {
            continue;
        }
        buf.row_mut(row as u32).fill(WHITE);
    }
}

/// Paint one clipped horizontal span at row `y`, columns `x0..=x1`.
fn span(buf: &mut PixelBuffer, y: i64, x0: i64, x1: i64) {
    if y < 0 || y >= i64::from(buf.height()) {
        return;
    }
    let w = i64::from(buf.width());
    let x0 = x0.max(0);
    let x1 = x1.min(w - 1);
    if x0 > x1 {
        return;
    }
    let row = buf.row_mut(y as u32);
    row[x0 as usize..=x1 as usize].fill(WHITE);
}

/// Largest integer whose square does not exceed `v`.
fn isqrt(v: i64) -> i64 {
    if v <= 0 {
        return 0;
    }
    let mut r = (v as f64).sqrt() as i64;
    while (r + 1) * (r + 1) <= v {
        r += 1;
    }
    while r * r > v {
        r -= 1;
    }
    r
}

/// Filled circle by scanline. Radius 0 paints the single center pixel.
pub(crate) fn fill_circle(buf: &mut PixelBuffer, cx: i64, cy: i64, radius: i64) {
    let r = radius.max(0);
    for dy in -r..=r {
        let half = isqrt(r * r - dy * dy);
        span(buf, cy + dy, cx - half, cx + half);
    }
}

/// Thick line from (x0,y0) to (x1,y1), stamped along a 4-connected
/// Bresenham walk. `stroke_px` is the stroke diameter; discs at every
/// step keep diagonal strokes at constant width.
pub(crate) fn stroke_line(
    buf: &mut PixelBuffer,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    stroke_px: u32,
) {
    let radius = i64::from(stroke_px / 2);
    let stamp = |buf: &mut PixelBuffer, x: i64, y: i64| {
        if radius == 0 {
            span(buf, y, x, x);
        } else {
            fill_circle(buf, x, y, radius);
        }
    };

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut x = x0;
    let mut y = y0;
    let mut err = dx - dy;
    loop {
        stamp(buf, x, y);
        if x == x1 && y == y1 {
            break;
        }
        // One axis per step keeps the walk 4-connected; an exhausted
        // axis forces the other.
        let e2 = 2 * err;
        if x != x1 && (e2 > -dy || y == y1) {
            err -= dy;
            x += sx;
        } else {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/draw.rs"]
mod tests;
