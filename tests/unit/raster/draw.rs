use super::*;

#[test]
fn vertical_band_is_centered_on_the_column() {
    let mut b = PixelBuffer::new(9, 2);
    vertical_band(&mut b, 4, 3);
    for y in 0..2u32 {
        assert_eq!(b.row(y), &[0, 0, 0, 255, 255, 255, 0, 0, 0], "row {y}");
    }
}

#[test]
fn vertical_band_clips_at_both_edges() {
    let mut b = PixelBuffer::new(4, 1);
    vertical_band(&mut b, 0, 3);
    assert_eq!(b.row(0), &[255, 255, 0, 0]);

    let mut b = PixelBuffer::new(4, 1);
    vertical_band(&mut b, 5, 3);
    assert_eq!(b.row(0), &[0, 0, 0, 0]);
}

#[test]
fn horizontal_band_fills_whole_rows() {
    let mut b = PixelBuffer::new(3, 5);
    horizontal_band(&mut b, 2, 1);
    for y in 0..5u32 {
        let expect = if y == 2 { 255 } else { 0 };
        assert!(b.row(y).iter().all(|&v| v == expect), "row {y}");
    }
}

#[test]
fn circle_radius_zero_is_a_single_pixel() {
    let mut b = PixelBuffer::new(5, 5);
    fill_circle(&mut b, 2, 2, 0);
    let lit: usize = b.data().iter().filter(|&&v| v > 0).count();
    assert_eq!(lit, 1);
    assert_eq!(b.get(2, 2), 255);
}

#[test]
fn circle_spans_its_diameter_on_both_axes() {
    let mut b = PixelBuffer::new(15, 15);
    fill_circle(&mut b, 7, 7, 5);
    // widest row and column run through the center
    assert_eq!((2..=12).filter(|&x| b.get(x, 7) == 255).count(), 11);
    assert_eq!((2..=12).filter(|&y| b.get(7, y) == 255).count(), 11);
    assert_eq!(b.get(1, 7), 0);
    assert_eq!(b.get(13, 7), 0);
    // interior is filled, not just an outline
    assert_eq!(b.get(5, 5), 255);
}

#[test]
fn circle_clips_outside_the_image() {
    let mut b = PixelBuffer::new(4, 4);
    fill_circle(&mut b, 0, 0, 5);
    assert_eq!(b.get(0, 0), 255);
    assert_eq!(b.get(3, 3), 255);

    let mut b = PixelBuffer::new(4, 4);
    fill_circle(&mut b, -10, -10, 3);
    assert!(b.data().iter().all(|&v| v == 0));
}

#[test]
fn stroke_line_diagonal_is_four_connected() {
    let mut b = PixelBuffer::new(8, 8);
    stroke_line(&mut b, 0, 0, 7, 7, 1);

    let mut path = Vec::new();
    for y in 0..8u32 {
        for x in 0..8u32 {
            if b.get(x, y) > 0 {
                path.push((x as i64, y as i64));
            }
        }
    }
    // a 4-connected diagonal of length 8 needs 15 pixels
    assert_eq!(path.len(), 15);
    assert!(path.contains(&(0, 0)));
    assert!(path.contains(&(7, 7)));
    // every lit pixel has a 4-neighbor also lit (no diagonal-only jumps)
    for &(x, y) in &path {
        if (x, y) == (7, 7) {
            continue;
        }
        let connected = path.contains(&(x + 1, y)) || path.contains(&(x, y + 1));
        assert!(connected, "pixel ({x},{y}) has no forward 4-neighbor");
    }
}

#[test]
fn stroke_line_vertical_and_horizontal() {
    let mut b = PixelBuffer::new(5, 5);
    stroke_line(&mut b, 2, 0, 2, 4, 1);
    assert_eq!((0..5u32).filter(|&y| b.get(2, y) == 255).count(), 5);

    let mut b = PixelBuffer::new(5, 5);
    stroke_line(&mut b, 0, 3, 4, 3, 1);
    assert_eq!((0..5u32).filter(|&x| b.get(x, 3) == 255).count(), 5);
}

#[test]
fn thick_stroke_covers_the_requested_width() {
    let mut b = PixelBuffer::new(9, 9);
    stroke_line(&mut b, 0, 4, 8, 4, 5);
    // disc radius 2 around the walk: rows 2..=6 lit at mid-line
    for y in 2..=6u32 {
        assert_eq!(b.get(4, y), 255, "row {y}");
    }
    assert_eq!(b.get(4, 1), 0);
    assert_eq!(b.get(4, 7), 0);
}

#[test]
fn stroke_line_with_endpoints_off_image_still_draws_the_visible_part() {
    let mut b = PixelBuffer::new(6, 6);
    stroke_line(&mut b, 3, 0, 3 + 100, 100, 1);
    assert_eq!(b.get(3, 0), 255);
    assert!(b.get(4, 1) == 255 || b.get(4, 2) == 255);
}
