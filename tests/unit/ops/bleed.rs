use super::*;

use crate::foundation::rect::BoundingRect;

fn solid_rect(w: u32, h: u32, r: BoundingRect, value: u8) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h);
    for y in r.y..r.bottom() {
        for x in r.x..r.right() {
            buf.set(x, y, value);
        }
    }
    buf
}

fn stack_layers(buffers: Vec<PixelBuffer>) -> Vec<Layer> {
    buffers.into_iter().map(|b| Layer::new(b, 2.0)).collect()
}

#[test]
fn empty_window_copies_the_source_through() {
    let src = solid_rect(6, 6, BoundingRect::new(1, 1, 3, 3), 180);
    let layers = stack_layers(vec![src.clone()]);
    let occ = accumulate_occupancy(&layers, 0, 5).unwrap();
    let out = compensate_layer(&src, &occ).unwrap();
    assert_eq!(out, src);
}

#[test]
fn pixel_survives_only_with_full_support() {
    // layer 0 covers columns 0..4, layer 1 covers columns 2..6,
    // layer 2 covers columns 0..6 and is compensated with lookback 2
    let l0 = solid_rect(6, 1, BoundingRect::new(0, 0, 4, 1), 255);
    let l1 = solid_rect(6, 1, BoundingRect::new(2, 0, 4, 1), 255);
    let l2 = solid_rect(6, 1, BoundingRect::new(0, 0, 6, 1), 200);
    let layers = stack_layers(vec![l0, l1, l2.clone()]);

    let occ = accumulate_occupancy(&layers, 2, 2).unwrap();
    let out = compensate_layer(&l2, &occ).unwrap();
    // only the overlap 2..4 is supported by both layers below
    assert_eq!(out.data(), &[0, 0, 200, 200, 0, 0]);
}

#[test]
fn source_greyscale_values_are_preserved_where_kept() {
    let below = solid_rect(4, 1, BoundingRect::new(0, 0, 4, 1), 255);
    let mut src = PixelBuffer::new(4, 1);
    src.set(0, 0, 1);
    src.set(1, 0, 128);
    src.set(2, 0, 255);
    let layers = stack_layers(vec![below, src.clone()]);

    let occ = accumulate_occupancy(&layers, 1, 1).unwrap();
    let out = compensate_layer(&src, &occ).unwrap();
    assert_eq!(out.data(), &[1, 128, 255, 0]);
}

#[test]
fn pixels_outside_the_window_rect_go_dark() {
    // support exists only in a small box; source is lit everywhere
    let below = solid_rect(8, 8, BoundingRect::new(2, 2, 2, 2), 255);
    let src = solid_rect(8, 8, BoundingRect::new(0, 0, 8, 8), 255);
    let layers = stack_layers(vec![below, src.clone()]);

    let occ = accumulate_occupancy(&layers, 1, 1).unwrap();
    let out = compensate_layer(&src, &occ).unwrap();
    assert_eq!(out.bounding_rect(), BoundingRect::new(2, 2, 2, 2));
    assert_eq!(out.get(2, 2), 255);
    assert_eq!(out.get(0, 0), 0);
    assert_eq!(out.get(7, 7), 0);
}

#[test]
fn blank_window_under_a_lit_layer_blanks_it() {
    // depth > 0 but the sampled layer is blank: nothing is supported
    let below = PixelBuffer::new(4, 4);
    let src = solid_rect(4, 4, BoundingRect::new(0, 0, 4, 4), 255);
    let layers = stack_layers(vec![below, src.clone()]);

    let occ = accumulate_occupancy(&layers, 1, 3).unwrap();
    assert_eq!(occ.depth, 1);
    let out = compensate_layer(&src, &occ).unwrap();
    assert!(out.bounding_rect().is_empty());
}

#[test]
fn mismatched_occupancy_dims_are_rejected() {
    let src = PixelBuffer::new(4, 4);
    let other = stack_layers(vec![
        solid_rect(6, 6, BoundingRect::new(0, 0, 6, 6), 255),
        solid_rect(6, 6, BoundingRect::new(0, 0, 6, 6), 255),
    ]);
    let occ = accumulate_occupancy(&other, 1, 1).unwrap();
    assert!(matches!(
        compensate_layer(&src, &occ),
        Err(VatformError::DimensionMismatch(_))
    ));
}
