use super::*;

fn layer_with(w: u32, h: u32, pixels: &[(u32, u32, u8)]) -> Layer {
    let mut buf = PixelBuffer::new(w, h);
    for &(x, y, v) in pixels {
        buf.set(x, y, v);
    }
    Layer::new(buf, 2.0)
}

#[test]
fn counts_layers_not_intensity() {
    let mut grid = OccupancyGrid::new(3, 1);
    let faint = PixelBuffer::from_vec(3, 1, vec![1, 0, 255]).unwrap();
    grid.add_exposed(&faint).unwrap();
    grid.add_exposed(&faint).unwrap();
    assert_eq!(grid.counts(), &[2, 0, 2]);
}

#[test]
fn add_exposed_rejects_mismatched_dims() {
    let mut grid = OccupancyGrid::new(3, 1);
    let wrong = PixelBuffer::new(1, 3);
    assert!(matches!(
        grid.add_exposed(&wrong),
        Err(VatformError::DimensionMismatch(_))
    ));
}

#[test]
fn window_covers_exactly_the_lookback_below() {
    let layers = vec![
        layer_with(4, 4, &[(0, 0, 255)]),
        layer_with(4, 4, &[(1, 1, 255)]),
        layer_with(4, 4, &[(2, 2, 255)]),
        layer_with(4, 4, &[(3, 3, 255)]),
    ];

    let occ = accumulate_occupancy(&layers, 3, 2).unwrap();
    assert_eq!(occ.depth, 2);
    // layers 1 and 2 are sampled; layer 0 is outside the window
    assert_eq!(occ.grid.count(1, 1), 1);
    assert_eq!(occ.grid.count(2, 2), 1);
    assert_eq!(occ.grid.count(0, 0), 0);
    assert_eq!(occ.window_rect, BoundingRect::new(1, 1, 2, 2));
}

#[test]
fn depth_clamps_to_the_layers_that_exist() {
    let layers = vec![
        layer_with(2, 2, &[(0, 0, 255)]),
        layer_with(2, 2, &[(1, 1, 255)]),
    ];

    let occ = accumulate_occupancy(&layers, 0, 5).unwrap();
    assert_eq!(occ.depth, 0);
    assert!(occ.window_rect.is_empty());
    assert!(occ.grid.counts().iter().all(|&c| c == 0));

    let occ = accumulate_occupancy(&layers, 1, 5).unwrap();
    assert_eq!(occ.depth, 1);
    assert_eq!(occ.grid.count(0, 0), 1);
}

#[test]
fn counts_go_past_a_byte() {
    let solid = PixelBuffer::from_vec(2, 1, vec![255, 0]).unwrap();
    let layers: Vec<Layer> = (0..301).map(|_| Layer::new(solid.clone(), 1.0)).collect();
    let occ = accumulate_occupancy(&layers, 300, 300).unwrap();
    assert_eq!(occ.depth, 300);
    assert_eq!(occ.grid.count(0, 0), 300);
    assert_eq!(occ.grid.count(1, 0), 0);
}

#[test]
fn out_of_bounds_index_is_a_precondition_error() {
    let layers = vec![layer_with(2, 2, &[])];
    assert!(matches!(
        accumulate_occupancy(&layers, 1, 5),
        Err(VatformError::Precondition(_))
    ));
}
