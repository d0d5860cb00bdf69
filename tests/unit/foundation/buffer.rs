use super::*;

#[test]
fn from_vec_checks_the_length_invariant() {
    assert!(PixelBuffer::from_vec(3, 2, vec![0; 6]).is_ok());
    let err = PixelBuffer::from_vec(3, 2, vec![0; 5]).unwrap_err();
    assert!(err.to_string().contains("does not match 3x2"));
}

#[test]
fn get_set_round_trip_row_major() {
    let mut b = PixelBuffer::new(4, 3);
    b.set(3, 0, 7);
    b.set(0, 2, 9);
    assert_eq!(b.get(3, 0), 7);
    assert_eq!(b.get(0, 2), 9);
    assert_eq!(b.data()[3], 7);
    assert_eq!(b.data()[8], 9);
    assert_eq!(b.row(2), &[9, 0, 0, 0]);
}

#[test]
fn and_with_masks_per_pixel() {
    let mut b = PixelBuffer::from_vec(3, 1, vec![200, 130, 255]).unwrap();
    let mask = PixelBuffer::from_vec(3, 1, vec![255, 0, 255]).unwrap();
    b.and_with(&mask).unwrap();
    assert_eq!(b.data(), &[200, 0, 255]);
}

#[test]
fn and_with_rejects_mismatched_dims() {
    let mut b = PixelBuffer::new(3, 1);
    let mask = PixelBuffer::new(1, 3);
    let err = b.and_with(&mask).unwrap_err();
    assert!(matches!(err, VatformError::DimensionMismatch(_)));
}

#[test]
fn bounding_rect_is_tight() {
    let mut b = PixelBuffer::new(8, 6);
    b.set(2, 1, 1);
    b.set(5, 4, 120);
    b.set(3, 2, 255);
    assert_eq!(b.bounding_rect(), BoundingRect::new(2, 1, 4, 4));
}

#[test]
fn bounding_rect_of_blank_image_is_empty() {
    assert!(PixelBuffer::new(5, 5).bounding_rect().is_empty());
}

#[test]
fn bounding_rect_sees_faint_pixels() {
    let mut b = PixelBuffer::new(4, 4);
    b.set(1, 1, 1);
    assert_eq!(b.bounding_rect(), BoundingRect::new(1, 1, 1, 1));
}

#[test]
fn fill_overwrites_everything() {
    let mut b = PixelBuffer::new(2, 2);
    b.fill(42);
    assert!(b.data().iter().all(|&v| v == 42));
}
