use super::*;

#[test]
fn frame_range_validates_order() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(4)).is_err());
    let r = FrameRange::new(FrameIndex(-2), FrameIndex(3)).unwrap();
    assert_eq!(r.len_frames(), 5);
    assert!(r.contains(FrameIndex(-2)));
    assert!(!r.contains(FrameIndex(3)));
    assert_eq!(
        r.frames().collect::<Vec<_>>(),
        vec![
            FrameIndex(-2),
            FrameIndex(-1),
            FrameIndex(0),
            FrameIndex(1),
            FrameIndex(2)
        ]
    );
}

#[test]
fn offset_saturates_instead_of_overflowing() {
    assert_eq!(FrameIndex(i64::MAX).offset_from(FrameIndex(-1)), i64::MAX);
    assert_eq!(FrameIndex(i64::MIN).offset_from(FrameIndex(1)), i64::MIN);
    assert_eq!(FrameIndex(105).offset_from(FrameIndex(100)), 5);
}

#[test]
fn bounds_rect_conversion_keeps_origin_and_size() {
    let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
    let r = b.to_rect();
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (10.0, 20.0, 40.0, 60.0));
    assert_eq!(Bounds::from(r), b);
}

#[test]
fn bounds_finiteness() {
    assert!(Bounds::new(0.0, 0.0, 1.0, 1.0).is_finite());
    assert!(!Bounds::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
    assert!(!Bounds::new(0.0, 0.0, f64::INFINITY, 1.0).is_finite());
}
