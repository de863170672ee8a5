use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn entering_starts_transparent_and_slightly_small() {
    let s = SlidePresentation::default().sample(PresentationDirection::Entering, 0.0);
    assert_eq!(s.opacity, 0.0);
    assert!(approx(s.scale, 0.98));
    assert_eq!(s.transform_origin, TransformOrigin::Center);
}

#[test]
fn entering_settles_by_halfway() {
    let p = SlidePresentation::default();
    for progress in [0.5, 0.75, 1.0] {
        let s = p.sample(PresentationDirection::Entering, progress);
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.scale, 1.0);
    }
    // Opacity finishes at 40%.
    assert_eq!(p.sample(PresentationDirection::Entering, 0.4).opacity, 1.0);
}

#[test]
fn exiting_holds_then_fades_and_grows() {
    let p = SlidePresentation::default();
    for progress in [0.0, 0.25, 0.5] {
        let s = p.sample(PresentationDirection::Exiting, progress);
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.scale, 1.0);
    }
    let end = p.sample(PresentationDirection::Exiting, 1.0);
    assert_eq!(end.opacity, 0.0);
    assert!(approx(end.scale, 1.02));

    let mid = p.sample(PresentationDirection::Exiting, 0.75);
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
}

#[test]
fn tween_clamps_outside_input() {
    let t = SlidePresentation::default().exiting_opacity;
    assert_eq!(t.sample(-3.0), 1.0);
    assert_eq!(t.sample(9.0), 0.0);
}

#[test]
fn entering_scale_overshoots_mid_flight() {
    let p = SlidePresentation::default();
    let peak = (1..50)
        .map(|i| p.sample(PresentationDirection::Entering, f64::from(i) / 100.0).scale)
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}
