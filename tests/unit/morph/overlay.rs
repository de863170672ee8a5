use super::*;
use crate::animation::ease::Ease;
use crate::foundation::core::{Bounds, FrameIndex};
use crate::morph::config::ElementMorphSpec;
use crate::morph::evaluator::evaluate;

const CANVAS: Canvas = Canvas {
    width: 1920,
    height: 1080,
};

fn config() -> TransitionConfig {
    let el = |id: &str, x: f64| {
        ElementMorphSpec::new(
            id,
            Bounds::new(x, 0.0, 10.0, 10.0),
            Bounds::new(x + 100.0, 0.0, 10.0, 10.0),
        )
    };
    TransitionConfig::new("pair", 10)
        .with_easing(Ease::Linear)
        .with_element(el("zeta", 0.0))
        .with_element(el("alpha", 50.0))
        .with_element(el("zeta", 500.0))
}

#[test]
fn inactive_result_has_no_overlay() {
    let cfg = config();
    let before = evaluate(Some(&cfg), FrameIndex(10), FrameIndex(9));
    assert!(MorphOverlay::build(&cfg, &before, CANVAS).is_none());
    let after = evaluate(Some(&cfg), FrameIndex(10), FrameIndex(20));
    assert!(MorphOverlay::build(&cfg, &after, CANVAS).is_none());
}

#[test]
fn layers_follow_config_order_without_duplicates() {
    let cfg = config();
    let r = evaluate(Some(&cfg), FrameIndex(0), FrameIndex(5));
    let overlay = MorphOverlay::build(&cfg, &r, CANVAS).unwrap();

    let ids: Vec<&str> = overlay.layers.iter().map(|l| l.element_id).collect();
    assert_eq!(ids, vec!["zeta", "alpha"]);
    assert_eq!(overlay.layer("zeta").unwrap().state.left, 50.0);
    assert_eq!(overlay.layer("alpha").unwrap().state.left, 100.0);
}

#[test]
fn overlay_sits_on_top_and_ignores_input() {
    let cfg = config();
    let r = evaluate(Some(&cfg), FrameIndex(0), FrameIndex(0));
    let overlay = MorphOverlay::build(&cfg, &r, CANVAS).unwrap();
    assert_eq!(overlay.z_index, OVERLAY_Z_INDEX);
    assert!(!overlay.intercepts_input);
    assert_eq!(overlay.canvas, CANVAS);
}
