use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn rejects_out_of_range_x_points() {
    assert!(CubicBezier::new(-0.1, 0.0, 0.5, 1.0).is_err());
    assert!(CubicBezier::new(0.5, 0.0, 1.5, 1.0).is_err());
    assert!(CubicBezier::new(0.5, f64::NAN, 0.5, 1.0).is_err());
    // y may overshoot.
    assert!(CubicBezier::new(0.34, 1.56, 0.64, 1.0).is_ok());
}

#[test]
fn endpoints_snap() {
    let c = CubicBezier::new(0.42, 0.0, 0.58, 1.0).unwrap();
    assert_eq!(c.apply(-1.0), 0.0);
    assert_eq!(c.apply(0.0), 0.0);
    assert_eq!(c.apply(1.0), 1.0);
    assert_eq!(c.apply(2.0), 1.0);
}

#[test]
fn diagonal_control_points_are_linear() {
    let c = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0).unwrap();
    for i in 1..10 {
        let x = f64::from(i) / 10.0;
        assert!(approx(c.apply(x), x), "x={x} -> {}", c.apply(x));
    }
}

#[test]
fn symmetric_ease_in_out_hits_midpoint() {
    let c = CubicBezier::new(0.42, 0.0, 0.58, 1.0).unwrap();
    assert!(approx(c.apply(0.5), 0.5));
    assert!(c.apply(0.25) < 0.25);
    assert!(c.apply(0.75) > 0.75);
}

#[test]
fn overshooting_curve_exceeds_one_mid_flight() {
    let c = CubicBezier::new(0.34, 1.56, 0.64, 1.0).unwrap();
    let peak = (1..100)
        .map(|i| c.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn points_round_trip_through_constructor() {
    let c = CubicBezier::new(0.25, 0.1, 0.25, 1.0).unwrap();
    assert_eq!(c.points(), [0.25, 0.1, 0.25, 1.0]);
    assert_eq!(CubicBezier::from_points(0.25, 0.1, 0.25, 1.0), c);
}

#[test]
fn solved_parameter_reproduces_input_x() {
    // Includes curves whose x-derivative vanishes at an end, where Newton stalls.
    let curves = [
        CubicBezier::new(0.42, 0.0, 1.0, 1.0).unwrap(),
        CubicBezier::new(0.0, 0.0, 1.0, 1.0).unwrap(),
        CubicBezier::new(1.0, 0.0, 0.0, 1.0).unwrap(),
        CubicBezier::new(0.34, 1.56, 0.64, 1.0).unwrap(),
    ];
    for c in curves {
        for i in 1..100 {
            let x = f64::from(i) / 100.0;
            let t = c.solve_t(x);
            assert!((0.0..=1.0).contains(&t));
            let [x1, _, x2, _] = c.points();
            assert!(
                (sample_curve(x1, x2, t) - x).abs() < 1e-6,
                "{:?} x={x} t={t}",
                c.points()
            );
        }
    }
}
