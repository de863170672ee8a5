use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn table_values_at_quarter_points() {
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
    assert_eq!(Ease::EaseIn.apply(0.5), 0.25);
    assert_eq!(Ease::EaseOut.apply(0.5), 0.75);
    assert_eq!(Ease::EaseInOut.apply(0.25), 0.125);
    assert_eq!(Ease::EaseInOut.apply(0.5), 0.5);
    assert_eq!(Ease::EaseInOut.apply(0.75), 0.875);
}

#[test]
fn monotonic_over_unit_interval() {
    for ease in Ease::ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn names_round_trip_through_table() {
    for ease in Ease::ALL {
        assert_eq!(Ease::from_name(ease.name()), Some(ease));
    }
    assert_eq!(Ease::from_name("EaseIn"), None);
}

#[test]
fn unrecognised_name_looks_up_linear() {
    assert_eq!(Ease::lookup("bogus"), Ease::Linear);
    assert_eq!(Easing::parse("bogus").ease(), Ease::Linear);
    assert_eq!(
        Easing::parse("bogus"),
        Easing::Unrecognized("bogus".to_owned())
    );
}

#[test]
fn absent_field_resolves_to_ease_in_out() {
    assert_eq!(Easing::resolve(None), Ease::EaseInOut);
    assert_eq!(
        Easing::resolve(Some(&Easing::Known(Ease::EaseOut))),
        Ease::EaseOut
    );
    assert_eq!(
        Easing::resolve(Some(&Easing::parse("spring"))),
        Ease::Linear
    );
}

#[test]
fn serde_keeps_unknown_names_verbatim() {
    let e: Easing = serde_json::from_value(serde_json::json!("easeOut")).unwrap();
    assert_eq!(e, Easing::Known(Ease::EaseOut));
    let e: Easing = serde_json::from_value(serde_json::json!("wobble")).unwrap();
    assert_eq!(serde_json::to_value(&e).unwrap(), serde_json::json!("wobble"));
}

#[test]
fn serde_treats_non_string_values_as_unrecognized() {
    let e: Easing = serde_json::from_value(serde_json::json!(null)).unwrap();
    assert_eq!(e, Easing::Unrecognized("null".to_owned()));
    assert_eq!(e.ease(), Ease::Linear);
    let e: Easing = serde_json::from_value(serde_json::json!(2)).unwrap();
    assert_eq!(e.as_str(), "2");
    assert_eq!(Easing::resolve(Some(&e)), Ease::Linear);
}
