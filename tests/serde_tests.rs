//! Run with `cargo test --features serde`.
#![cfg(feature = "serde")]

use tidepool::{Bounds, Pointer, Vec2};

#[test]
fn vec2_round_trips_as_named_fields() {
    let v = Vec2::new(1.5f64, -2.25);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.25}"#);
    assert_eq!(serde_json::from_str::<Vec2<f64>>(&json).unwrap(), v);
}

#[test]
fn pointer_round_trips() {
    let pointer = Pointer::new(Vec2::new(410.0f32, 305.0), 60.0);
    let json = serde_json::to_string(&pointer).unwrap();
    assert_eq!(serde_json::from_str::<Pointer<f32>>(&json).unwrap(), pointer);

    let parked: Pointer<f32> =
        serde_json::from_str(r#"{"active":false,"position":{"x":0.0,"y":0.0},"radius":0.0}"#)
            .unwrap();
    assert_eq!(parked, Pointer::inactive());
}

#[test]
fn bounds_round_trip() {
    let bounds = Bounds::new(Vec2::new(0.0f64, 0.0), Vec2::new(800.0, 600.0), 50.0).unwrap();
    let json = serde_json::to_string(&bounds).unwrap();
    assert_eq!(serde_json::from_str::<Bounds<f64>>(&json).unwrap(), bounds);
}

#[test]
fn vec2_rejects_missing_component() {
    assert!(serde_json::from_str::<Vec2<f64>>(r#"{"x":1.0}"#).is_err());
}
