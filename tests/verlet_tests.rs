use tidepool::{ChainConfig, ChainPoint, DistanceConstraint, Pointer, Vec2};

#[test]
fn integrate_applies_half_buoyancy_dt_squared() {
    let config = ChainConfig::new().with_buoyancy(-600.0).with_damping(1.0);
    let mut p: ChainPoint<f64> = ChainPoint::new(Vec2::new(0.0, 0.0));
    p.integrate(0.1, &config);

    // 0.5 * -600 * 0.01
    assert!((p.current.y - -3.0).abs() < 1e-12, "y = {}", p.current.y);
    assert_eq!(p.previous, Vec2::new(0.0, 0.0));
}

#[test]
fn integrate_damps_and_clamps_velocity() {
    let config = ChainConfig::new().with_buoyancy(0.0).with_damping(0.5).with_max_velocity(10.0);
    let mut p: ChainPoint<f64> = ChainPoint::new(Vec2::new(0.0, 0.0));
    p.previous = Vec2::new(-4.0, 60.0);
    p.integrate(1.0 / 60.0, &config);

    // x: 4 * 0.5 = 2, y: -60 * 0.5 = -30 clamped to -10
    assert_eq!(p.current, Vec2::new(2.0, -10.0));
    assert_eq!(p.previous, Vec2::new(0.0, 0.0));
    assert_eq!(p.velocity(), Vec2::new(2.0, -10.0));
}

#[test]
fn fixed_point_ignores_integration_and_correction() {
    let config = ChainConfig::default();
    let mut p: ChainPoint<f32> = ChainPoint::fixed(Vec2::new(5.0, 5.0));
    p.previous = Vec2::new(0.0, 0.0);
    let pointer = Pointer::new(Vec2::new(5.0, 4.0), 10.0);

    p.integrate(1.0 / 60.0, &config);
    p.constrain(Vec2::new(3.0, 3.0), &pointer);

    assert_eq!(p.current, Vec2::new(5.0, 5.0));
}

#[test]
fn constrain_pushes_point_onto_pointer_circle() {
    let mut p: ChainPoint<f64> = ChainPoint::new(Vec2::new(0.0, 0.0));
    let pointer = Pointer::new(Vec2::new(0.0, 0.0), 5.0);
    p.constrain(Vec2::new(1.0, 0.0), &pointer);
    assert!((p.current.x - 5.0).abs() < 1e-12);
    assert_eq!(p.current.y, 0.0);
}

#[test]
fn distance_constraint_splits_error_in_half() {
    let mut points = [
        ChainPoint::new(Vec2::new(0.0f64, 0.0)),
        ChainPoint::new(Vec2::new(20.0, 0.0)),
    ];
    let c = DistanceConstraint::new(0, 1, 10.0);
    assert!((c.error(&points) - 10.0).abs() < 1e-12);

    c.solve(&mut points, &Pointer::inactive());

    assert_eq!(points[0].current, Vec2::new(5.0, 0.0));
    assert_eq!(points[1].current, Vec2::new(15.0, 0.0));
    assert!(c.error(&points).abs() < 1e-12);
}

#[test]
fn distance_constraint_against_fixed_point_moves_half_way() {
    let mut points = [
        ChainPoint::fixed(Vec2::new(0.0f64, 0.0)),
        ChainPoint::new(Vec2::new(0.0, -30.0)),
    ];
    let c = DistanceConstraint::new(0, 1, 10.0);
    c.solve(&mut points, &Pointer::inactive());

    assert_eq!(points[0].current, Vec2::new(0.0, 0.0));
    assert_eq!(points[1].current, Vec2::new(0.0, -20.0));
}

#[test]
fn coincident_points_are_left_alone() {
    let mut points = [
        ChainPoint::new(Vec2::new(1.0f32, 1.0)),
        ChainPoint::new(Vec2::new(1.0, 1.0)),
    ];
    DistanceConstraint::new(0, 1, 10.0).solve(&mut points, &Pointer::inactive());
    assert_eq!(points[0].current, Vec2::new(1.0, 1.0));
    assert_eq!(points[1].current, Vec2::new(1.0, 1.0));
}

#[test]
fn pointer_push_out() {
    let pointer = Pointer::new(Vec2::new(10.0f64, 10.0), 4.0);
    assert!(pointer.contains(Vec2::new(11.0, 10.0)));
    assert!(!pointer.contains(Vec2::new(14.0, 10.0)));
    assert_eq!(pointer.push_out(Vec2::new(10.0, 12.0)), Vec2::new(10.0, 14.0));
    assert_eq!(pointer.push_out(Vec2::new(30.0, 30.0)), Vec2::new(30.0, 30.0));
    assert_eq!(pointer.push_out(Vec2::new(10.0, 10.0)), Vec2::new(10.0, 10.0));

    let off = Pointer { active: false, ..pointer };
    assert!(!off.contains(Vec2::new(11.0, 10.0)));
    assert_eq!(off.push_out(Vec2::new(11.0, 10.0)), Vec2::new(11.0, 10.0));
}
