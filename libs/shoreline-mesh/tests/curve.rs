use approx::assert_relative_eq;
use glam::DVec3;
use shoreline_mesh::{
    build_curve_path, build_curve_ribbon, generate_control_points, generate_curve_points,
    CurveParams, MeshError, RibbonParams, Stage,
};

fn circle_waypoints(count: usize, radius: f64) -> Vec<DVec3> {
    (0..count)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / count as f64;
            DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect()
}

#[test]
fn open_curve_keeps_its_endpoints() {
    let waypoints = [
        DVec3::new(0.3, 1.0, 0.1),
        DVec3::new(2.2, 1.0, 1.9),
        DVec3::new(4.1, 1.0, 0.4),
        DVec3::new(6.6, 1.0, 2.8),
        DVec3::new(7.0, 1.0, 5.5),
    ];
    let params = CurveParams::default().with_split_count(7).with_shape(0.6);
    let path = build_curve_path(&waypoints, &params).unwrap();

    assert!(!path.closed);
    assert_eq!(path.len(), 5 + 4 * 6);
    assert_eq!(path.points.first(), Some(&waypoints[0]));
    assert_eq!(path.points.last(), Some(&waypoints[4]));
    assert!(path.points.iter().all(|p| (p.y - 1.0).abs() < 1e-12));
}

#[test]
fn closed_curve_ribbon_wraps_around() {
    let waypoints = circle_waypoints(6, 10.0);
    let params = CurveParams::default().with_closed(true).with_split_count(8);
    let strip = build_curve_ribbon(&waypoints, &params, &RibbonParams::default()).unwrap();

    assert!(strip.is_closed());
    assert_eq!(strip.polyline.len(), 48);
    assert_eq!(strip.mesh.triangle_count(), 96);
    assert!(strip.mesh.validate());

    // Waypoints run with increasing angle, so normals point away from the centre
    for (point, normal) in strip.polyline.points.iter().zip(&strip.normals) {
        assert!(normal.dot(*point) > 0.0);
    }
}

#[test]
fn flipped_curve_ribbon_points_inward() {
    let waypoints = circle_waypoints(5, 4.0);
    let params = CurveParams::default().with_closed(true);
    let ribbon = RibbonParams::default().with_width(1.0).with_flip(true);
    let strip = build_curve_ribbon(&waypoints, &params, &ribbon).unwrap();

    for (point, front) in strip.polyline.points.iter().zip(&strip.front) {
        assert!(front.length() < point.length());
    }
}

#[test]
fn cached_control_points_resample() {
    let waypoints = circle_waypoints(4, 2.0);
    let handles = generate_control_points(&waypoints, false, 1.0).unwrap();

    let coarse = generate_curve_points(&waypoints, &handles, false, 2).unwrap();
    let fine = generate_curve_points(&waypoints, &handles, false, 8).unwrap();
    assert_eq!(coarse.len(), 4 + 3);
    assert_eq!(fine.len(), 4 + 3 * 7);

    // The midpoint of the first span appears in both samplings
    assert_relative_eq!(coarse[1], fine[4], epsilon = 1e-12);
}

#[test]
fn two_waypoints_give_a_straight_ribbon() {
    let waypoints = [DVec3::ZERO, DVec3::new(4.0, 0.0, 0.0)];
    let strip = build_curve_ribbon(
        &waypoints,
        &CurveParams::default().with_closed(true),
        &RibbonParams::default(),
    )
    .unwrap();

    assert_eq!(strip.polyline.points, waypoints.to_vec());
    assert!(!strip.is_closed());
    assert_eq!(strip.mesh.triangle_count(), 2);
}

#[test]
fn one_waypoint_is_rejected() {
    let result = build_curve_ribbon(
        &[DVec3::ZERO],
        &CurveParams::default(),
        &RibbonParams::default(),
    );
    match result {
        Err(MeshError::InvalidInput { stage, .. }) => assert_eq!(stage, Stage::Curve),
        other => panic!("expected invalid input, got {other:?}"),
    }
}
