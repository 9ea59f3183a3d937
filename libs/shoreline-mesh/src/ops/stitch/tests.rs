//! # Stitching Tests
//!
//! Tests for joining segments into polylines.

use super::*;
use glam::DVec3;

fn p(x: f64, z: f64) -> DVec3 {
    DVec3::new(x, 0.0, z)
}

fn unit_square_loop() -> Vec<Segment> {
    vec![
        Segment::new(p(0.0, 0.0), p(1.0, 0.0)),
        Segment::new(p(1.0, 0.0), p(1.0, 1.0)),
        Segment::new(p(1.0, 1.0), p(0.0, 1.0)),
        Segment::new(p(0.0, 1.0), p(0.0, 0.0)),
    ]
}

/// Checks that `points` is `expected` rotated to some start index.
fn is_rotation_of(points: &[DVec3], expected: &[DVec3]) -> bool {
    points.len() == expected.len()
        && (0..expected.len()).any(|shift| {
            points
                .iter()
                .enumerate()
                .all(|(i, point)| *point == expected[(i + shift) % expected.len()])
        })
}

#[test]
fn test_square_loop_closes() {
    let polylines = stitch_segments(&unit_square_loop(), &ExclusionMask::new()).unwrap();

    assert_eq!(polylines.len(), 1);
    let square = &polylines[0];
    assert!(square.closed);
    assert_eq!(square.len(), 4);
    assert!(is_rotation_of(
        &square.points,
        &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    ));
}

#[test]
fn test_open_chain() {
    let segments = vec![
        Segment::new(p(1.0, 0.0), p(2.0, 0.0)),
        Segment::new(p(2.0, 0.0), p(3.0, 1.0)),
        Segment::new(p(0.0, 0.0), p(1.0, 0.0)),
    ];
    let polylines = stitch_segments(&segments, &ExclusionMask::new()).unwrap();

    assert_eq!(polylines.len(), 1);
    assert!(!polylines[0].closed);
    assert_eq!(
        polylines[0].points,
        vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 1.0)]
    );
}

#[test]
fn test_chain_grows_at_both_ends() {
    // The last segment seeds the chain in the middle
    let segments = vec![
        Segment::new(p(0.0, 0.0), p(1.0, 0.0)),
        Segment::new(p(3.0, 0.0), p(4.0, 0.0)),
        Segment::new(p(2.0, 0.0), p(3.0, 0.0)),
        Segment::new(p(1.0, 0.0), p(2.0, 0.0)),
    ];
    let polylines = stitch_segments(&segments, &ExclusionMask::new()).unwrap();

    assert_eq!(polylines.len(), 1);
    let xs: Vec<f64> = polylines[0].points.iter().map(|v| v.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_empty_input() {
    let polylines = stitch_segments(&[], &ExclusionMask::new()).unwrap();
    assert!(polylines.is_empty());
}

#[test]
fn test_everything_excluded() {
    let segments = unit_square_loop();
    let mask: ExclusionMask = (0..segments.len()).collect();
    let polylines = stitch_segments(&segments, &mask).unwrap();
    assert!(polylines.is_empty());
}

#[test]
fn test_excluding_one_side_opens_the_loop() {
    let mask: ExclusionMask = [2].into_iter().collect();
    let polylines = stitch_segments(&unit_square_loop(), &mask).unwrap();

    assert_eq!(polylines.len(), 1);
    assert!(!polylines[0].closed);
    assert_eq!(
        polylines[0].points,
        vec![p(0.0, 1.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]
    );
}

#[test]
fn test_exclusion_out_of_range() {
    let mask: ExclusionMask = [4].into_iter().collect();
    let result = stitch_segments(&unit_square_loop(), &mask);
    assert!(matches!(result, Err(MeshError::InvalidInput { .. })));
}

#[test]
fn test_exclusion_mask_is_not_modified() {
    let mask: ExclusionMask = [1].into_iter().collect();
    let before = mask.clone();
    stitch_segments(&unit_square_loop(), &mask).unwrap();
    assert_eq!(mask, before);
}

#[test]
fn test_two_separate_loops() {
    let mut segments = unit_square_loop();
    segments.extend(unit_square_loop().into_iter().map(|s| {
        Segment::new(s.head + DVec3::new(5.0, 0.0, 0.0), s.tail + DVec3::new(5.0, 0.0, 0.0))
    }));
    let polylines = stitch_segments(&segments, &ExclusionMask::new()).unwrap();

    assert_eq!(polylines.len(), 2);
    assert!(polylines.iter().all(|p| p.closed && p.len() == 4));
}

#[test]
fn test_opposed_directions_do_not_join() {
    // Both segments start at the same point, so neither head meets a tail
    let segments = vec![
        Segment::new(p(0.0, 0.0), p(1.0, 0.0)),
        Segment::new(p(0.0, 0.0), p(-1.0, 0.0)),
    ];
    let polylines = stitch_segments(&segments, &ExclusionMask::new()).unwrap();
    assert_eq!(polylines.len(), 2);
    assert!(polylines.iter().all(|p| p.len() == 2 && !p.closed));
}

#[test]
fn test_degenerate_segments_are_dropped() {
    let mut segments = unit_square_loop();
    segments.push(Segment::new(p(9.0, 9.0), p(9.0, 9.0)));
    let polylines = stitch_segments(&segments, &ExclusionMask::new()).unwrap();
    assert_eq!(polylines.len(), 1);
}
