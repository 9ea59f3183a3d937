//! # Collinear Simplification
//!
//! Removes interior polyline vertices that lie (nearly) on the line through
//! their neighbours, measured in the horizontal XZ plane.
//!
//! ## Sweep
//!
//! A `head` cursor stays on the last kept vertex while `tail` walks forward;
//! `mid` is always the vertex just before `tail`. When the planar cross
//! product of `head -> mid` and `mid -> tail` is below epsilon, `mid` is
//! marked and `head` stays put, so a long straight run collapses onto its
//! first vertex. Closed polylines get a second sweep across the seam.
//!
//! The cross product is not normalized, so the threshold scales with the
//! squared edge length.


use std::collections::BTreeSet;

use config::constants::MIN_LOOP_POINTS;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::polyline::Polyline;

/// Removes near-collinear interior vertices from `polyline`.
///
/// The input is left untouched; simplifying again with another epsilon
/// should start from the same source polyline.
///
/// # Errors
///
/// Fails if `epsilon` is not a finite positive number.
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::{simplify_polyline, Polyline};
/// use glam::DVec3;
///
/// let line = Polyline::open(vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 1.0),
///     DVec3::new(2.0, 0.0, 2.0),
/// ]);
/// let simplified = simplify_polyline(&line, 1e-4).unwrap();
/// assert_eq!(simplified.len(), 2);
/// ```
pub fn simplify_polyline(polyline: &Polyline, epsilon: f64) -> MeshResult<Polyline> {
    check_epsilon(epsilon)?;
    Ok(simplify_unchecked(polyline, epsilon))
}

/// Simplifies every polyline with the same epsilon.
pub fn simplify_polylines(polylines: &[Polyline], epsilon: f64) -> MeshResult<Vec<Polyline>> {
    check_epsilon(epsilon)?;

    let simplified: Vec<Polyline> = polylines
        .iter()
        .map(|polyline| simplify_unchecked(polyline, epsilon))
        .collect();

    let before: usize = polylines.iter().map(Polyline::len).sum();
    let after: usize = simplified.iter().map(Polyline::len).sum();
    log::debug!(
        "simplify: {} polylines, {before} -> {after} vertices (epsilon {epsilon})",
        polylines.len()
    );
    Ok(simplified)
}

fn check_epsilon(epsilon: f64) -> MeshResult<()> {
    if epsilon.is_finite() && epsilon > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            "collinear_epsilon",
            epsilon,
            "must be a finite positive number",
        ))
    }
}

fn simplify_unchecked(polyline: &Polyline, epsilon: f64) -> Polyline {
    let points = &polyline.points;
    let count = points.len();
    if count < 3 {
        return polyline.clone();
    }

    let mut removed = BTreeSet::new();

    // ===== FORWARD SWEEP =====
    let mut head = 0;
    for tail in 2..count {
        let mid = tail - 1;
        if is_collinear(points[head], points[mid], points[tail], epsilon) {
            removed.insert(mid);
        } else {
            head = mid;
        }
    }

    // ===== SEAM SWEEP =====
    // The last vertex against its wrapped neighbour, then the first vertex
    // against the next survivor of the forward sweep.
    if polyline.closed {
        let after_first = (1..count)
            .find(|index| !removed.contains(index))
            .unwrap_or(1);
        for (mid, tail) in [(count - 1, 0), (0, after_first)] {
            if head == mid || head == tail || mid == tail {
                continue;
            }
            if is_collinear(points[head], points[mid], points[tail], epsilon) {
                removed.insert(mid);
            } else {
                head = mid;
            }
        }
    }

    let kept: Vec<DVec3> = points
        .iter()
        .enumerate()
        .filter(|(index, _)| !removed.contains(index))
        .map(|(_, point)| *point)
        .collect();

    // A loop flattened onto a line is no longer a loop
    let closed = polyline.closed && kept.len() >= MIN_LOOP_POINTS;
    if !removed.is_empty() {
        log::trace!("simplify: removed {} of {count} vertices", removed.len());
    }
    Polyline::new(kept, closed)
}

/// Planar (XZ) collinearity test of the corner at `mid`.
#[inline]
fn is_collinear(head: DVec3, mid: DVec3, tail: DVec3, epsilon: f64) -> bool {
    let head_to_mid = mid - head;
    let mid_to_tail = tail - mid;
    let cross = head_to_mid.x * mid_to_tail.z - head_to_mid.z * mid_to_tail.x;
    cross.abs() < epsilon
}
