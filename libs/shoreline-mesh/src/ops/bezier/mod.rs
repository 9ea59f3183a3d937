//! # Bezier Paths
//!
//! Fits a piecewise cubic Bezier through user-placed waypoints and samples it
//! into a dense polyline, which can then be turned into a ribbon.
//!
//! ## Control Points
//!
//! Each span `i` runs from waypoint `i` to waypoint `i + 1` with handles
//! `control[2i]` and `control[2i + 1]`. An interior waypoint gets a pair of
//! handles offset by `k / 4 * (next - previous)` on either side. On an open
//! path the first and last handles sit halfway (scaled by `k`) toward the
//! neighbouring interior handle. A loop wraps the interior rule around the
//! seam instead.
//!
//! ## Sampling
//!
//! Every span is evaluated at `t = j / split` for `j` in `0..split`, so the
//! span start is included and the span end is left to the next span. An open
//! path then appends its final waypoint.


use glam::DVec3;
use shoreline_types::{CurveParams, RibbonParams, Stage};

use config::constants::{MIN_CURVE_POINTS, MIN_PATH_POINTS, MIN_SPLIT_COUNT};

use crate::error::{MeshError, MeshResult};
use crate::ops::ribbon::{build_ribbon_for, RibbonStrip};
use crate::params::Validate;
use crate::polyline::Polyline;

// =============================================================================
// CONTROL POINTS
// =============================================================================

/// Derives the Bezier handles for `waypoints`.
///
/// Returns `2n - 2` handles for an open path and `2n` for a loop.
///
/// # Errors
///
/// Fails with fewer than three waypoints, or if `k` is outside [0, 1].
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::generate_control_points;
/// use glam::DVec3;
///
/// let waypoints = [DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)];
/// let handles = generate_control_points(&waypoints, false, 1.0).unwrap();
///
/// assert_eq!(handles.len(), 4);
/// assert_eq!(handles[1], DVec3::new(0.5, 0.0, 0.0));
/// ```
pub fn generate_control_points(waypoints: &[DVec3], closed: bool, k: f64) -> MeshResult<Vec<DVec3>> {
    let count = waypoints.len();
    if count < MIN_CURVE_POINTS {
        return Err(MeshError::invalid_input(
            Stage::Curve,
            format!("fitting a curve needs at least {MIN_CURVE_POINTS} waypoints, got {count}"),
        ));
    }
    if !(0.0..=1.0).contains(&k) {
        return Err(MeshError::invalid_parameter("shape", k, "must be within [0, 1]"));
    }

    let handle_count = if closed { 2 * count } else { 2 * count - 2 };
    let mut handles = vec![DVec3::ZERO; handle_count];
    let tangent = |previous: DVec3, next: DVec3| (next - previous) * (k * 0.25);

    for i in 1..count - 1 {
        let offset = tangent(waypoints[i - 1], waypoints[i + 1]);
        handles[2 * i - 1] = waypoints[i] - offset;
        handles[2 * i] = waypoints[i] + offset;
    }

    let last = count - 1;
    if closed {
        let offset = tangent(waypoints[last], waypoints[1]);
        handles[2 * count - 1] = waypoints[0] - offset;
        handles[0] = waypoints[0] + offset;

        let offset = tangent(waypoints[last - 1], waypoints[0]);
        handles[2 * count - 3] = waypoints[last] - offset;
        handles[2 * count - 2] = waypoints[last] + offset;
    } else {
        handles[0] = waypoints[0] + (handles[1] - waypoints[0]) * (k * 0.5);
        handles[2 * count - 3] =
            waypoints[last] + (handles[2 * count - 4] - waypoints[last]) * (k * 0.5);
    }

    Ok(handles)
}

// =============================================================================
// SAMPLING
// =============================================================================

/// Samples the curve through `waypoints` with the given handles.
///
/// Produces `n + spans * (split - 1)` points, where `spans` is `n - 1` for an
/// open path and `n` for a loop. An open path starts and ends exactly on its
/// first and last waypoints.
///
/// # Errors
///
/// Fails with fewer than two waypoints, a handle count that does not match
/// the waypoints, or `split < 2`.
pub fn generate_curve_points(
    waypoints: &[DVec3],
    control_points: &[DVec3],
    closed: bool,
    split: usize,
) -> MeshResult<Vec<DVec3>> {
    let count = waypoints.len();
    if count < MIN_PATH_POINTS {
        return Err(MeshError::invalid_input(
            Stage::Curve,
            format!("sampling a curve needs at least {MIN_PATH_POINTS} waypoints, got {count}"),
        ));
    }
    let spans = if closed { count } else { count - 1 };
    if control_points.len() != 2 * spans {
        return Err(MeshError::invalid_input(
            Stage::Curve,
            format!(
                "expected {} control points for {count} waypoints, got {}",
                2 * spans,
                control_points.len()
            ),
        ));
    }
    if split < MIN_SPLIT_COUNT {
        return Err(MeshError::invalid_parameter(
            "split_count",
            split,
            "must be at least 2",
        ));
    }

    let mut curve = Vec::with_capacity(count + spans * (split - 1));
    for span in 0..spans {
        let start = waypoints[span];
        let end = waypoints[(span + 1) % count];
        let handle_out = control_points[2 * span];
        let handle_in = control_points[2 * span + 1];

        curve.push(start);
        for step in 1..split {
            let t = step as f64 / split as f64;
            curve.push(cubic_bezier(start, handle_out, handle_in, end, t));
        }
    }
    if !closed {
        curve.push(waypoints[count - 1]);
    }

    Ok(curve)
}

/// Evaluates a cubic Bezier in Bernstein form.
#[inline]
pub fn cubic_bezier(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3, t: f64) -> DVec3 {
    let s = 1.0 - t;
    p0 * (s * s * s) + p1 * (3.0 * t * s * s) + p2 * (3.0 * t * t * s) + p3 * (t * t * t)
}

// =============================================================================
// PATHS AND RIBBONS
// =============================================================================

/// Builds the polyline a ribbon follows for the given waypoints.
///
/// Two waypoints give a straight open path. From three on, the path is the
/// sampled curve, closed when `params.closed` is set.
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::{build_curve_path, CurveParams};
/// use glam::DVec3;
///
/// let waypoints = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 0.0, 1.0)];
/// let path = build_curve_path(&waypoints, &CurveParams::default().with_split_count(4)).unwrap();
///
/// assert_eq!(path.len(), 9);
/// assert_eq!(path.points[0], waypoints[0]);
/// assert_eq!(path.points[8], waypoints[2]);
/// ```
pub fn build_curve_path(waypoints: &[DVec3], params: &CurveParams) -> MeshResult<Polyline> {
    params.validate()?;
    if waypoints.len() < MIN_PATH_POINTS {
        return Err(MeshError::invalid_input(
            Stage::Curve,
            format!(
                "a path needs at least {MIN_PATH_POINTS} waypoints, got {}",
                waypoints.len()
            ),
        ));
    }

    if waypoints.len() < MIN_CURVE_POINTS {
        log::trace!("curve: {} waypoints, using them as a straight path", waypoints.len());
        return Ok(Polyline::open(waypoints.to_vec()));
    }

    let handles = generate_control_points(waypoints, params.closed, params.shape)?;
    let points = generate_curve_points(waypoints, &handles, params.closed, params.split_count)?;
    log::debug!(
        "curve: {} waypoints -> {} samples ({})",
        waypoints.len(),
        points.len(),
        if params.closed { "closed" } else { "open" }
    );
    Ok(Polyline::new(points, params.closed))
}

/// Builds the ribbon strip along the curve through `waypoints`.
pub fn build_curve_ribbon(
    waypoints: &[DVec3],
    curve: &CurveParams,
    ribbon: &RibbonParams,
) -> MeshResult<RibbonStrip> {
    let path = build_curve_path(waypoints, curve)?;
    build_ribbon_for(&path, ribbon, Stage::Curve)
}
