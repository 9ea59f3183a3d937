//! # Segment Stitching
//!
//! Joins the unordered segments from the intersect stage into polylines.
//!
//! ## Algorithm Overview
//!
//! Greedy and order-preserving:
//! 1. Pop a segment from the pool; its head and tail seed a new polyline
//! 2. Scan the pool: a segment whose head equals the polyline's last point is
//!    appended, one whose tail equals the first point is prepended
//! 3. Repeat the scan until a pass adds nothing or the pool runs dry
//! 4. A polyline whose ends coincide is closed and loses its duplicate end
//!
//! Points are compared exactly. The intersect stage computes shared crossing
//! points identically on both sides of an edge, so exact matching is enough.

#[cfg(test)]
mod tests;

use std::collections::VecDeque;

use glam::DVec3;
use shoreline_types::Stage;

use crate::error::{MeshError, MeshResult};
use crate::polyline::{ExclusionMask, Polyline, Segment};

/// Stitches segments into open and closed polylines.
///
/// Segments whose index is in `exclusion` are left out. The order of the
/// returned polylines carries no meaning.
///
/// # Errors
///
/// Fails if `exclusion` names an index past the end of `segments`.
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::{stitch_segments, ExclusionMask, Segment};
/// use glam::DVec3;
///
/// let a = DVec3::new(0.0, 0.0, 0.0);
/// let b = DVec3::new(1.0, 0.0, 0.0);
/// let c = DVec3::new(1.0, 0.0, 1.0);
/// let segments = [Segment::new(b, c), Segment::new(a, b)];
///
/// let polylines = stitch_segments(&segments, &ExclusionMask::new()).unwrap();
/// assert_eq!(polylines.len(), 1);
/// assert_eq!(polylines[0].points, vec![a, b, c]);
/// assert!(!polylines[0].closed);
/// ```
pub fn stitch_segments(segments: &[Segment], exclusion: &ExclusionMask) -> MeshResult<Vec<Polyline>> {
    if let Some(max) = exclusion.max_index() {
        if max >= segments.len() {
            return Err(MeshError::invalid_input(
                Stage::Stitch,
                format!(
                    "exclusion index {max} out of range for {} segments",
                    segments.len()
                ),
            ));
        }
    }

    let mut pool: Vec<Segment> = segments
        .iter()
        .enumerate()
        .filter(|&(index, segment)| !exclusion.contains(index) && !segment.is_degenerate())
        .map(|(_, segment)| *segment)
        .collect();

    let mut polylines = Vec::new();
    while let Some(seed) = pool.pop() {
        let points = grow_chain(seed, &mut pool);
        polylines.push(finish_chain(points));
    }

    let closed = polylines.iter().filter(|p| p.closed).count();
    log::debug!(
        "stitch: {} segments ({} excluded) -> {} polylines ({closed} closed, {} open)",
        segments.len(),
        exclusion.len(),
        polylines.len(),
        polylines.len() - closed
    );
    Ok(polylines)
}

/// Extends a chain from `seed` until no pooled segment attaches to either end.
fn grow_chain(seed: Segment, pool: &mut Vec<Segment>) -> VecDeque<DVec3> {
    let mut points = VecDeque::from([seed.head, seed.tail]);

    while !pool.is_empty() {
        let mut attached = false;
        for index in (0..pool.len()).rev() {
            let segment = pool[index];
            if points.back() == Some(&segment.head) {
                points.push_back(segment.tail);
            } else if points.front() == Some(&segment.tail) {
                points.push_front(segment.head);
            } else {
                continue;
            }
            pool.remove(index);
            attached = true;
        }

        if !attached {
            break;
        }
    }

    points
}

fn finish_chain(points: VecDeque<DVec3>) -> Polyline {
    let mut points = Vec::from(points);
    let closed = points.len() > 2 && points.first() == points.last();
    if closed {
        points.pop();
    }
    Polyline::new(points, closed)
}
