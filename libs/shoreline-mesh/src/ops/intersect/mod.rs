//! # Water Plane Intersection
//!
//! Cuts terrain triangles with the horizontal plane `y = height` and emits one
//! oriented [`Segment`] per crossing triangle.
//!
//! ## Algorithm Overview
//!
//! Each vertex is classified as above, below, or on the plane
//! (`|y - height| <= HEIGHT_EPSILON`). Depending on how many vertices are off
//! the plane:
//!
//! - **3 off**: the lone vertex on the minority side is cut towards the other
//!   two (vertices taken in descending height order)
//! - **2 off**: only when the two straddle the plane; the segment runs from the
//!   on-plane vertex to the crossing on the opposite edge
//! - **1 off**: only when that vertex is below the plane; the segment is the
//!   on-plane edge itself
//!
//! The two "only when" rules stop triangles that share an on-plane vertex or
//! edge from emitting the same piece twice.
//!
//! Every segment is then oriented so that `cross(normal, tail - head).y < 0`,
//! where `normal` is the triangle's averaged vertex normal flattened onto the
//! XZ plane.


use std::collections::HashSet;

use config::constants::{heights_equal, HEIGHT_EPSILON};
use glam::{DMat4, DVec3};
use shoreline_types::WaterLevel;

use crate::error::MeshResult;
use crate::mesh::{TerrainMesh, TerrainSource};
use crate::params::Validate;
use crate::polyline::Segment;

/// Cuts every terrain source with the water plane.
///
/// Sources are processed in order; a source whose `id` was already seen is
/// skipped. Segment indices in the result are what an [`ExclusionMask`]
/// refers to.
///
/// [`ExclusionMask`]: crate::ExclusionMask
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::{intersect_terrain, TerrainMesh, TerrainSource, WaterLevel};
/// use glam::DVec3;
///
/// let slope = TerrainMesh::with_computed_normals(
///     vec![
///         DVec3::new(0.0, -1.0, 0.0),
///         DVec3::new(2.0, -1.0, 0.0),
///         DVec3::new(1.0, 1.0, 1.0),
///     ],
///     vec![0, 2, 1],
/// )
/// .unwrap();
///
/// let segments = intersect_terrain(&[TerrainSource::new(1, &slope)], &WaterLevel::new(0.0)).unwrap();
/// assert_eq!(segments.len(), 1);
/// ```
pub fn intersect_terrain(
    sources: &[TerrainSource<'_>],
    water: &WaterLevel,
) -> MeshResult<Vec<Segment>> {
    water.validate()?;
    let height = water.cut_height();

    let mut seen = HashSet::with_capacity(sources.len());
    let mut segments = Vec::new();
    for source in sources {
        if !seen.insert(source.id) {
            log::trace!("skipping duplicate terrain source {}", source.id);
            continue;
        }
        intersect_mesh(source.mesh, &source.transform, height, &mut segments);
    }

    log::debug!(
        "intersect: {} sources at height {height} -> {} segments",
        seen.len(),
        segments.len()
    );
    Ok(segments)
}

/// Cuts one mesh, placed by `transform`, and appends its segments.
pub fn intersect_mesh(
    mesh: &TerrainMesh,
    transform: &DMat4,
    height: f64,
    segments: &mut Vec<Segment>,
) {
    let positions = mesh.positions();
    let normals = mesh.normals();
    // Normals go through the inverse transpose so non-uniform scale keeps them perpendicular
    let normal_matrix = transform.inverse().transpose();
    let before = segments.len();

    for [a, b, c] in mesh.triangles() {
        let vertices = [
            transform.transform_point3(positions[a]),
            transform.transform_point3(positions[b]),
            transform.transform_point3(positions[c]),
        ];
        let average = (normals[a] + normals[b] + normals[c]).normalize_or_zero();
        let world_normal = normal_matrix.transform_vector3(average);
        let flat_normal = DVec3::new(world_normal.x, 0.0, world_normal.z).normalize_or_zero();

        if let Some(segment) = intersect_triangle(vertices, flat_normal, height) {
            segments.push(segment);
        }
    }

    log::trace!(
        "intersect: {} triangles -> {} segments",
        mesh.triangle_count(),
        segments.len() - before
    );
}

/// Cuts a single world-space triangle.
///
/// `flat_normal` is the triangle's horizontal outward direction, used only
/// to orient the result. Returns `None` for triangles that do not cross the
/// plane, lie flat, or only touch it in a way a neighbour will report.
pub fn intersect_triangle(vertices: [DVec3; 3], flat_normal: DVec3, height: f64) -> Option<Segment> {
    let [v0, v1, v2] = vertices;
    if heights_equal(v0.y, v1.y) && heights_equal(v1.y, v2.y) {
        log::trace!("skipping horizontal triangle at y = {}", v0.y);
        return None;
    }

    let sides = vertices.map(|v| side_of(v.y - height));
    let off_plane = sides.iter().filter(|&&s| s != 0).count();
    let side_sum: i32 = sides.iter().sum();

    let segment = match off_plane {
        3 => {
            if side_sum.abs() == 3 {
                return None;
            }
            cut_straddling(vertices, side_sum, height)
        }
        2 => {
            if side_sum != 0 {
                return None;
            }
            let on = sides.iter().position(|&s| s == 0)?;
            let tail = edge_crossing(vertices[(on + 1) % 3], vertices[(on + 2) % 3], height);
            Segment::new(vertices[on], tail)
        }
        1 => {
            if side_sum > 0 {
                return None;
            }
            let off = sides.iter().position(|&s| s != 0)?;
            Segment::new(vertices[(off + 1) % 3], vertices[(off + 2) % 3])
        }
        // All three on the plane is a horizontal triangle, rejected above
        _ => return None,
    };

    if segment.is_degenerate() {
        return None;
    }
    Some(orient_segment(segment, flat_normal))
}

/// Orients a segment so the terrain lies on its left, viewed from above.
///
/// Keeps the segment when `cross(flat_normal, tail - head).y < 0`, otherwise
/// swaps head and tail.
#[inline]
pub fn orient_segment(segment: Segment, flat_normal: DVec3) -> Segment {
    if flat_normal.cross(segment.direction()).y < 0.0 {
        segment
    } else {
        segment.reversed()
    }
}

/// Point where the edge `a`-`b` crosses `y = height`.
///
/// Interpolates from the lower vertex to the higher one, so the two
/// triangles sharing an edge produce bit-identical points.
#[inline]
pub fn edge_crossing(a: DVec3, b: DVec3, height: f64) -> DVec3 {
    let (low, high) = if a.y <= b.y { (a, b) } else { (b, a) };
    let t = (height - low.y) / (high.y - low.y);
    low + (high - low) * t
}

#[inline]
fn side_of(delta: f64) -> i32 {
    if delta.abs() <= HEIGHT_EPSILON {
        0
    } else if delta > 0.0 {
        1
    } else {
        -1
    }
}

/// No vertex on the plane, one vertex alone on its side.
///
/// With vertices sorted by descending height, `side_sum` is +1 when the
/// lowest vertex is alone below and -1 when the highest is alone above, so
/// `side_sum + 1` is the lone vertex's sorted index.
fn cut_straddling(vertices: [DVec3; 3], side_sum: i32, height: f64) -> Segment {
    let mut sorted = vertices;
    sorted.sort_by(|a, b| b.y.total_cmp(&a.y));

    let lone = (side_sum + 1) as usize;
    let head = edge_crossing(sorted[(lone + 1) % 3], sorted[lone], height);
    let tail = edge_crossing(sorted[(lone + 2) % 3], sorted[lone], height);
    Segment::new(head, tail)
}
