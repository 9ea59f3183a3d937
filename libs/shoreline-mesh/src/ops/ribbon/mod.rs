//! # Offset Ribbon
//!
//! Builds a strip mesh alongside a polyline.
//!
//! ## Steps
//!
//! 1. **Normals**: one horizontal unit normal per vertex, perpendicular to
//!    the adjacent edges (`up x edge`). Interior vertices average the two
//!    edge normals; endpoints of an open polyline use their single edge.
//! 2. **Rows**: `front = v + n * (offset + width)` and `back = v + n * offset`,
//!    both negated when the ribbon is flipped.
//! 3. **Mesh**: columns `[front_i, back_i]` recentered around the mean of all
//!    row points, `u` along the front row's arc length, `v` 0 on the front
//!    and 1 on the back, two triangles per column pair.
//!
//! Closed polylines get a closing quad. Its far column is a copy of the
//! first column with `u = 1`, so the texture seam stays clean.


use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use shoreline_types::{RibbonParams, Stage};

use config::constants::MIN_PATH_POINTS;

use crate::error::{MeshError, MeshResult};
use crate::mesh::RibbonMesh;
use crate::params::Validate;
use crate::polyline::Polyline;

// =============================================================================
// RIBBON STRIP
// =============================================================================

/// Everything derived from one polyline: normals, offset rows and the mesh.
///
/// Rows and mesh can be rebuilt from the cached normals when only the width,
/// offset or flip change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RibbonStrip {
    /// Source polyline
    pub polyline: Polyline,
    /// Outward horizontal unit normal per polyline vertex
    pub normals: Vec<DVec3>,
    /// Outer row, world space
    pub front: Vec<DVec3>,
    /// Inner row, world space
    pub back: Vec<DVec3>,
    /// Triangulated strip
    pub mesh: RibbonMesh,
}

impl RibbonStrip {
    /// True if the strip wraps around with a closing quad.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.polyline.is_loop()
    }

    /// Recomputes rows and mesh for new ribbon parameters, reusing normals.
    pub fn rebuild_rows(&mut self, params: &RibbonParams) -> MeshResult<()> {
        params.validate()?;
        let (front, back) = offset_rows(&self.polyline.points, &self.normals, params);
        self.mesh = assemble_mesh(&front, &back, self.is_closed(), params.flip);
        self.front = front;
        self.back = back;
        Ok(())
    }
}

// =============================================================================
// BUILD
// =============================================================================

/// Builds the ribbon strip for one polyline.
///
/// A polyline flagged closed with fewer than three points is built open.
///
/// # Errors
///
/// Fails if the polyline has fewer than two points or the ribbon parameters
/// are out of range.
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::{build_ribbon, Polyline, RibbonParams};
/// use glam::DVec3;
///
/// let line = Polyline::open(vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)]);
/// let strip = build_ribbon(&line, &RibbonParams::default()).unwrap();
///
/// assert_eq!(strip.mesh.vertex_count(), 6);
/// assert_eq!(strip.mesh.triangle_count(), 4);
/// ```
pub fn build_ribbon(polyline: &Polyline, params: &RibbonParams) -> MeshResult<RibbonStrip> {
    build_ribbon_for(polyline, params, Stage::Ribbon)
}

/// Builds one ribbon strip per polyline.
pub fn build_ribbons(polylines: &[Polyline], params: &RibbonParams) -> MeshResult<Vec<RibbonStrip>> {
    let strips = polylines
        .iter()
        .map(|polyline| build_ribbon(polyline, params))
        .collect::<MeshResult<Vec<_>>>()?;

    log::debug!(
        "ribbon: {} strips, {} triangles",
        strips.len(),
        strips.iter().map(|s| s.mesh.triangle_count()).sum::<usize>()
    );
    Ok(strips)
}

/// Shared by the shoreline and curve workflows; `stage` tags errors.
pub(crate) fn build_ribbon_for(
    polyline: &Polyline,
    params: &RibbonParams,
    stage: Stage,
) -> MeshResult<RibbonStrip> {
    if polyline.len() < MIN_PATH_POINTS {
        return Err(MeshError::invalid_input(
            stage,
            format!(
                "a ribbon needs at least {MIN_PATH_POINTS} points, got {}",
                polyline.len()
            ),
        ));
    }
    params.validate()?;

    let normals = compute_normals(polyline);
    let (front, back) = offset_rows(&polyline.points, &normals, params);
    let mesh = assemble_mesh(&front, &back, polyline.is_loop(), params.flip);

    Ok(RibbonStrip {
        polyline: polyline.clone(),
        normals,
        front,
        back,
        mesh,
    })
}

// =============================================================================
// NORMALS
// =============================================================================

/// Computes one horizontal unit normal per vertex.
///
/// Vertices of a loop (closed with at least three points) wrap around to
/// their neighbours across the seam. Zero-length edges contribute a zero
/// normal rather than NaN.
pub fn compute_normals(polyline: &Polyline) -> Vec<DVec3> {
    let points = &polyline.points;
    let count = points.len();
    if count < MIN_PATH_POINTS {
        return vec![DVec3::ZERO; count];
    }

    let edge_normal =
        |from: usize, to: usize| DVec3::Y.cross(points[to] - points[from]).normalize_or_zero();
    let corner_normal = |prev: usize, cur: usize, next: usize| {
        (edge_normal(prev, cur) + edge_normal(cur, next)).normalize_or_zero()
    };

    let last = count - 1;
    let mut normals = Vec::with_capacity(count);

    if polyline.is_loop() {
        normals.push(corner_normal(last, 0, 1));
    } else {
        normals.push(edge_normal(0, 1));
    }

    for index in 1..last {
        normals.push(corner_normal(index - 1, index, index + 1));
    }

    if polyline.is_loop() {
        normals.push(corner_normal(last - 1, last, 0));
    } else {
        normals.push(edge_normal(last - 1, last));
    }

    normals
}

// =============================================================================
// OFFSET ROWS
// =============================================================================

/// Offsets each point along its normal into the front and back rows.
pub fn offset_rows(
    points: &[DVec3],
    normals: &[DVec3],
    params: &RibbonParams,
) -> (Vec<DVec3>, Vec<DVec3>) {
    let front_distance = params.front_distance();
    let back_distance = params.back_distance();

    points
        .iter()
        .zip(normals)
        .map(|(point, normal)| {
            (
                *point + *normal * front_distance,
                *point + *normal * back_distance,
            )
        })
        .unzip()
}

// =============================================================================
// MESH ASSEMBLY
// =============================================================================

/// Triangulates the strip between `front` and `back`.
///
/// Vertices are interleaved as `[front0, back0, front1, back1, ..]` and
/// recentered around the mean of all row points, which becomes the mesh
/// origin. `flip` reverses the triangle winding.
pub fn assemble_mesh(front: &[DVec3], back: &[DVec3], closed: bool, flip: bool) -> RibbonMesh {
    let columns = front.len().min(back.len());
    if columns == 0 {
        return RibbonMesh::default();
    }

    let origin = front[..columns]
        .iter()
        .chain(&back[..columns])
        .fold(DVec3::ZERO, |sum, p| sum + *p)
        / (2 * columns) as f64;

    // Column order, with the first column repeated at the end of a loop
    let order: Vec<usize> = if closed {
        (0..columns).chain(std::iter::once(0)).collect()
    } else {
        (0..columns).collect()
    };

    // ===== VERTICES AND ARC LENGTH =====
    let mut vertices = Vec::with_capacity(order.len() * 2);
    let mut distances = Vec::with_capacity(order.len());
    let mut total = 0.0;
    let mut previous: Option<DVec3> = None;
    for &column in &order {
        let front_point = front[column] - origin;
        if let Some(previous) = previous {
            total += previous.distance(front_point);
        }
        previous = Some(front_point);
        distances.push(total);

        vertices.push(front_point);
        vertices.push(back[column] - origin);
    }

    // ===== UVS =====
    let mut uvs = Vec::with_capacity(vertices.len());
    for (position, distance) in distances.iter().enumerate() {
        let u = if closed && position == columns {
            1.0
        } else if total > 0.0 {
            distance / total
        } else {
            0.0
        };
        uvs.push(DVec2::new(u, 0.0));
        uvs.push(DVec2::new(u, 1.0));
    }

    // ===== TRIANGLES =====
    let quads = order.len() - 1;
    let mut triangles = Vec::with_capacity(quads * 6);
    for quad in 0..quads {
        let v = (quad * 2) as u32;
        if flip {
            triangles.extend_from_slice(&[v, v + 2, v + 3, v + 3, v + 1, v]);
        } else {
            triangles.extend_from_slice(&[v, v + 3, v + 2, v + 1, v + 3, v]);
        }
    }

    RibbonMesh {
        vertices,
        uvs,
        triangles,
        origin,
    }
}
