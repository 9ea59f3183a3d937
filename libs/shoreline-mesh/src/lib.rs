//! # Shoreline Mesh
//!
//! Builds foam and wave ribbons along the line where a water plane meets
//! terrain.
//!
//! ## Architecture
//!
//! ```text
//! TerrainMesh --intersect--> Segments --stitch--> Polylines --simplify--> Polylines
//!                                                                            |
//! Waypoints --bezier--> Polyline -----------------------------------------> ribbon --> RibbonMesh
//! ```
//!
//! ## Stages
//!
//! - **Intersect**: per-triangle cut against the horizontal water plane
//! - **Stitch**: greedy join of cut segments into open and closed polylines
//! - **Simplify**: drop near-collinear vertices in the XZ plane
//! - **Ribbon**: horizontal normals, offset rows and a UV-mapped strip mesh
//! - **Bezier**: dense curve through user waypoints for hand-placed ribbons
//!
//! [`ShorelinePipeline`] keeps each stage's output for the terrain workflow;
//! the stage functions can also be called directly.
//!
//! ## Usage
//!
//! ```rust
//! use shoreline_mesh::{build_curve_ribbon, CurveParams, RibbonParams};
//! use glam::DVec3;
//!
//! let waypoints = [
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(5.0, 0.0, 2.0),
//!     DVec3::new(10.0, 0.0, 0.0),
//! ];
//! let strip = build_curve_ribbon(
//!     &waypoints,
//!     &CurveParams::default(),
//!     &RibbonParams::default().with_width(1.5),
//! )
//! .unwrap();
//!
//! let buffers = strip.mesh.to_mesh_buffers();
//! assert_eq!(buffers.triangle_count(), 2 * (strip.polyline.len() - 1));
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod params;
pub mod pipeline;
pub mod polyline;

pub use error::{MeshError, MeshResult};
pub use export::MeshBuffers;
pub use mesh::{RibbonMesh, TerrainMesh, TerrainSource};
pub use ops::bezier::{
    build_curve_path, build_curve_ribbon, cubic_bezier, generate_control_points,
    generate_curve_points,
};
pub use ops::intersect::{
    edge_crossing, intersect_mesh, intersect_terrain, intersect_triangle, orient_segment,
};
pub use ops::ribbon::{
    assemble_mesh, build_ribbon, build_ribbons, compute_normals, offset_rows, RibbonStrip,
};
pub use ops::simplify::{simplify_polyline, simplify_polylines};
pub use ops::stitch::stitch_segments;
pub use params::Validate;
pub use pipeline::ShorelinePipeline;
pub use polyline::{ExclusionMask, Polyline, Segment};
pub use shoreline_types::{CurveParams, RibbonParams, ShorelineParams, Stage, WaterLevel};
