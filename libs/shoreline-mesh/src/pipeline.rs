//! # Shoreline Pipeline
//!
//! Holds the output of every stage for the terrain workflow and recomputes
//! stages on demand.
//!
//! ```text
//! intersect -> segments -> stitch -> raw polylines -> simplify -> polylines -> ribbons
//! ```
//!
//! Running a stage replaces its output and drops everything downstream of
//! it. A failing stage leaves the pipeline untouched.

use shoreline_types::{RibbonParams, ShorelineParams, WaterLevel};

use crate::error::MeshResult;
use crate::mesh::TerrainSource;
use crate::ops::intersect::intersect_terrain;
use crate::ops::ribbon::{build_ribbons, RibbonStrip};
use crate::ops::simplify::simplify_polylines;
use crate::ops::stitch::stitch_segments;
use crate::params::Validate;
use crate::polyline::{ExclusionMask, Polyline, Segment};

/// Stage outputs of the terrain-to-ribbon workflow.
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::{ExclusionMask, ShorelineParams, ShorelinePipeline, TerrainMesh, TerrainSource};
/// use glam::DVec3;
///
/// // A pyramid poking out of the water
/// let island = TerrainMesh::with_computed_normals(
///     vec![
///         DVec3::new(0.0, 1.0, 0.0),
///         DVec3::new(1.0, -1.0, -1.0),
///         DVec3::new(1.0, -1.0, 1.0),
///         DVec3::new(-1.0, -1.0, 1.0),
///         DVec3::new(-1.0, -1.0, -1.0),
///     ],
///     vec![0, 2, 1, 0, 3, 2, 0, 4, 3, 0, 1, 4],
/// )
/// .unwrap();
///
/// let mut pipeline = ShorelinePipeline::new(ShorelineParams::default()).unwrap();
/// pipeline.intersect(&[TerrainSource::new(1, &island)]).unwrap();
/// pipeline.stitch(&ExclusionMask::new()).unwrap();
/// let strips = pipeline.build_ribbons().unwrap();
///
/// assert_eq!(strips.len(), 1);
/// assert!(strips[0].is_closed());
/// ```
#[derive(Debug, Clone)]
pub struct ShorelinePipeline {
    params: ShorelineParams,
    segments: Vec<Segment>,
    raw_polylines: Vec<Polyline>,
    polylines: Vec<Polyline>,
    strips: Vec<RibbonStrip>,
}

impl ShorelinePipeline {
    /// Creates an empty pipeline.
    pub fn new(params: ShorelineParams) -> MeshResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            segments: Vec::new(),
            raw_polylines: Vec::new(),
            polylines: Vec::new(),
            strips: Vec::new(),
        })
    }

    // ===== ACCESSORS =====

    /// Current parameters.
    pub fn params(&self) -> &ShorelineParams {
        &self.params
    }

    /// Segments from the last intersection.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Polylines from the last stitch, before simplification.
    pub fn raw_polylines(&self) -> &[Polyline] {
        &self.raw_polylines
    }

    /// Simplified polylines.
    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    /// Ribbon strips from the last build.
    pub fn strips(&self) -> &[RibbonStrip] {
        &self.strips
    }

    // ===== STAGES =====

    /// Changes the water level. Every stage output is dropped.
    pub fn set_water(&mut self, water: WaterLevel) -> MeshResult<()> {
        water.validate()?;
        self.params.water = water;
        self.segments.clear();
        self.clear_from_stitch();
        Ok(())
    }

    /// Cuts the terrain at the current water level.
    pub fn intersect(&mut self, sources: &[TerrainSource<'_>]) -> MeshResult<&[Segment]> {
        let segments = intersect_terrain(sources, &self.params.water)?;
        self.segments = segments;
        self.clear_from_stitch();
        Ok(&self.segments)
    }

    /// Stitches the current segments, leaving out `exclusion`, then
    /// simplifies with the current collinearity threshold.
    pub fn stitch(&mut self, exclusion: &ExclusionMask) -> MeshResult<&[Polyline]> {
        let raw = stitch_segments(&self.segments, exclusion)?;
        let simplified = simplify_polylines(&raw, self.params.collinear_epsilon)?;
        self.raw_polylines = raw;
        self.polylines = simplified;
        self.strips.clear();
        Ok(&self.polylines)
    }

    /// Re-simplifies the raw polylines with a new threshold.
    pub fn simplify(&mut self, epsilon: f64) -> MeshResult<&[Polyline]> {
        let simplified = simplify_polylines(&self.raw_polylines, epsilon)?;
        self.params.collinear_epsilon = epsilon;
        self.polylines = simplified;
        self.strips.clear();
        Ok(&self.polylines)
    }

    /// Builds one ribbon per simplified polyline with the current ribbon
    /// parameters.
    pub fn build_ribbons(&mut self) -> MeshResult<&[RibbonStrip]> {
        self.strips = build_ribbons(&self.polylines, &self.params.ribbon)?;
        Ok(&self.strips)
    }

    /// Changes width, offset or flip and rebuilds the rows of existing
    /// strips from their cached normals.
    pub fn set_ribbon(&mut self, ribbon: RibbonParams) -> MeshResult<&[RibbonStrip]> {
        ribbon.validate()?;
        for strip in &mut self.strips {
            strip.rebuild_rows(&ribbon)?;
        }
        self.params.ribbon = ribbon;
        Ok(&self.strips)
    }

    /// Runs every stage in order.
    pub fn run(
        &mut self,
        sources: &[TerrainSource<'_>],
        exclusion: &ExclusionMask,
    ) -> MeshResult<&[RibbonStrip]> {
        self.intersect(sources)?;
        self.stitch(exclusion)?;
        self.build_ribbons()
    }

    fn clear_from_stitch(&mut self) {
        self.raw_polylines.clear();
        self.polylines.clear();
        self.strips.clear();
    }
}
