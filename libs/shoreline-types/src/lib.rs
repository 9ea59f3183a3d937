//! Parameter types shared between the shoreline geometry core and its host.
//!
//! Everything here is plain data with serde support so an editor or a
//! scripting layer can persist the user's settings and hand them back.

use std::fmt;

use config::constants::{
    clamp_collinear_epsilon, clamp_split_count, DEFAULT_COLLINEAR_EPSILON, DEFAULT_CURVE_SHAPE,
    DEFAULT_RIBBON_OFFSET, DEFAULT_RIBBON_WIDTH, DEFAULT_SPLIT_COUNT,
};
use serde::{Deserialize, Serialize};

/// Pipeline stage, used to attribute errors and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Intersect,
    Stitch,
    Simplify,
    Ribbon,
    Curve,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Intersect => "intersect",
            Stage::Stitch => "stitch",
            Stage::Simplify => "simplify",
            Stage::Ribbon => "ribbon",
            Stage::Curve => "curve",
        };
        f.write_str(name)
    }
}

/// Height of the horizontal cutting plane.
///
/// The cut happens at `height + offset`; the offset lets a user lift or sink
/// the shoreline without moving the water surface itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WaterLevel {
    pub height: f64,
    pub offset: f64,
}

impl WaterLevel {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            offset: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Final cut height.
    #[inline]
    pub fn cut_height(&self) -> f64 {
        self.height + self.offset
    }
}

/// Shape of the offset ribbon built along a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RibbonParams {
    /// Radial width between the back and front rows (>= 0)
    pub width: f64,
    /// Radial offset of the back row from the polyline (any sign)
    pub offset: f64,
    /// Mirrors the ribbon to the other side and reverses triangle winding
    pub flip: bool,
}

impl Default for RibbonParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_RIBBON_WIDTH,
            offset: DEFAULT_RIBBON_OFFSET,
            flip: false,
        }
    }
}

impl RibbonParams {
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Signed distance from the polyline to the front row.
    #[inline]
    pub fn front_distance(&self) -> f64 {
        self.sign() * (self.offset + self.width)
    }

    /// Signed distance from the polyline to the back row.
    #[inline]
    pub fn back_distance(&self) -> f64 {
        self.sign() * self.offset
    }

    #[inline]
    fn sign(&self) -> f64 {
        if self.flip {
            -1.0
        } else {
            1.0
        }
    }
}

/// Settings for fitting a piecewise cubic Bezier through user waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Tangent handle scale `k` in [0, 1]
    pub shape: f64,
    /// Samples per span (>= 2)
    pub split_count: usize,
    /// Join the last waypoint back to the first
    pub closed: bool,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            shape: DEFAULT_CURVE_SHAPE,
            split_count: DEFAULT_SPLIT_COUNT,
            closed: false,
        }
    }
}

impl CurveParams {
    pub fn with_shape(mut self, shape: f64) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_split_count(mut self, split_count: usize) -> Self {
        self.split_count = split_count;
        self
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Pulls `shape` into [0, 1] and `split_count` into the range offered
    /// to users. A NaN shape becomes 0.
    pub fn clamped(mut self) -> Self {
        self.shape = if self.shape.is_nan() {
            0.0
        } else {
            self.shape.clamp(0.0, 1.0)
        };
        self.split_count = clamp_split_count(self.split_count);
        self
    }
}

/// Full parameter set for the terrain-driven shoreline workflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShorelineParams {
    pub water: WaterLevel,
    /// Collinearity threshold used by the simplifier
    pub collinear_epsilon: f64,
    pub ribbon: RibbonParams,
}

impl Default for ShorelineParams {
    fn default() -> Self {
        Self {
            water: WaterLevel::default(),
            collinear_epsilon: DEFAULT_COLLINEAR_EPSILON,
            ribbon: RibbonParams::default(),
        }
    }
}

impl ShorelineParams {
    pub fn with_water(mut self, water: WaterLevel) -> Self {
        self.water = water;
        self
    }

    pub fn with_collinear_epsilon(mut self, epsilon: f64) -> Self {
        self.collinear_epsilon = epsilon;
        self
    }

    pub fn with_ribbon(mut self, ribbon: RibbonParams) -> Self {
        self.ribbon = ribbon;
        self
    }

    /// Pulls the collinearity threshold into the range offered to users.
    pub fn clamped(mut self) -> Self {
        if !self.collinear_epsilon.is_nan() {
            self.collinear_epsilon = clamp_collinear_epsilon(self.collinear_epsilon);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_level_cut_height() {
        let water = WaterLevel::new(2.5).with_offset(-0.5);
        assert_eq!(water.cut_height(), 2.0);
    }

    #[test]
    fn test_ribbon_distances() {
        let params = RibbonParams::default().with_width(2.0).with_offset(0.5);
        assert_eq!(params.front_distance(), 2.5);
        assert_eq!(params.back_distance(), 0.5);

        let flipped = params.with_flip(true);
        assert_eq!(flipped.front_distance(), -2.5);
        assert_eq!(flipped.back_distance(), -0.5);
    }

    #[test]
    fn test_curve_defaults() {
        let params = CurveParams::default();
        assert_eq!(params.shape, DEFAULT_CURVE_SHAPE);
        assert_eq!(params.split_count, DEFAULT_SPLIT_COUNT);
        assert!(!params.closed);
    }

    #[test]
    fn test_curve_clamped() {
        let params = CurveParams::default()
            .with_shape(-0.5)
            .with_split_count(100)
            .clamped();
        assert_eq!(params.shape, 0.0);
        assert_eq!(params.split_count, config::constants::MAX_SPLIT_COUNT);

        let nan = CurveParams::default().with_shape(f64::NAN).clamped();
        assert_eq!(nan.shape, 0.0);
    }

    #[test]
    fn test_shoreline_clamped() {
        let params = ShorelineParams::default()
            .with_collinear_epsilon(0.5)
            .clamped();
        assert_eq!(params.collinear_epsilon, config::constants::MAX_COLLINEAR_EPSILON);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Stitch.to_string(), "stitch");
        assert_eq!(Stage::Curve.to_string(), "curve");
    }

    #[test]
    fn test_params_serde_roundtrip() {
        let params = ShorelineParams::default()
            .with_water(WaterLevel::new(1.0))
            .with_ribbon(RibbonParams::default().with_flip(true));
        let json = serde_json::to_string(&params).unwrap();
        let back: ShorelineParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
