//! # Parameter Validation
//!
//! Range checks for the shared parameter types, reported as [`MeshError`].
//! The parameter structs themselves live in `shoreline-types` so hosts can
//! persist them without depending on the geometry core.

use shoreline_types::{CurveParams, RibbonParams, ShorelineParams, WaterLevel};

use config::constants::MIN_SPLIT_COUNT;

use crate::error::{MeshError, MeshResult};

/// Range check for a parameter set.
pub trait Validate {
    /// Returns an error describing the first out-of-range field.
    fn validate(&self) -> MeshResult<()>;
}

impl Validate for WaterLevel {
    fn validate(&self) -> MeshResult<()> {
        let height = self.cut_height();
        if !height.is_finite() {
            return Err(MeshError::invalid_parameter(
                "water_height",
                height,
                "height plus offset must be finite",
            ));
        }
        Ok(())
    }
}

impl Validate for RibbonParams {
    fn validate(&self) -> MeshResult<()> {
        if !(self.width.is_finite() && self.width >= 0.0) {
            return Err(MeshError::invalid_parameter(
                "width",
                self.width,
                "must be finite and not negative",
            ));
        }
        if !self.offset.is_finite() {
            return Err(MeshError::invalid_parameter(
                "offset",
                self.offset,
                "must be finite",
            ));
        }
        Ok(())
    }
}

impl Validate for CurveParams {
    fn validate(&self) -> MeshResult<()> {
        if !(0.0..=1.0).contains(&self.shape) {
            return Err(MeshError::invalid_parameter(
                "shape",
                self.shape,
                "must be within [0, 1]",
            ));
        }
        if self.split_count < MIN_SPLIT_COUNT {
            return Err(MeshError::invalid_parameter(
                "split_count",
                self.split_count,
                "must be at least 2",
            ));
        }
        Ok(())
    }
}

impl Validate for ShorelineParams {
    fn validate(&self) -> MeshResult<()> {
        self.water.validate()?;
        if !(self.collinear_epsilon.is_finite() && self.collinear_epsilon > 0.0) {
            return Err(MeshError::invalid_parameter(
                "collinear_epsilon",
                self.collinear_epsilon,
                "must be a finite positive number",
            ));
        }
        self.ribbon.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(WaterLevel::default().validate().is_ok());
        assert!(RibbonParams::default().validate().is_ok());
        assert!(CurveParams::default().validate().is_ok());
        assert!(ShorelineParams::default().validate().is_ok());
    }

    #[test]
    fn test_water_level() {
        assert!(WaterLevel::new(f64::NAN).validate().is_err());
        assert!(WaterLevel::new(2.0).with_offset(f64::INFINITY).validate().is_err());
        assert!(WaterLevel::new(-3.0).with_offset(0.5).validate().is_ok());
    }

    #[test]
    fn test_ribbon_params() {
        assert!(RibbonParams::default().with_width(0.0).validate().is_ok());
        assert!(RibbonParams::default().with_offset(-2.0).validate().is_ok());

        let err = RibbonParams::default().with_width(-1.0).validate().unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { name: "width", .. }));

        let err = RibbonParams::default().with_offset(f64::NAN).validate().unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { name: "offset", .. }));
    }

    #[test]
    fn test_curve_params() {
        assert!(CurveParams::default().with_shape(0.0).validate().is_ok());
        assert!(CurveParams::default().with_shape(1.0).validate().is_ok());
        assert!(CurveParams::default().with_shape(1.5).validate().is_err());
        assert!(CurveParams::default().with_shape(f64::NAN).validate().is_err());

        let err = CurveParams::default().with_split_count(1).validate().unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { name: "split_count", .. }));
    }

    #[test]
    fn test_clamped_params_are_valid() {
        let curve = CurveParams::default()
            .with_shape(4.0)
            .with_split_count(0)
            .clamped();
        assert!(curve.validate().is_ok());

        let shoreline = ShorelineParams::default()
            .with_collinear_epsilon(0.0)
            .clamped();
        assert!(shoreline.validate().is_ok());
    }

    #[test]
    fn test_shoreline_params() {
        let bad_epsilon = ShorelineParams::default().with_collinear_epsilon(-1.0);
        assert!(bad_epsilon.validate().is_err());

        let bad_ribbon =
            ShorelineParams::default().with_ribbon(RibbonParams::default().with_width(f64::NAN));
        assert!(bad_ribbon.validate().is_err());
    }
}
