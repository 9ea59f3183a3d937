//! # Shoreline Errors
//!
//! Error types for the shoreline pipeline.
//!
//! ## Error Policy
//!
//! - Degenerate geometry (flat triangles, zero-length edges) is skipped, never an error
//! - Malformed argument shapes and out-of-range parameters fail fast
//! - Errors name the stage that rejected the input

use shoreline_types::Stage;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building shoreline geometry.
///
/// ## Example
///
/// ```rust
/// use shoreline_mesh::{build_ribbon, MeshError, Polyline, RibbonParams};
/// use glam::DVec3;
///
/// let single = Polyline::open(vec![DVec3::ZERO]);
/// match build_ribbon(&single, &RibbonParams::default()) {
///     Err(MeshError::InvalidInput { stage, .. }) => println!("{stage} rejected the polyline"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// An argument does not have the shape the stage requires.
    #[error("Invalid input to {stage}: {message}")]
    InvalidInput {
        /// Stage that rejected the input
        stage: Stage,
        /// What was wrong with it
        message: String,
    },

    /// A numeric parameter is outside its valid range.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value, formatted
        value: String,
        /// Accepted range or rule
        reason: &'static str,
    },
}

impl MeshError {
    /// Creates an invalid input error.
    pub fn invalid_input(stage: Stage, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            stage,
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for shoreline operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_input(Stage::Ribbon, "polyline has 1 point");
        assert!(err.to_string().contains("ribbon"));
        assert!(err.to_string().contains("1 point"));

        let err = MeshError::invalid_parameter("width", -1.0, "must be >= 0");
        assert!(err.to_string().contains("width"));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
