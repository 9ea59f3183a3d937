//! # Configuration Constants
//!
//! Centralized constants for the shoreline pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Simplification**: Collinearity threshold defaults and range
//! - **Ribbon**: Default width and radial offset
//! - **Curve**: Bezier shape factor and sampling density
//! - **Limits**: Minimum point counts for paths, curves and loops

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for "exactly equal height" tests.
///
/// A triangle vertex whose height differs from the water plane by no more
/// than this value is classified as lying on the plane. Two heights closer
/// than this are treated as equal when rejecting horizontal triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::HEIGHT_EPSILON;
///
/// fn on_plane(y: f64, water: f64) -> bool {
///     (y - water).abs() <= HEIGHT_EPSILON
/// }
///
/// assert!(on_plane(1.5, 1.5));
/// assert!(!on_plane(1.5, 1.5 + 1e-9));
/// ```
pub const HEIGHT_EPSILON: f64 = f64::EPSILON;

// =============================================================================
// SIMPLIFICATION CONSTANTS
// =============================================================================

/// Default collinearity threshold for polyline simplification.
///
/// Compared against the planar (XZ) cross product of two consecutive edges.
/// The value is not normalized by edge length, so it scales with the squared
/// size of the terrain.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_COLLINEAR_EPSILON;
///
/// let cross: f64 = 0.00005;
/// assert!(cross.abs() < DEFAULT_COLLINEAR_EPSILON);
/// ```
pub const DEFAULT_COLLINEAR_EPSILON: f64 = 1e-4;

/// Lower end of the collinearity threshold range offered to users.
pub const MIN_COLLINEAR_EPSILON: f64 = 1e-4;

/// Upper end of the collinearity threshold range offered to users.
///
/// # Example
///
/// ```rust
/// use config::constants::{MIN_COLLINEAR_EPSILON, MAX_COLLINEAR_EPSILON};
///
/// let slider: f64 = 0.5;
/// let epsilon = MIN_COLLINEAR_EPSILON + slider * (MAX_COLLINEAR_EPSILON - MIN_COLLINEAR_EPSILON);
/// assert!(epsilon > MIN_COLLINEAR_EPSILON && epsilon < MAX_COLLINEAR_EPSILON);
/// ```
pub const MAX_COLLINEAR_EPSILON: f64 = 1e-2;

// =============================================================================
// RIBBON CONSTANTS
// =============================================================================

/// Default radial width of a shoreline ribbon, in world units.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RIBBON_WIDTH;
///
/// assert!(DEFAULT_RIBBON_WIDTH >= 0.0);
/// ```
pub const DEFAULT_RIBBON_WIDTH: f64 = 1.0;

/// Default radial offset of the ribbon's back row from the shoreline.
///
/// Positive values push the ribbon away from the shore along the outward
/// normal, negative values pull it onto the land.
pub const DEFAULT_RIBBON_OFFSET: f64 = 0.0;

// =============================================================================
// CURVE CONSTANTS
// =============================================================================

/// Default Bezier shape factor `k`.
///
/// Scales the tangent handles derived from neighbouring waypoints. `0`
/// collapses every span to a straight line, `1` gives the full
/// central-difference tangent.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CURVE_SHAPE;
///
/// assert!((0.0..=1.0).contains(&DEFAULT_CURVE_SHAPE));
/// ```
pub const DEFAULT_CURVE_SHAPE: f64 = 1.0;

/// Default number of samples per Bezier span.
pub const DEFAULT_SPLIT_COUNT: usize = 10;

/// Minimum number of samples per Bezier span.
///
/// # Example
///
/// ```rust
/// use config::constants::{MIN_SPLIT_COUNT, DEFAULT_SPLIT_COUNT};
///
/// let requested = 1;
/// let split = requested.max(MIN_SPLIT_COUNT);
/// assert_eq!(split, 2);
/// assert!(DEFAULT_SPLIT_COUNT >= MIN_SPLIT_COUNT);
/// ```
pub const MIN_SPLIT_COUNT: usize = 2;

/// Upper end of the split count range offered to users.
pub const MAX_SPLIT_COUNT: usize = 20;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of points for any path or ribbon.
pub const MIN_PATH_POINTS: usize = 2;

/// Minimum number of waypoints required to fit a Bezier curve.
///
/// Interior tangents need a previous and a next neighbour, so fewer points
/// are used as a straight path.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_CURVE_POINTS;
///
/// let waypoints = 2;
/// let fit_curve = waypoints >= MIN_CURVE_POINTS;
/// assert!(!fit_curve);
/// ```
pub const MIN_CURVE_POINTS: usize = 3;

/// Minimum number of vertices for a loop to be treated as closed.
pub const MIN_LOOP_POINTS: usize = 3;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks whether two heights are equal within [`HEIGHT_EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::heights_equal;
///
/// assert!(heights_equal(3.0, 3.0));
/// assert!(!heights_equal(3.0, 3.001));
/// ```
#[inline]
pub fn heights_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= HEIGHT_EPSILON
}

/// Clamps a requested split count into the supported range.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_split_count, MIN_SPLIT_COUNT, MAX_SPLIT_COUNT};
///
/// assert_eq!(clamp_split_count(0), MIN_SPLIT_COUNT);
/// assert_eq!(clamp_split_count(500), MAX_SPLIT_COUNT);
/// assert_eq!(clamp_split_count(7), 7);
/// ```
#[inline]
pub fn clamp_split_count(split_count: usize) -> usize {
    split_count.clamp(MIN_SPLIT_COUNT, MAX_SPLIT_COUNT)
}

/// Clamps a requested collinearity threshold into the user range.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_collinear_epsilon, MAX_COLLINEAR_EPSILON};
///
/// assert_eq!(clamp_collinear_epsilon(1.0), MAX_COLLINEAR_EPSILON);
/// ```
#[inline]
pub fn clamp_collinear_epsilon(epsilon: f64) -> f64 {
    epsilon.clamp(MIN_COLLINEAR_EPSILON, MAX_COLLINEAR_EPSILON)
}
