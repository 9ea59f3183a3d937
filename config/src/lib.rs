//! # Config Crate
//!
//! Centralized configuration constants for the shoreline pipeline.
//! Tolerances, parameter ranges and defaults for every stage are defined
//! here so the geometry crates stay free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HEIGHT_EPSILON, DEFAULT_COLLINEAR_EPSILON};
//!
//! // Use HEIGHT_EPSILON to decide whether a vertex sits on the water plane
//! let water = 2.0_f64;
//! let vertex_y = 2.0_f64;
//! assert!((vertex_y - water).abs() <= HEIGHT_EPSILON);
//!
//! // Simplification starts from the default collinearity threshold
//! let user_epsilon: Option<f64> = None;
//! let epsilon = user_epsilon.unwrap_or(DEFAULT_COLLINEAR_EPSILON);
//! assert_eq!(epsilon, DEFAULT_COLLINEAR_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Stage Grouped**: Constants are grouped by the pipeline stage that reads them
//! - **Documented**: Every constant carries a usage example

pub mod constants;
