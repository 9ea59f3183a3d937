//! Pipeline stages: intersect, stitch, simplify, ribbon, and the Bezier path
//! workflow that feeds the ribbon stage from user waypoints.

pub mod bezier;
pub mod intersect;
pub mod ribbon;
pub mod simplify;
pub mod stitch;
