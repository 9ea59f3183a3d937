//! # Segments and Polylines
//!
//! The line data flowing between the intersect, stitch and simplify stages.

use std::collections::BTreeSet;

use config::constants::MIN_LOOP_POINTS;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A directed piece of shoreline cut from one triangle.
///
/// Walking from `head` to `tail`, the land is on the left and the water on
/// the right when viewed from above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point
    pub head: DVec3,
    /// End point
    pub tail: DVec3,
}

impl Segment {
    /// Creates a segment from `head` to `tail`.
    #[inline]
    pub fn new(head: DVec3, tail: DVec3) -> Self {
        Self { head, tail }
    }

    /// Returns the same segment walked the other way.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            head: self.tail,
            tail: self.head,
        }
    }

    /// Vector from head to tail.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.tail - self.head
    }

    /// Segment length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Midpoint, handy for labelling segments in a viewport.
    #[inline]
    pub fn midpoint(&self) -> DVec3 {
        (self.head + self.tail) * 0.5
    }

    /// True if head and tail coincide exactly.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.head == self.tail
    }
}

/// An ordered run of points, optionally closed into a loop.
///
/// Closed polylines do not repeat their first point at the end.
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::Polyline;
/// use glam::DVec3;
///
/// let square = Polyline::closed(vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 1.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ]);
/// assert_eq!(square.len(), 4);
/// assert_eq!(square.edge_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    /// Vertex positions in walking order
    pub points: Vec<DVec3>,
    /// Whether the last point connects back to the first
    pub closed: bool,
}

impl Polyline {
    /// Creates a polyline.
    pub fn new(points: Vec<DVec3>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Creates an open polyline.
    pub fn open(points: Vec<DVec3>) -> Self {
        Self::new(points, false)
    }

    /// Creates a closed polyline.
    pub fn closed(points: Vec<DVec3>) -> Self {
        Self::new(points, true)
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True if the polyline is closed and long enough to form a loop.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.closed && self.points.len() >= MIN_LOOP_POINTS
    }

    /// Number of edges, counting the closing edge of a loop.
    pub fn edge_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.is_loop() => n,
            n => n - 1,
        }
    }

    /// Iterates over edges as segments, including the closing edge of a loop.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..self.edge_count()).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Total length along the polyline.
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }
}

/// Indices of segments the user wants dropped before stitching.
///
/// Built and owned by the host. Stitching only reads it.
///
/// # Example
///
/// ```rust
/// use shoreline_mesh::ExclusionMask;
///
/// let mask: ExclusionMask = [3, 7].into_iter().collect();
/// assert!(mask.contains(3));
/// assert!(!mask.contains(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExclusionMask(BTreeSet<usize>);

impl ExclusionMask {
    /// Creates an empty mask.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mask from a per-segment checkbox array.
    pub fn from_flags(flags: &[bool]) -> Self {
        flags
            .iter()
            .enumerate()
            .filter_map(|(index, &excluded)| excluded.then_some(index))
            .collect()
    }

    /// Marks a segment as excluded. Returns false if it already was.
    pub fn insert(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    /// Clears the exclusion of a segment. Returns false if it was not excluded.
    pub fn remove(&mut self, index: usize) -> bool {
        self.0.remove(&index)
    }

    /// Returns true if the segment is excluded.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Number of excluded segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is excluded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest excluded index, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Iterates over excluded indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for ExclusionMask {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_reversed() {
        let s = Segment::new(DVec3::ZERO, DVec3::X);
        let r = s.reversed();
        assert_eq!(r.head, DVec3::X);
        assert_eq!(r.tail, DVec3::ZERO);
        assert_eq!(r.reversed(), s);
    }

    #[test]
    fn test_segment_degenerate() {
        assert!(Segment::new(DVec3::Y, DVec3::Y).is_degenerate());
        assert!(!Segment::new(DVec3::Y, DVec3::Z).is_degenerate());
    }

    #[test]
    fn test_polyline_open_edges() {
        let line = Polyline::open(vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)]);
        assert_eq!(line.edge_count(), 2);
        assert_eq!(line.length(), 2.0);
    }

    #[test]
    fn test_polyline_closed_edges() {
        let tri = Polyline::closed(vec![DVec3::ZERO, DVec3::X, DVec3::Z]);
        assert!(tri.is_loop());
        assert_eq!(tri.edge_count(), 3);
        let last = tri.segments().last().unwrap();
        assert_eq!(last.tail, DVec3::ZERO);
    }

    #[test]
    fn test_short_closed_polyline_is_not_a_loop() {
        let pair = Polyline::closed(vec![DVec3::ZERO, DVec3::X]);
        assert!(!pair.is_loop());
        assert_eq!(pair.edge_count(), 1);
    }

    #[test]
    fn test_exclusion_mask_from_flags() {
        let mask = ExclusionMask::from_flags(&[false, true, false, true]);
        assert_eq!(mask.len(), 2);
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(mask.max_index(), Some(3));
    }

    #[test]
    fn test_exclusion_mask_insert_remove() {
        let mut mask = ExclusionMask::new();
        assert!(mask.insert(2));
        assert!(!mask.insert(2));
        assert!(mask.remove(2));
        assert!(mask.is_empty());
    }
}
