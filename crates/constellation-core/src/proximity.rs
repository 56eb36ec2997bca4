//! Per-frame proximity graph over the point field.
//!
//! The pass is a plain O(N^2) scan over unordered pairs. Point counts are
//! capped by [`crate::constants::MAX_POINT_COUNT`], which keeps it within a
//! frame budget without a spatial index.

use crate::field::Point;
use glam::Vec3;

/// Unordered pair of point indices, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Normalize an index pair so that `a < b`. Returns `None` for `i == j`.
    #[inline]
    pub fn new(i: usize, j: usize) -> Option<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Some(Self { a: i, b: j }),
            std::cmp::Ordering::Greater => Some(Self { a: j, b: i }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Recompute the edge set into `out`, reusing its allocation.
///
/// A pair is connected when its squared distance is strictly below
/// `threshold^2`. A non-positive or NaN threshold connects nothing.
pub fn connect(points: &[Point], threshold: f32, out: &mut Vec<Edge>) {
    out.clear();
    if !(threshold > 0.0) {
        return;
    }
    let threshold_sq = threshold * threshold;
    for (i, pi) in points.iter().enumerate() {
        for (j, pj) in points.iter().enumerate().skip(i + 1) {
            if pi.position.distance_squared(pj.position) < threshold_sq {
                out.push(Edge { a: i, b: j });
            }
        }
    }
}

/// Fill the line-segment buffer: two endpoint positions per edge.
pub fn fill_segments(points: &[Point], edges: &[Edge], out: &mut Vec<Vec3>) {
    out.clear();
    out.reserve(edges.len() * 2);
    for e in edges {
        out.push(points[e.a].position);
        out.push(points[e.b].position);
    }
}
