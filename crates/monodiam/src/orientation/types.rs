//! Data types for the orientation pipeline.
//!
//! Kept small and explicit to make `build` and `relax` easy to read.

use crate::exact::RatVec;
use crate::graph::VertexId;

/// One region of the external hyperplane arrangement, given by its bounding
/// ray generators. The arrangement is central (all hyperplanes pass through
/// the origin), so every region is a cone and has at least one ray.
#[derive(Clone, Debug)]
pub struct Region {
    pub rays: Vec<RatVec>,
}

/// A linear functional picked from the interior of one region. Any two
/// vectors inside the same region induce the same sign pattern on all edge
/// directions, hence the same acyclic orientation.
pub type OrientationVector = RatVec;

/// The polytope graph with every edge directed by one fixed functional.
/// Rebuilt from scratch per orientation and discarded afterwards.
#[derive(Clone, Debug)]
pub struct OrientedGraph {
    out: Vec<Vec<VertexId>>,
}

impl OrientedGraph {
    pub(crate) fn new(out: Vec<Vec<VertexId>>) -> Self {
        Self { out }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Out-neighbors of `u` (edges along which the functional increases).
    #[inline]
    pub fn out_neighbors(&self, u: VertexId) -> &[VertexId] {
        &self.out[u.0]
    }
}
