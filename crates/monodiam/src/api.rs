//! Curated internal API surface (UNSTABLE).
//!
//! Convenience re-exports for project-internal callers (CLI, benches,
//! examples). Not a stable public API; breaking changes are expected.

// Exact arithmetic
pub use crate::exact::{one_norm, rat, ratio, scale_down, vec_i64, Rat, RatVec};
// Skeleton graph
pub use crate::graph::{SkeletonGraph, VertexId};
// Direction extraction
pub use crate::directions::{edge_directions, hyperplane_normals};
// Per-orientation pipeline
pub use crate::orientation::{
    distances_to_sink, find_sink, orient, representative, OrientationVector, OrientedGraph,
    Region,
};
// Driver and aggregation
pub use crate::diameter::{monotone_diameter, oriented_diameter, DiameterReport};
// Monte-Carlo sampling
pub use crate::rand::{draw_functional, sample_diameter, FunctionalCfg};
// Fixture skeletons
pub use crate::special::{hypercube, polygon, square_orthant_regions, unit_square};
