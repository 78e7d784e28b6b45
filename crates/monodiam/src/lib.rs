//! Monotone diameter of convex polytope skeletons.
//!
//! Given the vertex-edge graph of a polytope (supplied externally, together
//! with the regions of the hyperplane arrangement spanned by its edge
//! directions), this crate enumerates every acyclic orientation realizable by
//! a linear functional and reports the worst-case shortest-path distance to
//! the unique sink. All arithmetic is exact over arbitrary-precision
//! rationals; there is no floating point anywhere in the pipeline.
//!
//! Pipeline
//! - `directions`: canonical edge-direction classes, padded as hyperplane
//!   normals for the external arrangement builder.
//! - `orientation`: region representatives, sink location, edge orientation,
//!   and distance relaxation for one functional.
//! - `diameter`: the per-orientation driver and the running maximum.
//!
//! The geometric collaborators (vertex enumeration, adjacency, arrangement
//! region listing) stay outside this crate; see `SkeletonGraph` and `Region`
//! for the exact handoff types.

pub mod api;
pub mod diameter;
pub mod directions;
pub mod error;
pub mod exact;
pub mod graph;
pub mod orientation;
pub mod rand;
pub mod special;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use exact::{Rat, RatVec};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::diameter::{monotone_diameter, oriented_diameter, DiameterReport};
    pub use crate::directions::{edge_directions, hyperplane_normals};
    pub use crate::exact::{rat, ratio, Rat, RatVec};
    pub use crate::graph::{SkeletonGraph, VertexId};
    pub use crate::orientation::{
        distances_to_sink, find_sink, orient, representative, OrientedGraph, Region,
    };
    pub use crate::{Error, Result};
}
