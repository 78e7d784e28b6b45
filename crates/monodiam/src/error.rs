//! Error taxonomy for the orientation pipeline.
//!
//! Every variant is unrecoverable for the computation it occurs in: a single
//! invalid orientation invalidates the extremal guarantee, so the driver
//! aborts instead of skipping the offending orientation.

use thiserror::Error;

use crate::graph::VertexId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The functional ties two vertices it must separate: either two maxima
    /// in the sink scan or a zero difference along an edge. The unique-sink
    /// assumption is violated and the orientation is rejected outright.
    #[error("degenerate functional: vertices {a:?} and {b:?} tie")]
    DegenerateFunctional { a: VertexId, b: VertexId },

    /// The arrangement produced no regions, so there is nothing to orient.
    /// Signals a malformed or degenerate input polytope.
    #[error("arrangement yielded no regions; no orientations to enumerate")]
    EmptyOrientationSet,

    /// A vertex kept its sentinel distance after relaxation converged, so it
    /// has no directed path to the sink. The orientation is not an acyclic
    /// unique-sink orientation.
    #[error("vertex {vertex:?} has no directed path to sink {sink:?}")]
    DisconnectedSink { vertex: VertexId, sink: VertexId },

    /// A region arrived without bounding rays, so it has no interior
    /// representative. A central arrangement never produces one; this means
    /// the region list is malformed.
    #[error("region has no rays; no interior representative exists")]
    EmptyRegion,

    /// A vector's dimension does not match the skeleton's ambient dimension,
    /// or two rays of the same region disagree on their dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The vertex/adjacency input violates a structural invariant.
    #[error("malformed skeleton graph: {0}")]
    InvalidGraph(String),
}

pub type Result<T> = std::result::Result<T, Error>;
