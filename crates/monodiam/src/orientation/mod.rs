//! Orientation pipeline for one linear functional.
//!
//! Purpose
//! - Turn an arrangement region into a concrete functional (`representative`),
//!   locate the unique sink (`find_sink`), direct every polytope edge by the
//!   functional's sign (`orient`), and relax shortest distances to the sink
//!   (`distances_to_sink`).
//!
//! Why this design
//! - `orient` is the only step that touches geometry; from the directed graph
//!   on, everything is purely combinatorial, so degenerate functionals are
//!   caught exactly where the geometry is consulted and never later.
//! - Relaxation works forward over out-edges only, so it needs no reverse
//!   adjacency and converges within `n` rounds on any `n`-vertex graph.

mod build;
mod relax;
mod types;

pub use build::{find_sink, orient, representative};
pub use relax::distances_to_sink;
pub use types::{OrientationVector, OrientedGraph, Region};
