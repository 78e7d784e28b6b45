//! Region representatives, sink location, and edge orientation.

use std::cmp::Ordering;

use num_traits::Zero;

use crate::error::{Error, Result};
use crate::exact::{Rat, RatVec};
use crate::graph::{SkeletonGraph, VertexId};

use super::types::{OrientationVector, OrientedGraph, Region};

/// Interior representative of a region: the sum of its ray generators.
///
/// A region without rays cannot come out of a central arrangement and is
/// rejected, as are rays of inconsistent dimension (both reachable from
/// user-supplied region lists).
pub fn representative(region: &Region) -> Result<OrientationVector> {
    let first = region.rays.first().ok_or(Error::EmptyRegion)?;
    let dim = first.len();
    let mut sum = RatVec::zeros(dim);
    for ray in &region.rays {
        if ray.len() != dim {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: ray.len(),
            });
        }
        sum += ray;
    }
    Ok(sum)
}

fn check_dim(g: &SkeletonGraph, f: &RatVec) -> Result<()> {
    if f.len() != g.dim() {
        return Err(Error::DimensionMismatch {
            expected: g.dim(),
            found: f.len(),
        });
    }
    Ok(())
}

/// The unique vertex maximizing `f·x`, by linear scan.
///
/// A second vertex attaining the running maximum is a degenerate functional:
/// the unique-sink assumption fails, and we refuse to pick a winner.
pub fn find_sink(g: &SkeletonGraph, f: &OrientationVector) -> Result<VertexId> {
    check_dim(g, f)?;
    let mut best = VertexId(0);
    let mut best_val = f.dot(g.vertex(best));
    let mut tied: Option<VertexId> = None;
    for id in g.vertex_ids().skip(1) {
        let val = f.dot(g.vertex(id));
        match val.cmp(&best_val) {
            Ordering::Greater => {
                best = id;
                best_val = val;
                tied = None;
            }
            Ordering::Equal => tied = Some(id),
            Ordering::Less => {}
        }
    }
    match tied {
        Some(b) => Err(Error::DegenerateFunctional { a: best, b }),
        None => Ok(best),
    }
}

/// Direct every edge `{u, v}` as `u → v` iff `f·(x_v − x_u) > 0`.
///
/// Exactly one direction is added per edge; a zero difference means the
/// functional is constant along the edge and the orientation is rejected.
pub fn orient(g: &SkeletonGraph, f: &OrientationVector) -> Result<OrientedGraph> {
    check_dim(g, f)?;
    let mut out: Vec<Vec<VertexId>> = vec![Vec::new(); g.len()];
    for (u, v) in g.edges() {
        let diff = g.vertex(v) - g.vertex(u);
        match f.dot(&diff).cmp(&Rat::zero()) {
            Ordering::Greater => out[u.0].push(v),
            Ordering::Less => out[v.0].push(u),
            Ordering::Equal => return Err(Error::DegenerateFunctional { a: u, b: v }),
        }
    }
    Ok(OrientedGraph::new(out))
}
