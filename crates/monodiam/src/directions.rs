//! Canonical edge-direction classes of a polytope skeleton.
//!
//! Every undirected edge `{u, v}` contributes the direction `(x_u − x_v)`,
//! normalized so its absolute coordinates sum to 1. Directions `d` and `−d`
//! describe the same parallelism class; we keep exactly one canonical
//! representative per class, the one whose first nonzero coordinate is
//! positive. Canonicalizing by sign (rather than by first insertion) makes
//! the output a pure function of the edge set, independent of vertex
//! numbering and traversal order.

use std::collections::HashSet;

use num_traits::Zero;

use crate::error::{Error, Result};
use crate::exact::{one_norm, scale_down, Rat, RatVec};
use crate::graph::SkeletonGraph;

/// Flip `d` so its first nonzero coordinate is positive.
fn canonical_sign(d: RatVec) -> RatVec {
    let flip = matches!(d.iter().find(|x| !x.is_zero()), Some(x) if *x < Rat::zero());
    if flip {
        d.map(|c| -c)
    } else {
        d
    }
}

/// Deduplicated canonical edge directions, one per parallelism class.
///
/// Fails with `InvalidGraph` if two adjacent vertices coincide (a zero edge
/// vector has no direction).
pub fn edge_directions(g: &SkeletonGraph) -> Result<Vec<RatVec>> {
    let mut seen: HashSet<Vec<Rat>> = HashSet::new();
    let mut dirs = Vec::new();
    for (u, v) in g.edges() {
        let d = g.vertex(u) - g.vertex(v);
        let norm = one_norm(&d);
        if norm.is_zero() {
            return Err(Error::InvalidGraph(format!(
                "adjacent vertices {u:?} and {v:?} coincide"
            )));
        }
        let d = canonical_sign(scale_down(&d, &norm));
        let key: Vec<Rat> = d.iter().cloned().collect();
        if seen.insert(key) {
            dirs.push(d);
        }
    }
    Ok(dirs)
}

/// Pad each direction with a trailing zero constant term, the form expected
/// by the external arrangement builder (hyperplanes through the origin with
/// normal `d`).
pub fn hyperplane_normals(dirs: &[RatVec]) -> Vec<RatVec> {
    dirs.iter()
        .map(|d| {
            RatVec::from_iterator(
                d.len() + 1,
                d.iter().cloned().chain(std::iter::once(Rat::zero())),
            )
        })
        .collect()
}
