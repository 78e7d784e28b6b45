//! Special polytope skeletons with exact coordinates.
//!
//! Deterministic fixtures used by tests, benches, and examples. Each comes
//! with the adjacency the polytope actually has, so the pipeline can run on
//! them without any external geometry.

use crate::exact::{rat, vec_i64, RatVec};
use crate::graph::SkeletonGraph;
use crate::orientation::Region;

/// Skeleton of the `d`-dimensional 0/1 hypercube: vertices are the 0/1
/// vectors, edges join vertices at Hamming distance one.
pub fn hypercube(d: usize) -> SkeletonGraph {
    let n = 1usize << d;
    let verts: Vec<RatVec> = (0..n)
        .map(|mask| {
            RatVec::from_iterator(d, (0..d).map(|i| rat(((mask >> i) & 1) as i64)))
        })
        .collect();
    let mut edges = Vec::with_capacity(n * d / 2);
    for mask in 0..n {
        for i in 0..d {
            let other = mask ^ (1 << i);
            if mask < other {
                edges.push((mask, other));
            }
        }
    }
    // The 0/1 vertex set is duplicate-free by construction.
    SkeletonGraph::from_vertices_and_edges(verts, &edges)
        .expect("hypercube skeleton is well-formed")
}

/// Skeleton of a convex `k`-gon with integer coordinates: vertices on the
/// parabola `(i, i²)` are in convex position, adjacency is the boundary
/// cycle of their hull.
pub fn polygon(k: usize) -> SkeletonGraph {
    assert!(k >= 3, "a polygon needs at least 3 vertices");
    let verts: Vec<RatVec> = (0..k)
        .map(|i| vec_i64(&[i as i64, (i as i64) * (i as i64)]))
        .collect();
    let mut edges: Vec<(usize, usize)> = (0..k - 1).map(|i| (i, i + 1)).collect();
    edges.push((0, k - 1));
    SkeletonGraph::from_vertices_and_edges(verts, &edges)
        .expect("polygon skeleton is well-formed")
}

/// The unit square's 4-cycle skeleton.
pub fn unit_square() -> SkeletonGraph {
    let verts = vec![
        vec_i64(&[0, 0]),
        vec_i64(&[1, 0]),
        vec_i64(&[1, 1]),
        vec_i64(&[0, 1]),
    ];
    SkeletonGraph::from_vertices_and_edges(verts, &[(0, 1), (1, 2), (2, 3), (3, 0)])
        .expect("square skeleton is well-formed")
}

/// The four regions of the coordinate-axes arrangement in the plane, i.e.
/// the open quadrants, each bounded by two signed axis rays. This is exactly
/// what the external arrangement builder returns for the square's two edge
/// directions.
pub fn square_orthant_regions() -> Vec<Region> {
    let signs = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    signs
        .iter()
        .map(|&(sx, sy)| Region {
            rays: vec![vec_i64(&[sx, 0]), vec_i64(&[0, sy])],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hypercube_counts() {
        let g = hypercube(3);
        assert_eq!(g.len(), 8);
        assert_eq!(g.edge_count(), 12);
        assert_eq!(g.dim(), 3);
    }

    #[test]
    fn polygon_is_a_cycle() {
        let g = polygon(5);
        assert_eq!(g.len(), 5);
        assert_eq!(g.edge_count(), 5);
        for u in g.vertex_ids() {
            assert_eq!(g.neighbors(u).len(), 2);
        }
    }
}
