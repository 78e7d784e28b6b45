//! Polytope skeleton: an indexed vertex registry with adjacency lists.
//!
//! Vertices are immutable exact-coordinate points owned by the registry;
//! everything else refers to them by `VertexId`. Adjacency is stored as
//! symmetric index lists, so no coordinate vector is ever hashed or compared
//! to establish identity after construction.

use crate::error::{Error, Result};
use crate::exact::RatVec;

/// Stable integer id of a vertex in a `SkeletonGraph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Vertex-edge graph of a polytope, as handed over by the external
/// vertex-enumeration collaborator.
#[derive(Clone, Debug)]
pub struct SkeletonGraph {
    verts: Vec<RatVec>,
    adj: Vec<Vec<VertexId>>,
    dim: usize,
}

impl SkeletonGraph {
    /// Build from a vertex list and undirected edge pairs (indices into the
    /// vertex list). Rejects inconsistent dimensions, out-of-range indices,
    /// self-loops, and duplicate edges.
    pub fn from_vertices_and_edges(verts: Vec<RatVec>, edges: &[(usize, usize)]) -> Result<Self> {
        if verts.is_empty() {
            return Err(Error::InvalidGraph("empty vertex set".into()));
        }
        let dim = verts[0].len();
        for v in &verts {
            if v.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: v.len(),
                });
            }
        }
        let n = verts.len();
        let mut adj: Vec<Vec<VertexId>> = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(Error::InvalidGraph(format!(
                    "edge ({u}, {v}) references a vertex outside 0..{n}"
                )));
            }
            if u == v {
                return Err(Error::InvalidGraph(format!("self-loop at vertex {u}")));
            }
            if adj[u].contains(&VertexId(v)) {
                return Err(Error::InvalidGraph(format!("duplicate edge ({u}, {v})")));
            }
            adj[u].push(VertexId(v));
            adj[v].push(VertexId(u));
        }
        Ok(Self { verts, adj, dim })
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Ambient dimension of the vertex coordinates.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of a vertex.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &RatVec {
        &self.verts[id.0]
    }

    /// Undirected neighbors of a vertex.
    #[inline]
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        &self.adj[id.0]
    }

    /// All vertex ids in registry order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.verts.len()).map(VertexId)
    }

    /// Each undirected edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertex_ids().flat_map(move |u| {
            self.adj[u.0]
                .iter()
                .filter(move |&&v| u < v)
                .map(move |&v| (u, v))
        })
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::vec_i64;

    fn path3() -> SkeletonGraph {
        let verts = vec![vec_i64(&[0]), vec_i64(&[1]), vec_i64(&[2])];
        SkeletonGraph::from_vertices_and_edges(verts, &[(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn adjacency_is_symmetric() {
        let g = path3();
        assert_eq!(g.neighbors(VertexId(0)), &[VertexId(1)]);
        assert_eq!(g.neighbors(VertexId(1)), &[VertexId(0), VertexId(2)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn edges_are_listed_once() {
        let g = path3();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(VertexId(0), VertexId(1)), (VertexId(1), VertexId(2))]);
    }

    #[test]
    fn rejects_malformed_input() {
        let verts = vec![vec_i64(&[0, 0]), vec_i64(&[1])];
        assert!(matches!(
            SkeletonGraph::from_vertices_and_edges(verts, &[]),
            Err(Error::DimensionMismatch { expected: 2, found: 1 })
        ));
        let verts = vec![vec_i64(&[0]), vec_i64(&[1])];
        assert!(matches!(
            SkeletonGraph::from_vertices_and_edges(verts.clone(), &[(0, 0)]),
            Err(Error::InvalidGraph(_))
        ));
        assert!(matches!(
            SkeletonGraph::from_vertices_and_edges(verts.clone(), &[(0, 2)]),
            Err(Error::InvalidGraph(_))
        ));
        assert!(matches!(
            SkeletonGraph::from_vertices_and_edges(verts, &[(0, 1), (1, 0)]),
            Err(Error::InvalidGraph(_))
        ));
    }
}
