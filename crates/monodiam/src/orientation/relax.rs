//! Shortest directed distances to the sink via iterative relaxation.

use crate::graph::VertexId;

use super::types::OrientedGraph;

/// One relaxation sweep; returns whether any distance shrank.
fn relax_round(dg: &OrientedGraph, dist: &mut [usize]) -> bool {
    let mut changed = false;
    for u in 0..dg.len() {
        let out = dg.out_neighbors(VertexId(u));
        if let Some(best) = out.iter().map(|v| dist[v.0]).min() {
            if best + 1 < dist[u] {
                dist[u] = best + 1;
                changed = true;
            }
        }
    }
    changed
}

/// Distance from every vertex to `sink`, with `n` (the vertex count) as the
/// sentinel for "no path found".
///
/// Bellman-Ford-style: all distances start at the safe upper bound `n`, the
/// sink at 0, and up to `n` sweeps each lower `dist[u]` to one more than the
/// cheapest out-neighbor. Sweeps stop at the first fixpoint. Expressed purely
/// over forward out-edges, this needs no reverse adjacency and converges
/// within `n` rounds whether or not the graph is acyclic.
pub fn distances_to_sink(dg: &OrientedGraph, sink: VertexId) -> Vec<usize> {
    let n = dg.len();
    let mut dist = vec![n; n];
    dist[sink.0] = 0;
    for _ in 0..n {
        if !relax_round(dg, &mut dist) {
            break;
        }
    }
    dist
}
