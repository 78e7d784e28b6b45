//! Instance files: vertices, adjacency, and arrangement regions as JSON.
//!
//! Coordinates are integers or `"p/q"` strings; everything becomes an exact
//! rational on load. The `regions` list is the output of the external
//! arrangement collaborator, one entry per region with its bounding rays.
//! Extra fields (`description`, `ineqs`, ...) are provenance metadata and
//! are ignored by the loader; see `instances/todd.json` for a full instance
//! carrying its defining inequality system alongside the skeleton.
//!
//! ```json
//! {
//!   "vertices": [[0, 0], [1, 0], [1, 1], [0, 1]],
//!   "edges": [[0, 1], [1, 2], [2, 3], [3, 0]],
//!   "regions": [{ "rays": [[1, 0], [0, 1]] }, ...]
//! }
//! ```

use anyhow::{bail, Context, Result};
use monodiam::api::{rat, ratio, Rat, RatVec, Region, SkeletonGraph};
use serde::Deserialize;
use std::path::Path;

/// A rational literal: a plain integer or a `"p/q"` string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RatLit {
    Int(i64),
    Frac(String),
}

impl RatLit {
    fn to_rat(&self) -> Result<Rat> {
        match self {
            RatLit::Int(n) => Ok(rat(*n)),
            RatLit::Frac(s) => {
                let (p, q) = s
                    .split_once('/')
                    .with_context(|| format!("rational literal {s:?} is not of the form p/q"))?;
                let p: i64 = p.trim().parse().with_context(|| format!("numerator of {s:?}"))?;
                let q: i64 = q.trim().parse().with_context(|| format!("denominator of {s:?}"))?;
                if q == 0 {
                    bail!("rational literal {s:?} has zero denominator");
                }
                Ok(ratio(p, q))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RegionFile {
    rays: Vec<Vec<RatLit>>,
}

#[derive(Debug, Deserialize)]
struct InstanceFile {
    vertices: Vec<Vec<RatLit>>,
    edges: Vec<(usize, usize)>,
    #[serde(default)]
    regions: Vec<RegionFile>,
}

/// A loaded instance: the skeleton plus the (possibly empty) region list.
pub struct Instance {
    pub graph: SkeletonGraph,
    pub regions: Vec<Region>,
}

fn to_vec(coords: &[RatLit]) -> Result<RatVec> {
    let rats = coords
        .iter()
        .map(RatLit::to_rat)
        .collect::<Result<Vec<_>>>()?;
    Ok(RatVec::from_vec(rats))
}

/// Load an instance from a JSON file.
pub fn load(path: &Path) -> Result<Instance> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading instance {}", path.display()))?;
    let file: InstanceFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing instance {}", path.display()))?;

    let verts = file
        .vertices
        .iter()
        .map(|c| to_vec(c))
        .collect::<Result<Vec<_>>>()
        .context("parsing vertex coordinates")?;
    let graph = SkeletonGraph::from_vertices_and_edges(verts, &file.edges)
        .context("building skeleton graph")?;

    let regions = file
        .regions
        .iter()
        .map(|r| {
            let rays = r
                .rays
                .iter()
                .map(|c| to_vec(c))
                .collect::<Result<Vec<_>>>()?;
            Ok(Region { rays })
        })
        .collect::<Result<Vec<_>>>()
        .context("parsing regions")?;

    Ok(Instance { graph, regions })
}
