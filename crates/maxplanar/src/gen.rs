//! Maximal planar fixtures: platonic triangulations and seeded random ones.
//!
//! Purpose
//! - Feed tests, benches, and the CLI `generate` command with graphs whose
//!   answer is known by construction.
//!
//! Model
//! - Start from the tetrahedron, split a random face with each new vertex
//!   (stacked triangulation), then apply random edge flips so degrees spread
//!   out. Both moves keep the graph a triangulation of the sphere.
//! - Determinism: one `StdRng` seeded from the caller's `seed`.

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Random triangulation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackedCfg {
    /// Vertex count, at least 4.
    pub vertices: usize,
    /// Edge flips attempted after stacking (rejected flips still count).
    pub flips: usize,
}

impl Default for StackedCfg {
    fn default() -> Self {
        Self {
            vertices: 32,
            flips: 64,
        }
    }
}

/// A triangulation together with its faces.
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub graph: Graph,
    /// `2V - 4` triangles.
    pub faces: Vec<[usize; 3]>,
}

/// Seeded random triangulation on `cfg.vertices` vertices.
pub fn random_triangulation(cfg: StackedCfg, seed: u64) -> Result<Triangulation, GeneratorError> {
    if cfg.vertices < 4 {
        return Err(GeneratorError::invalid("need at least 4 vertices"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut faces: Vec<[usize; 3]> = vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
    let mut edges: Vec<(usize, usize)> = vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

    for v in 4..cfg.vertices {
        let f = rng.gen_range(0..faces.len());
        let [a, b, c] = faces[f];
        faces[f] = [v, a, b];
        faces.push([v, a, c]);
        faces.push([v, b, c]);
        edges.extend([(a, v), (b, v), (c, v)]);
    }

    let mut present: HashSet<(usize, usize)> = edges.iter().copied().collect();
    for _ in 0..cfg.flips {
        let k = rng.gen_range(0..edges.len());
        let (a, b) = edges[k];
        let mut sides = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.contains(&a) && f.contains(&b))
            .map(|(i, _)| i);
        let (Some(i), Some(j)) = (sides.next(), sides.next()) else {
            return Err(GeneratorError::degenerate(format!(
                "edge {a}-{b} is not shared by two faces"
            )));
        };
        let c = third(faces[i], a, b);
        let d = third(faces[j], a, b);
        let cd = (c.min(d), c.max(d));
        if c == d || present.contains(&cd) {
            continue;
        }
        present.remove(&(a, b));
        present.insert(cd);
        edges[k] = cd;
        faces[i] = [c, d, a];
        faces[j] = [c, d, b];
    }

    let graph = Graph::from_edges(cfg.vertices, edges)
        .map_err(|e| GeneratorError::degenerate(e.to_string()))?;
    Ok(Triangulation { graph, faces })
}

fn third(face: [usize; 3], a: usize, b: usize) -> usize {
    face.into_iter()
        .find(|&x| x != a && x != b)
        .unwrap_or(a)
}

fn fixed(n: usize, edges: &[(usize, usize)]) -> Graph {
    Graph::from_edges(n, edges.iter().copied()).expect("static edge list is a simple graph")
}

/// K4.
pub fn tetrahedron() -> Graph {
    fixed(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
}

/// K_{2,2,2}; antipodal pairs `(i, i + 3)` are the non-edges.
pub fn octahedron() -> Graph {
    let edges: Vec<(usize, usize)> = (0..6)
        .flat_map(|a| (a + 1..6).map(move |b| (a, b)))
        .filter(|&(a, b)| b - a != 3)
        .collect();
    fixed(6, &edges)
}

/// Icosahedron: apex 0, upper ring 1..=5, lower ring 6..=10, apex 11.
pub fn icosahedron() -> Graph {
    let mut edges = Vec::with_capacity(30);
    for k in 0..5 {
        let up = 1 + k;
        let up_next = 1 + (k + 1) % 5;
        let low = 6 + k;
        let low_next = 6 + (k + 1) % 5;
        edges.extend([
            (0, up),
            (up, up_next),
            (up, low),
            (up_next, low),
            (low, low_next),
            (11, low),
        ]);
    }
    fixed(12, &edges)
}
