//! Graph storage: ascending adjacency lists with parallel edge weights.

use std::fmt;

/// Rejected edge lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    SelfLoop { vertex: usize },
    DuplicateEdge { a: usize, b: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(f, "vertex {vertex} out of range (V = {vertex_count})"),
            Self::SelfLoop { vertex } => write!(f, "self loop at vertex {vertex}"),
            Self::DuplicateEdge { a, b } => write!(f, "duplicate edge {a}-{b}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Undirected simple graph.
///
/// Invariants:
/// - `adj[v]` is strictly ascending and never contains `v`.
/// - `u ∈ adj[v]` iff `v ∈ adj[u]`.
/// - `weights[v][k]` is the weight of the edge `(v, adj[v][k])`.
/// - `edge_count` is the number of undirected edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    weights: Vec<Vec<u64>>,
    edge_count: usize,
}

impl Graph {
    /// `n` isolated vertices.
    pub fn empty(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            weights: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    /// Build from unweighted edges (weight 0). Endpoint order does not matter.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::from_weighted_edges(n, edges.into_iter().map(|(a, b)| (a, b, 0)))
    }

    /// Build from `(a, b, weight)` triples.
    pub fn from_weighted_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, u64)>,
    {
        let mut rows: Vec<Vec<(usize, u64)>> = vec![Vec::new(); n];
        let mut edge_count = 0usize;
        for (a, b, w) in edges {
            for vertex in [a, b] {
                if vertex >= n {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        vertex_count: n,
                    });
                }
            }
            if a == b {
                return Err(GraphError::SelfLoop { vertex: a });
            }
            rows[a].push((b, w));
            rows[b].push((a, w));
            edge_count += 1;
        }
        let mut adj = Vec::with_capacity(n);
        let mut weights = Vec::with_capacity(n);
        for (v, mut row) in rows.into_iter().enumerate() {
            row.sort_unstable_by_key(|&(u, _)| u);
            if let Some(pair) = row.windows(2).find(|p| p[0].0 == p[1].0) {
                let u = pair[0].0;
                return Err(GraphError::DuplicateEdge {
                    a: v.min(u),
                    b: v.max(u),
                });
            }
            let (ids, ws): (Vec<usize>, Vec<u64>) = row.into_iter().unzip();
            adj.push(ids);
            weights.push(ws);
        }
        Ok(Self {
            adj,
            weights,
            edge_count,
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `v` in ascending order.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.weight(a, b).is_some()
    }

    /// Weight of edge `a-b`, `None` if absent or out of range.
    pub fn weight(&self, a: usize, b: usize) -> Option<u64> {
        if a >= self.adj.len() || b >= self.adj.len() {
            return None;
        }
        // search the shorter list
        let (from, to) = if self.adj[a].len() <= self.adj[b].len() {
            (a, b)
        } else {
            (b, a)
        };
        self.adj[from]
            .binary_search(&to)
            .ok()
            .map(|k| self.weights[from][k])
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> u64 {
        self.edges().map(|(_, _, w)| w).sum()
    }

    /// Edges as `(a, b, weight)` with `a < b`, ascending by `(a, b)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.adj.iter().enumerate().flat_map(move |(a, row)| {
            row.iter()
                .zip(&self.weights[a])
                .filter(move |&(&b, _)| a < b)
                .map(move |(&b, &w)| (a, b, w))
        })
    }

    /// First vertex (by id) with degree at most `max_degree`.
    pub fn low_degree_vertex(&self, max_degree: usize) -> Option<usize> {
        (0..self.vertex_count()).find(|&v| self.degree(v) <= max_degree)
    }

    /// Serialize to the upper-triangle text format read by `parse_adjacency`.
    ///
    /// One line per row `i` (tokens for `j > i`); absent edges are `-1`.
    pub fn to_adjacency_text(&self) -> String {
        let n = self.vertex_count();
        let mut out = format!("{n}\n");
        for i in 0..n.saturating_sub(1) {
            let row: Vec<String> = (i + 1..n)
                .map(|j| match self.weight(i, j) {
                    Some(w) => w.to_string(),
                    None => "-1".to_string(),
                })
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }
}
