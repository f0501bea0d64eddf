//! Forward replay of a canonical order with the consecutive-run test.

use std::fmt;

use crate::graph::Graph;
use crate::membership::MembershipSet;

use super::types::CanonicalOrder;

/// Why a replay rejected an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayFailure {
    /// The order does not cover the graph (or has fewer than three vertices).
    OrderLength { expected: usize, found: usize },
    VertexOutOfRange { vertex: usize },
    /// `vertex = π[step]` does not attach to a contiguous boundary arc.
    ConsecutiveRun { step: usize, vertex: usize },
}

impl fmt::Display for ReplayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderLength { expected, found } => {
                write!(f, "order has {found} vertices, expected {expected}")
            }
            Self::VertexOutOfRange { vertex } => write!(f, "vertex {vertex} is not in the graph"),
            Self::ConsecutiveRun { step, vertex } => write!(
                f,
                "vertex {vertex} (step {step}) does not attach to a contiguous boundary arc"
            ),
        }
    }
}

/// Inclusive block `[lb, hb]` of the boundary covered by a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub lb: usize,
    pub hb: usize,
}

/// Vertex → index in the current boundary. A lookup cache only; rebuilt every step.
#[derive(Clone, Debug)]
pub struct PositionIndex {
    pos: Vec<Option<usize>>,
    indexed: Vec<usize>,
}

impl PositionIndex {
    pub fn new(universe: usize) -> Self {
        Self {
            pos: vec![None; universe],
            indexed: Vec::new(),
        }
    }

    /// Forget the previous boundary and index `boundary`.
    pub fn rebuild(&mut self, boundary: &[usize]) {
        for &v in &self.indexed {
            self.pos[v] = None;
        }
        self.indexed.clear();
        for (k, &v) in boundary.iter().enumerate() {
            if v >= self.pos.len() {
                self.pos.resize(v + 1, None);
            }
            self.pos[v] = Some(k);
            self.indexed.push(v);
        }
    }

    #[inline]
    pub fn get(&self, v: usize) -> Option<usize> {
        self.pos.get(v).copied().flatten()
    }
}

/// Does `tmp` occupy one unbroken block of `boundary`?
///
/// `tmp` must be non-empty, no larger than the boundary, every element must
/// be on the boundary, and the positions must span exactly `|tmp|` slots.
/// The boundary is a path (its ends are the fixed outer edge), so runs never
/// wrap around from the last slot to the first. `index` must describe `boundary`;
/// `tmp` must be duplicate-free.
pub fn are_consecutive(tmp: &[usize], boundary: &[usize], index: &PositionIndex) -> Option<Run> {
    if tmp.is_empty() || tmp.len() > boundary.len() {
        return None;
    }
    let mut lb = usize::MAX;
    let mut hb = 0usize;
    for &v in tmp {
        let k = index.get(v)?;
        lb = lb.min(k);
        hb = hb.max(k);
    }
    (hb - lb + 1 == tmp.len()).then_some(Run { lb, hb })
}

/// Replay `order` forward and return the final outer boundary.
///
/// Starts from the boundary `[π0, π2, π1]`. Each later vertex must see its
/// already placed neighbors as a run of at least two boundary vertices; the run's
/// interior is buried and the vertex is spliced between the run's endpoints.
/// The first failing step rejects the whole order.
pub fn replay<S: MembershipSet>(
    graph: &Graph,
    order: &CanonicalOrder,
) -> Result<Vec<usize>, ReplayFailure> {
    let n = graph.vertex_count();
    let pi = order.as_slice();
    if pi.len() != n || n < 3 {
        return Err(ReplayFailure::OrderLength {
            expected: n,
            found: pi.len(),
        });
    }
    if let Some(&vertex) = pi.iter().find(|&&v| v >= n) {
        return Err(ReplayFailure::VertexOutOfRange { vertex });
    }

    let mut boundary = vec![pi[0], pi[2], pi[1]];
    let mut placed = S::with_universe(n);
    placed.assign(&pi[..3]);
    let mut index = PositionIndex::new(n);
    let mut tmp = Vec::new();

    for (step, &v) in pi.iter().enumerate().skip(3) {
        placed.intersect(graph.neighbors(v), None, &mut tmp);
        index.rebuild(&boundary);
        let run = are_consecutive(&tmp, &boundary, &index)
            // a single attachment point would repeat a vertex on the boundary
            .filter(|run| run.lb < run.hb)
            .ok_or(ReplayFailure::ConsecutiveRun { step, vertex: v })?;
        let (left, right) = (boundary[run.lb], boundary[run.hb]);
        boundary.splice(run.lb..=run.hb, [left, v, right]);
        placed.insert(v);
    }
    Ok(boundary)
}
