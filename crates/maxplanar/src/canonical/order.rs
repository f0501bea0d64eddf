//! Canonical ordering builder (back-to-front elimination from a seed).

use std::fmt;

use crate::graph::Graph;
use crate::membership::MembershipSet;

use super::types::{CanonicalOrder, SeedTriangle};

/// No frontier vertex satisfied the link condition after `placed` eliminations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderFailure {
    pub placed: usize,
}

impl fmt::Display for OrderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no frontier vertex with exactly two live neighbors after {} placement(s)",
            self.placed
        )
    }
}

/// Build a canonical order from `seed`, eliminating vertices back to front.
///
/// Each step picks the first frontier vertex (ascending id, `v1`/`v2` excluded)
/// with exactly two neighbors in `frontier \ removed`, writes it at the next
/// free slot from the end, and merges its unremoved neighbors into the frontier.
/// There is no backtracking: a step without such a vertex fails the seed.
///
/// The seed must be a triangle of `graph` with three distinct vertices.
pub fn canonical_order<S: MembershipSet>(
    graph: &Graph,
    seed: SeedTriangle,
) -> Result<CanonicalOrder, OrderFailure> {
    OrderBuilder::<S>::new(graph, seed).run()
}

/// Per-seed builder state; dropped with the attempt.
struct OrderBuilder<'a, S> {
    g: &'a Graph,
    seed: SeedTriangle,
    /// Live frontier, strictly ascending (defines the scan order).
    frontier: Vec<usize>,
    /// Membership mirror of `frontier`.
    frontier_set: S,
    removed: S,
    order: Vec<usize>,
    write_pos: usize,
    link: Vec<usize>,
    next: Vec<usize>,
}

impl<'a, S: MembershipSet> OrderBuilder<'a, S> {
    fn new(g: &'a Graph, seed: SeedTriangle) -> Self {
        let n = g.vertex_count();
        let mut frontier = vec![seed.v1, seed.v2, seed.vn];
        frontier.sort_unstable();
        let mut frontier_set = S::with_universe(n);
        frontier_set.assign(&frontier);
        let mut order = vec![seed.v1; n];
        order[1] = seed.v2;
        Self {
            g,
            seed,
            frontier,
            frontier_set,
            removed: S::with_universe(n),
            order,
            write_pos: n - 1,
            link: Vec::new(),
            next: Vec::new(),
        }
    }

    fn run(mut self) -> Result<CanonicalOrder, OrderFailure> {
        let to_place = self.g.vertex_count() - 2;
        for placed in 0..to_place {
            let v = self.pick_link_vertex().ok_or(OrderFailure { placed })?;
            self.place(v);
        }
        Ok(CanonicalOrder(self.order))
    }

    /// First frontier vertex whose live neighborhood in the frontier has size 2.
    fn pick_link_vertex(&mut self) -> Option<usize> {
        for i in 0..self.frontier.len() {
            let v = self.frontier[i];
            if v == self.seed.v1 || v == self.seed.v2 {
                continue;
            }
            self.frontier_set
                .intersect(self.g.neighbors(v), Some(&self.removed), &mut self.link);
            if self.link.len() == 2 {
                return Some(v);
            }
        }
        None
    }

    fn place(&mut self, v: usize) {
        self.removed.insert(v);
        self.order[self.write_pos] = v;
        self.write_pos -= 1;
        // v is in `removed` now, so the union drops it from the frontier
        self.frontier_set
            .union(self.g.neighbors(v), Some(&self.removed), &mut self.next);
        std::mem::swap(&mut self.frontier, &mut self.next);
        self.frontier_set.assign(&self.frontier);
    }
}
