//! Seed search driver.

use tracing::{debug, trace, warn};

use crate::graph::Graph;
use crate::membership::{Backend, BitSet, MembershipSet, SortedSet, TreeSet};

use super::embed::replay;
use super::order::canonical_order;
use super::types::{
    CanonicalOrder, PivotChoice, Recognition, RecognizeCfg, Rejection, SeedAttempt, SeedOutcome,
    SeedTriangle, Witness,
};

/// Some vertex of a triangulation has degree at most 5 (average degree < 6).
const MAX_ANCHOR_DEGREE: usize = 5;

/// `3V - 6`, or `None` when `V < 2`.
pub fn triangulation_edge_count(vertices: usize) -> Option<usize> {
    vertices.checked_mul(3)?.checked_sub(6)
}

/// Recognize maximal planarity with set backend `S`.
///
/// Stops at the first seed whose order replays cleanly. Seeds are `(v1, v2, vn)`
/// with `v1` the first vertex of degree ≤ 5, `v2` its pivot neighbor, and `vn`
/// every other neighbor of `v1` in ascending order that closes a triangle.
pub fn recognize<S: MembershipSet>(graph: &Graph, cfg: RecognizeCfg) -> Recognition {
    let n = graph.vertex_count();
    let found = graph.edge_count();
    let expected = triangulation_edge_count(n);
    if expected != Some(found) {
        debug!(vertices = n, edges = found, ?expected, "edge count gate rejected");
        return Recognition::rejected(Rejection::EdgeCount { expected, found }, Vec::new());
    }

    let Some(v1) = graph.low_degree_vertex(MAX_ANCHOR_DEGREE) else {
        warn!(
            vertices = n,
            edges = found,
            "no vertex of degree <= 5 despite E = 3V-6; input is not a simple connected graph"
        );
        return Recognition::rejected(Rejection::NoLowDegreeVertex, Vec::new());
    };
    let nbrs = graph.neighbors(v1);
    let pivot = match cfg.pivot {
        PivotChoice::Largest => nbrs.last(),
        PivotChoice::Smallest => nbrs.first(),
    };
    let Some(&v2) = pivot else {
        return Recognition::rejected(Rejection::SeedsExhausted, Vec::new());
    };

    let mut attempts = Vec::new();
    let mut tried = 0usize;
    for &vn in nbrs.iter().filter(|&&vn| vn != v2) {
        let seed = SeedTriangle { v1, v2, vn };
        if !graph.has_edge(v2, vn) {
            attempts.push(SeedAttempt {
                seed,
                outcome: SeedOutcome::NotTriangle,
            });
            continue;
        }
        if let Some(budget) = cfg.max_seed_attempts {
            if tried >= budget {
                debug!(budget, "seed budget exhausted");
                return Recognition::rejected(Rejection::SeedBudgetExhausted { budget }, attempts);
            }
        }
        tried += 1;
        debug!(%seed, "trying seed triangle");
        match attempt::<S>(graph, seed) {
            Ok(order) => {
                attempts.push(SeedAttempt {
                    seed,
                    outcome: SeedOutcome::Valid,
                });
                return Recognition::accepted(Witness { seed, order }, attempts);
            }
            Err(outcome) => attempts.push(SeedAttempt { seed, outcome }),
        }
    }
    Recognition::rejected(Rejection::SeedsExhausted, attempts)
}

/// Build and replay one seed. The error is the per-seed outcome, never fatal.
fn attempt<S: MembershipSet>(
    graph: &Graph,
    seed: SeedTriangle,
) -> Result<CanonicalOrder, SeedOutcome> {
    let order = canonical_order::<S>(graph, seed).map_err(|e| {
        debug!(%seed, placed = e.placed, "ordering failed");
        SeedOutcome::OrderFailed(e)
    })?;
    trace!(%seed, order = ?order.as_slice(), "canonical order");
    replay::<S>(graph, &order).map_err(|e| {
        debug!(%seed, failure = %e, "replay rejected order");
        SeedOutcome::Invalid(e)
    })?;
    Ok(order)
}

/// Dispatch to `recognize` with the backend picked at runtime.
pub fn recognize_with(graph: &Graph, backend: Backend, cfg: RecognizeCfg) -> Recognition {
    match backend {
        Backend::Sorted => recognize::<SortedSet>(graph, cfg),
        Backend::Tree => recognize::<TreeSet>(graph, cfg),
        Backend::Bits => recognize::<BitSet>(graph, cfg),
    }
}

/// YES/NO with the default backend and configuration.
pub fn is_maximal_planar(graph: &Graph) -> bool {
    recognize_with(graph, Backend::default(), RecognizeCfg::default()).is_maximal_planar()
}
