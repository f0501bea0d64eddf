//! Seeds, orders, configuration, and the recognition report.

use std::fmt;

use super::embed::ReplayFailure;
use super::order::OrderFailure;

/// Three pairwise adjacent vertices anchoring one attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeedTriangle {
    pub v1: usize,
    pub v2: usize,
    pub vn: usize,
}

impl fmt::Display for SeedTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.v1, self.v2, self.vn)
    }
}

/// Full insertion order π over all vertices; `π[0] = v1`, `π[1] = v2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalOrder(pub(crate) Vec<usize>);

impl CanonicalOrder {
    /// Wrap an externally produced order (e.g. to replay it directly).
    pub fn from_vec(order: Vec<usize>) -> Self {
        Self(order)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

/// Which neighbor of `v1` becomes `v2`.
///
/// The seed search already iterates over every other neighbor as `vn`; the
/// pivot only fixes the outer edge `v1-v2`. `Largest` is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PivotChoice {
    #[default]
    Largest,
    Smallest,
}

/// Recognition configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecognizeCfg {
    pub pivot: PivotChoice,
    /// Stop after this many builder runs (external deadline hook). `None` = all seeds.
    pub max_seed_attempts: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    MaximalPlanar,
    NotMaximalPlanar,
}

impl Verdict {
    /// `YES` / `NO`, the one-line output format.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::MaximalPlanar => "YES",
            Verdict::NotMaximalPlanar => "NO",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the answer is NO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// `E != 3V-6`; `expected` is `None` when `3V-6 < 0`.
    EdgeCount {
        expected: Option<usize>,
        found: usize,
    },
    /// No vertex of degree ≤ 5 although the edge count matched.
    NoLowDegreeVertex,
    SeedsExhausted,
    /// `max_seed_attempts` reached before a witness was found.
    SeedBudgetExhausted { budget: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeCount {
                expected: Some(e),
                found,
            } => write!(f, "edge count {found} != 3V-6 = {e}"),
            Self::EdgeCount {
                expected: None,
                found,
            } => write!(f, "edge count {found}, fewer than 2 vertices"),
            Self::NoLowDegreeVertex => write!(f, "no vertex of degree <= 5"),
            Self::SeedsExhausted => write!(f, "no seed triangle yields a valid ordering"),
            Self::SeedBudgetExhausted { budget } => {
                write!(f, "seed budget of {budget} attempt(s) exhausted")
            }
        }
    }
}

/// Result of one seed candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// `v2-vn` is not an edge; no attempt was made.
    NotTriangle,
    OrderFailed(OrderFailure),
    Invalid(ReplayFailure),
    Valid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedAttempt {
    pub seed: SeedTriangle,
    pub outcome: SeedOutcome,
}

/// Winning seed and the order whose replay succeeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    pub seed: SeedTriangle,
    pub order: CanonicalOrder,
}

/// Outcome of a recognizer run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recognition {
    pub verdict: Verdict,
    pub rejection: Option<Rejection>,
    /// Every seed candidate considered, in search order.
    pub attempts: Vec<SeedAttempt>,
    pub witness: Option<Witness>,
}

impl Recognition {
    pub(crate) fn rejected(rejection: Rejection, attempts: Vec<SeedAttempt>) -> Self {
        Self {
            verdict: Verdict::NotMaximalPlanar,
            rejection: Some(rejection),
            attempts,
            witness: None,
        }
    }

    pub(crate) fn accepted(witness: Witness, attempts: Vec<SeedAttempt>) -> Self {
        Self {
            verdict: Verdict::MaximalPlanar,
            rejection: None,
            attempts,
            witness: Some(witness),
        }
    }

    #[inline]
    pub fn is_maximal_planar(&self) -> bool {
        self.verdict == Verdict::MaximalPlanar
    }

    /// Seeds for which the ordering builder actually ran.
    pub fn seeds_tried(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.outcome != SeedOutcome::NotTriangle)
            .count()
    }
}
