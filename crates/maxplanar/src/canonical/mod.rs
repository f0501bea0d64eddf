//! Maximal planarity recognition via canonical orderings.
//!
//! Purpose
//! - Decide whether a graph is a triangulation of the sphere by building a
//!   vertex elimination order from a seed triangle (`order`), then replaying it
//!   forward and checking that every vertex attaches to a contiguous arc of
//!   the current outer boundary (`embed`).
//! - Drive the search over seed triangles anchored at a low-degree vertex and
//!   report the first witness (`recognize`).
//!
//! Why this design
//! - The builder and the replay are generic over `MembershipSet`, so the set
//!   backend is chosen by a type parameter and the algorithm exists once.
//! - All per-seed state (frontier, removed set, position index) lives inside a
//!   single attempt and is dropped with it; only the read-only `Graph` is shared.
//!
//! Flow per run
//! - edge count `E == 3V-6`? no → NO (no seed is tried)
//! - pick `v1` (degree ≤ 5) and `v2` (pivot neighbor)
//! - for each other neighbor `vn` closing a triangle: build order → replay →
//!   first valid replay → YES
//! - seeds exhausted → NO

mod embed;
mod order;
mod recognize;
mod types;

pub use embed::{are_consecutive, replay, PositionIndex, ReplayFailure, Run};
pub use order::{canonical_order, OrderFailure};
pub use recognize::{is_maximal_planar, recognize, recognize_with, triangulation_edge_count};
pub use types::{
    CanonicalOrder, PivotChoice, Recognition, RecognizeCfg, Rejection, SeedAttempt, SeedOutcome,
    SeedTriangle, Verdict, Witness,
};

#[cfg(test)]
mod tests;
