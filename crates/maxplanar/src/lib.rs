//! Maximal planar graph recognition.
//!
//! A graph is maximal planar (a triangulation of the sphere) iff it has
//! `3V - 6` edges and some seed triangle yields a canonical ordering whose
//! forward replay always attaches each vertex to a contiguous arc of the outer
//! boundary. The search is written once, generic over the `MembershipSet`
//! backend used for its small dynamic vertex sets.
//!
//! Modules
//! - `graph`: adjacency storage and the dense text input format.
//! - `membership`: the set contract and its sorted / tree / bit-vector backends.
//! - `canonical`: ordering builder, replay validator, seed-search driver.
//! - `gen`: known-answer fixtures (platonic and random triangulations).

pub mod api;
pub mod canonical;
pub mod gen;
pub mod graph;
pub mod membership;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use canonical::{
    is_maximal_planar, recognize, recognize_with, Recognition, RecognizeCfg, Verdict,
};
pub use graph::{parse_adjacency, read_adjacency, Graph, InputError};
pub use membership::{Backend, MembershipSet};
