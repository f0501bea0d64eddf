//! Curated surface for callers (CLI, benches).
//!
//! Prefer these re-exports over reaching into submodules.

// Input
pub use crate::graph::{parse_adjacency, read_adjacency, Graph, GraphError, InputError};
// Set backends
pub use crate::membership::{Backend, BitSet, MembershipSet, SortedSet, TreeSet};
// Recognition
pub use crate::canonical::{
    canonical_order, is_maximal_planar, recognize, recognize_with, replay, CanonicalOrder,
    PivotChoice, Recognition, RecognizeCfg, Rejection, SeedOutcome, SeedTriangle, Verdict,
    Witness,
};
// Fixtures
pub use crate::gen::{
    icosahedron, octahedron, random_triangulation, tetrahedron, GeneratorError, StackedCfg,
    Triangulation,
};
