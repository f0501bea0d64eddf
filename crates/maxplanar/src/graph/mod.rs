//! Undirected simple graphs and the dense adjacency text format.
//!
//! Purpose
//! - Hold the read-only input of the recognizer: vertex count, edge count, and
//!   strictly ascending adjacency lists with an optional weight per edge.
//! - Parse and write the upper-triangle text format (`V`, then one token per
//!   pair `i < j`, `-1` for an absent edge).
//!
//! Why this design
//! - Sorted adjacency lets the set backends merge instead of hash, and makes
//!   `has_edge` a binary search.
//! - "No edge" and "ran out of input" are different outcomes of the parser;
//!   a truncated stream never turns into absent edges.

mod parse;
mod types;

pub use parse::{parse_adjacency, read_adjacency, InputError};
pub use types::{Graph, GraphError};
