//! Two-layer crossing minimization for layered ("Sugiyama") graph drawing.
//!
//! A layered drawing arranges nodes into ordered ranks. Between each pair of
//! adjacent ranks, the split heuristic reorders one level against its fixed
//! neighbor to reduce edge crossings, driven by a precomputed pairwise
//! crossings matrix.

pub mod crossings;
pub mod hierarchy;
pub mod split;

pub use crossings::{CrossingsMatrix, cross_count, cross_count_gated};
pub use hierarchy::{Adjacency, EdgeSubgraphs, HierarchyLevels, Level, LevelNode};
pub use split::SplitHeuristic;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
