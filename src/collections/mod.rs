//! Auxiliary data structures used by the algorithms.

pub mod disjoint_set;

pub use disjoint_set::DisjointSet;
