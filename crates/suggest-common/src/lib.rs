//! Near-duplicate detection and diff highlighting for edit suggestions.
//!
//! Candidates are compared pairwise with a cut-off Damerau-Levenshtein
//! similarity, grouped into pools (connected components above a threshold),
//! reduced to a per-pool canonical form by folding Myers diffs, and rendered
//! as HTML fragments where text missing from the canonical form is
//! highlighted. Every call is pure; nothing is cached between runs.

pub mod canonical;
pub mod compare;
pub mod distance;
pub mod hashing;
pub mod normalization;
pub mod pooling;
pub mod render;
pub mod similarity;
pub mod types;

pub use compare::{compare_candidates, highlight_candidates};
pub use types::{ClusterConfig, Granularity, HighlightStyle, Pool, Threshold};
