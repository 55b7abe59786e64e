//! Search module for the m,n,k engine
//!
//! Contains:
//! - Lexicographic enumeration of distinct permutations
//! - Exhaustive outcome scoring of simulated boards
//! - Progress and cancellation handles shared with worker threads

pub mod control;
pub mod permutation;
pub mod scorer;

pub use control::{CancelToken, Progress, ProgressListener};
pub use permutation::{distinct_permutation_count, next_permutation, Permutations};
pub use scorer::{seed_for, OutcomeScorer, OutcomeTally};
