//! Matching pipeline: Classifier → Scorer → Ranker.
//!
//! Pure, deterministic functions over the corpus. No provider calls, no I/O.

pub mod classifier;
pub mod ranker;
pub mod scorer;
