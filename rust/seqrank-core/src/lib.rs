//! Seqrank Core
//!
//! Sequence construction, in-place descending ranking, wall-clock timing,
//! and the CPU-bound workloads shared by the entry binary and the
//! benchmark runner.

pub mod error;
pub mod sequence;
pub mod timing;
pub mod workload;
