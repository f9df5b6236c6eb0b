//! CPU-bound workloads measured by the benchmark runner.
//!
//! Three workloads from the original suite, each parameterised where the
//! reference scripts hardcoded sizes. Every workload returns a value
//! derived from its full computation so callers can keep the work live.

use crate::error::WorkloadError;
use crate::sequence;

/// Sequence length the reference array script uses.
pub const ARRAY_LEN: usize = 10_000;
/// Outer/inner loop counts of the reference concat script.
pub const CONCAT_ROUNDS: usize = 30;
pub const CONCAT_APPENDS: usize = 32_000;
/// Loop dimensions of the reference cycle script.
pub const CYCLE_OUTER: usize = 10;
pub const CYCLE_MID: usize = 32_000;
pub const CYCLE_INNER: usize = 32_000;

/// Reject a non-positive size supplied from outside.
pub fn validate_size(n: usize) -> Result<usize, WorkloadError> {
    if n == 0 {
        return Err(WorkloadError::InvalidArgument(
            "size must be at least 1".to_string(),
        ));
    }
    Ok(n)
}

/// Build `0..n-1` and rank it descending in place. Returns the final
/// length so the work cannot be discarded.
pub fn array(n: usize) -> usize {
    let mut seq = sequence::build(n);
    sequence::rank_descending(&mut seq);
    seq.len()
}

/// Repeated one-byte string append. Returns the final string length.
pub fn concat(rounds: usize, appends: usize) -> usize {
    let mut s = String::new();
    for _ in 0..rounds {
        for _ in 0..appends {
            s.push_str("a");
        }
    }
    s.len()
}

/// Counter loop that wraps back to zero past 50. Returns the final
/// counter value.
pub fn cycle(outer: usize, mid: usize, inner: usize) -> i64 {
    let mut c: i64 = 0;
    for _ in 0..outer {
        for _ in 0..mid {
            for _ in 0..inner {
                c += 1;
                if c > 50 {
                    c = 0;
                }
            }
        }
    }
    c
}
