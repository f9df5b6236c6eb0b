//! Wall-clock timing helpers.
//!
//! Monotonic `Instant` readings, so the reported duration reflects real
//! elapsed time regardless of scheduling. The two observation points must
//! bracket the measured region exactly.

use std::time::Instant;

/// Seconds elapsed between two observation points, as a fractional value.
///
/// Never negative: `Instant::duration_since` saturates to zero when `end`
/// precedes `start`.
pub fn elapsed_secs(start: Instant, end: Instant) -> f64 {
    end.duration_since(start).as_secs_f64()
}

/// Run a closure and return its result with the elapsed seconds.
pub fn time<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let out = f();
    let end = Instant::now();
    (out, elapsed_secs(start, end))
}
