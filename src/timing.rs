//! Timing and reporting sink.
//!
//! Every collection operation is bracketed by a start instant and a call to
//! [`report_elapsed`], which emits the duration as a `tracing` event. The sink
//! is purely observational.

use std::time::{Duration, Instant};

/// Emit the time elapsed since `start` for `operation` and return it.
pub fn report_elapsed(start: Instant, operation: &str) -> Duration {
    let elapsed = start.elapsed();
    let elapsed_ns = elapsed_nanos(elapsed);
    tracing::info!(operation, elapsed_ns, "{operation} took {elapsed_ns} ns");
    elapsed
}

/// Nanoseconds in `elapsed`, saturating at `u64::MAX`.
#[inline]
pub fn elapsed_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

/// Run `f`, report how long it took, and return its output.
pub fn timed<T>(operation: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    report_elapsed(start, operation);
    out
}
