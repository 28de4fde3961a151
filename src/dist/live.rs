//! Live-distribution bookkeeping used for leak diagnostics.
//!
//! The count is process-wide: a distribution may be created on one thread
//! and dropped on another.

use std::sync::atomic::{AtomicIsize, Ordering};

static LIVE: AtomicIsize = AtomicIsize::new(0);

pub(super) fn created() {
    LIVE.fetch_add(1, Ordering::Relaxed);
}

pub(super) fn released() {
    LIVE.fetch_sub(1, Ordering::Relaxed);
}

/// Returns the number of distributions created and not yet released.
pub fn live_count() -> isize {
    LIVE.load(Ordering::Relaxed)
}

/// Logs a warning if any distribution is still alive and returns the count.
///
/// Never fails; a leak is a diagnostic only.
pub fn report_leaks() -> isize {
    let count = live_count();
    if count != 0 {
        tracing::warn!(count, "leaking distributions");
    }
    count
}
