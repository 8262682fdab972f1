//! Shared helpers for factory modules.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a process-wide unique counter value.
///
/// Used by factories to build unique default values (emails, names, slugs)
/// so multiple factory calls in the same test never collide on unique
/// columns.
pub fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
