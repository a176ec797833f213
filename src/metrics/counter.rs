// Package metrics: event counters for the mining loop.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically adjustable event counter.
///
/// Safe for concurrent increment/decrement from any number of threads.
/// Each operation is a single atomic read-modify-write on one cell, so no
/// update is ever lost or applied twice.
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Adds one to the counter.
    #[inline]
    pub fn increment(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    /// Subtracts one from the counter.
    ///
    /// The counter itself does not forbid going below zero; callers that
    /// treat the value as a non-negative quantity must keep their own
    /// increments ahead of their decrements (a decrement at zero wraps).
    #[inline]
    pub fn decrement(&self) {
        self.value.fetch_sub(1, Ordering::Relaxed);
    }

    /// Returns a snapshot of the current value.
    ///
    /// The snapshot is some value the counter held between call and
    /// return; it carries no ordering relative to unrelated state.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}
