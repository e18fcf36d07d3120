//! Dispatch counters for observability

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a single dispatcher.
///
/// Atomics, so `&self` dispatch can record outcomes without locking.
#[derive(Debug, Default)]
pub struct RouterMetrics {
    /// Messages delivered through an explicit binding
    routed_count: AtomicU64,
    /// Messages delivered through the default route
    defaulted_count: AtomicU64,
    /// Messages with no binding and no default
    unroutable_count: AtomicU64,
    /// Messages rejected by the resolved queue
    rejected_count: AtomicU64,
}

impl RouterMetrics {
    /// Create a zeroed counter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered through an explicit binding
    pub fn routed_count(&self) -> u64 {
        self.routed_count.load(Ordering::Relaxed)
    }

    /// Increment the explicit-route counter
    pub fn inc_routed(&self) {
        self.routed_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Messages delivered through the default route
    pub fn defaulted_count(&self) -> u64 {
        self.defaulted_count.load(Ordering::Relaxed)
    }

    /// Increment the default-route counter
    pub fn inc_defaulted(&self) {
        self.defaulted_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Messages with no binding and no default
    pub fn unroutable_count(&self) -> u64 {
        self.unroutable_count.load(Ordering::Relaxed)
    }

    /// Increment the unroutable counter
    pub fn inc_unroutable(&self) {
        self.unroutable_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Messages rejected by the resolved queue
    pub fn rejected_count(&self) -> u64 {
        self.rejected_count.load(Ordering::Relaxed)
    }

    /// Increment the rejected counter
    pub fn inc_rejected(&self) {
        self.rejected_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            routed_count: self.routed_count(),
            defaulted_count: self.defaulted_count(),
            unroutable_count: self.unroutable_count(),
            rejected_count: self.rejected_count(),
        }
    }
}

/// Snapshot of dispatch counters (for reporting)
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub routed_count: u64,
    pub defaulted_count: u64,
    pub unroutable_count: u64,
    pub rejected_count: u64,
}
