//! Statistics tracking for object pools

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for pool operations
///
/// All counters are updated with relaxed atomics; values read while the
/// pool is under load are best-effort snapshots.
#[derive(Debug, Default)]
pub struct PoolStats {
    gets: AtomicU64,
    returns: AtomicU64,
    creates: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PoolStats {
    /// Record an acquisition attempt
    pub(crate) fn record_get(&self) {
        self.gets.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a free-list hit
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a free-list miss
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a factory invocation that produced an instance
    pub(crate) fn record_creation(&self) {
        self.creates.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an instance returned to the free list
    pub(crate) fn record_return(&self) {
        self.returns.fetch_add(1, Ordering::Relaxed);
    }

    /// Total `get` calls
    pub fn gets(&self) -> u64 {
        self.gets.load(Ordering::Relaxed)
    }

    /// Total instances returned to the pool
    pub fn returns(&self) -> u64 {
        self.returns.load(Ordering::Relaxed)
    }

    /// Total instances produced by the factory
    pub fn creates(&self) -> u64 {
        self.creates.load(Ordering::Relaxed)
    }

    /// `get` calls served from the free list
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// `get` calls that fell through to the factory
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Fraction of `get` calls served from the free list, in `[0, 1]`
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = self.gets() as f64;
        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }
}
