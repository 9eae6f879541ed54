//! Counter-based completion barrier
//!
//! A [`WaitGroup`] tracks a count of outstanding tasks: producers register
//! work with [`add`](WaitGroup::add), workers signal completion with
//! [`done`](WaitGroup::done), and waiters block in [`wait`](WaitGroup::wait)
//! until the count returns to zero.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Condvar, Mutex};
use tracing::trace;

use crate::error::{SyncError, SyncResult};

/// Waits for a group of tasks to complete.
///
/// The counter starts at zero. Handles are cheap to clone and share the
/// same underlying counter, so a group can be handed to worker threads
/// without external wrapping.
///
/// # Example
/// ```
/// use std::thread;
///
/// use synckit::WaitGroup;
///
/// let wg = WaitGroup::new();
/// let mut handles = Vec::new();
///
/// for _ in 0..5 {
///     wg.add(1).unwrap();
///     let wg = wg.clone();
///     handles.push(thread::spawn(move || {
///         // ... do work ...
///         wg.done().unwrap();
///     }));
/// }
///
/// wg.wait();
/// assert_eq!(wg.count(), 0);
/// # for h in handles { h.join().unwrap(); }
/// ```
///
/// # Reuse
///
/// A group is reusable across successive rounds of work. Re-arming the
/// counter from zero while another thread is still inside [`wait`] for the
/// previous round is a caller race: make sure a round's `wait` has returned
/// before the next round's first `add`.
#[derive(Clone, Default)]
pub struct WaitGroup {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    count: Mutex<i64>,
    quiescent: Condvar,
}

impl WaitGroup {
    /// Create a new group with the counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjust the counter by `delta` (positive or negative).
    ///
    /// Never blocks. When the counter reaches exactly zero, every thread
    /// blocked in [`wait`](Self::wait) is woken. Driving the counter below
    /// zero fails with [`SyncError::NegativeCounter`] and leaves the
    /// counter unchanged.
    pub fn add(&self, delta: i64) -> SyncResult<()> {
        let mut count = self.inner.count.lock();
        let next = *count + delta;
        if next < 0 {
            return Err(SyncError::negative_counter(*count, delta));
        }
        *count = next;
        if next == 0 {
            trace!(target: "synckit::wait_group", "counter reached zero, waking waiters");
            self.inner.quiescent.notify_all();
        }
        Ok(())
    }

    /// Mark one task as done. Equivalent to `add(-1)`.
    pub fn done(&self) -> SyncResult<()> {
        self.add(-1)
    }

    /// Block until the counter is zero.
    ///
    /// Returns immediately when the counter is already zero. The zero
    /// predicate is re-checked under the lock after every wake, so spurious
    /// wake-ups and racing `add`/`done` calls cannot cause a missed or
    /// premature return.
    pub fn wait(&self) {
        let mut count = self.inner.count.lock();
        self.inner.quiescent.wait_while(&mut count, |c| *c != 0);
    }

    /// Block until the counter is zero or `timeout` elapses.
    ///
    /// Returns `true` if the counter was observed at zero, `false` on
    /// timeout.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let mut count = self.inner.count.lock();
        let result = self
            .inner
            .quiescent
            .wait_while_for(&mut count, |c| *c != 0, timeout);
        !result.timed_out()
    }

    /// Snapshot of the current counter value.
    ///
    /// Only a snapshot: another thread may change the counter immediately
    /// after this returns.
    pub fn count(&self) -> i64 {
        *self.inner.count.lock()
    }
}

impl fmt::Debug for WaitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitGroup")
            .field("count", &self.count())
            .finish()
    }
}
