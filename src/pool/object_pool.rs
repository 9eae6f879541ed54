//! Core object pool implementation

use std::fmt;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;
use tracing::trace;

use super::{Factory, PoolStats};
use crate::error::SyncResult;

/// Thread-safe pool of reusable instances.
///
/// Instances are created lazily through the caller-supplied [`Factory`] and
/// retained indefinitely once returned: the pool only grows its retained
/// set, never shrinks it. The free list is last-in-first-out, so the most
/// recently returned instance is handed out first.
///
/// Recycled instances are handed back exactly as they were returned — the
/// pool performs no reset. Callers that need a clean instance clear it
/// themselves, either before returning or after acquiring.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use synckit::ObjectPool;
///
/// let pool = Arc::new(ObjectPool::new(|| Vec::<u8>::with_capacity(1024)));
///
/// let handles: Vec<_> = (0..10)
///     .map(|_| {
///         let pool = pool.clone();
///         thread::spawn(move || {
///             let mut buffer = pool.get().unwrap();
///             buffer.clear();
///             buffer.extend_from_slice(b"hello");
///         })
///     })
///     .collect();
///
/// for h in handles {
///     h.join().unwrap();
/// }
/// ```
pub struct ObjectPool<T> {
    free: Mutex<Vec<T>>,
    factory: Box<dyn Factory<T>>,
    stats: PoolStats,
}

impl<T> ObjectPool<T> {
    /// Create a new pool around a factory.
    ///
    /// No instances are created up front; the factory runs on the first
    /// [`get`](Self::get) that finds the free list empty.
    pub fn new<F>(factory: F) -> Self
    where
        F: Factory<T> + 'static,
    {
        Self {
            free: Mutex::new(Vec::new()),
            factory: Box::new(factory),
            stats: PoolStats::default(),
        }
    }

    /// Acquire an instance, reusing a previously returned one when possible.
    ///
    /// The returned guard hands the instance back to the pool when dropped;
    /// use [`PooledValue::detach`] to keep it permanently.
    ///
    /// A factory failure propagates as
    /// [`SyncError::Factory`](crate::SyncError::Factory) and leaves the
    /// pool untouched.
    ///
    /// The internal lock is not held across the factory call: a slow
    /// factory must not stall unrelated `get`/`put` traffic, and this keeps
    /// a factory that itself uses the pool from deadlocking. The free list
    /// may therefore have been refilled by other threads by the time a
    /// newly produced instance is returned.
    pub fn get(&self) -> SyncResult<PooledValue<'_, T>> {
        self.stats.record_get();

        let recycled = self.free.lock().pop();
        let value = match recycled {
            Some(value) => {
                self.stats.record_hit();
                trace!(target: "synckit::pool", "reusing pooled instance");
                value
            }
            None => {
                self.stats.record_miss();
                let value = self.factory.produce()?;
                self.stats.record_creation();
                trace!(target: "synckit::pool", "factory produced new instance");
                value
            }
        };

        Ok(PooledValue {
            value: ManuallyDrop::new(value),
            pool: self,
        })
    }

    /// Return an instance to the free list.
    ///
    /// This is what [`PooledValue`]'s drop does; call it directly to hand
    /// back an instance that was [`detach`](PooledValue::detach)ed earlier.
    /// The pool does not check where the instance came from — a value that
    /// never originated here is simply handed out by a future
    /// [`get`](Self::get).
    pub fn put(&self, value: T) {
        self.free.lock().push(value);
        self.stats.record_return();
        trace!(target: "synckit::pool", "instance returned to free list");
    }

    /// Number of instances currently sitting in the free list.
    ///
    /// Instances handed out to callers are not tracked and not counted.
    pub fn available(&self) -> usize {
        self.free.lock().len()
    }

    /// Operation counters for this pool
    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }
}

impl<T> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("available", &self.available())
            .field("stats", &self.stats)
            .finish()
    }
}

/// RAII guard for a pooled instance.
///
/// Dereferences to the instance; dropping the guard returns the instance
/// to its pool.
pub struct PooledValue<'a, T> {
    value: ManuallyDrop<T>,
    pool: &'a ObjectPool<T>,
}

impl<'a, T> PooledValue<'a, T> {
    /// Take the instance out of pool management permanently.
    ///
    /// The pool will not see this instance again unless it is explicitly
    /// handed back with [`ObjectPool::put`].
    pub fn detach(mut self) -> T {
        let value = unsafe { ManuallyDrop::take(&mut self.value) };
        std::mem::forget(self);
        value
    }
}

impl<'a, T> Deref for PooledValue<'a, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<'a, T> DerefMut for PooledValue<'a, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

impl<'a, T> Drop for PooledValue<'a, T> {
    fn drop(&mut self) {
        let value = unsafe { ManuallyDrop::take(&mut self.value) };
        self.pool.put(value);
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for PooledValue<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
