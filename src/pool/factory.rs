//! Factory abstraction for on-demand instance creation

use crate::error::SyncResult;

/// Produces new pool instances on demand.
///
/// Any infallible `Fn() -> T` closure is a factory out of the box:
///
/// ```
/// use synckit::ObjectPool;
///
/// let pool = ObjectPool::new(|| String::with_capacity(1024));
/// let s = pool.get().unwrap();
/// assert!(s.capacity() >= 1024);
/// ```
///
/// Fallible constructors implement the trait directly and surface their
/// failure as [`SyncError::Factory`](crate::SyncError::Factory):
///
/// ```
/// use synckit::{Factory, ObjectPool, SyncError, SyncResult};
///
/// struct Mmap {
///     len: usize,
/// }
///
/// struct MmapFactory {
///     len: usize,
/// }
///
/// impl Factory<Mmap> for MmapFactory {
///     fn produce(&self) -> SyncResult<Mmap> {
///         if self.len == 0 {
///             return Err(SyncError::factory("cannot map zero bytes"));
///         }
///         Ok(Mmap { len: self.len })
///     }
/// }
///
/// let pool = ObjectPool::new(MmapFactory { len: 4096 });
/// assert_eq!(pool.get().unwrap().len, 4096);
/// ```
pub trait Factory<T>: Send + Sync {
    /// Produce one new instance.
    fn produce(&self) -> SyncResult<T>;
}

impl<T, F> Factory<T> for F
where
    F: Fn() -> T + Send + Sync,
{
    fn produce(&self) -> SyncResult<T> {
        Ok(self())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;

    #[test]
    fn closures_are_factories() {
        let factory = || vec![0u8; 16];
        let buf: Vec<u8> = factory.produce().unwrap();
        assert_eq!(buf.len(), 16);
    }

    #[test]
    fn fallible_factory_surfaces_its_error() {
        struct Broken;

        impl Factory<u32> for Broken {
            fn produce(&self) -> SyncResult<u32> {
                Err(SyncError::factory("out of widgets"))
            }
        }

        let err = Broken.produce().unwrap_err();
        assert!(err.is_factory());
    }
}
