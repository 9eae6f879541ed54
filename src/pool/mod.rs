//! Thread-safe object pooling for instance reuse
//!
//! An [`ObjectPool`] hands out reusable instances of a caller-defined type,
//! constructing a new one through a [`Factory`] when none are available and
//! accepting returned instances for future reuse. Values come back wrapped
//! in a [`PooledValue`] guard that returns them to the pool on drop.

mod factory;
mod object_pool;
mod stats;

pub use factory::Factory;
pub use object_pool::{ObjectPool, PooledValue};
pub use stats::PoolStats;
