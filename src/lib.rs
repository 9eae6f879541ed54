//! Thread synchronization building blocks
//!
//! This crate provides two small primitives for coordinating work across
//! threads:
//!
//! - [`WaitGroup`]: a counter-based completion barrier — register tasks
//!   with [`add`](WaitGroup::add), signal completion with
//!   [`done`](WaitGroup::done), block until everything finished with
//!   [`wait`](WaitGroup::wait).
//! - [`ObjectPool`]: a thread-safe cache of reusable instances backed by a
//!   caller-supplied [`Factory`] for on-demand creation.
//!
//! Both primitives are independent, safe to share across any number of
//! threads, and delegate their locking to `parking_lot`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use synckit::{ObjectPool, WaitGroup};
//!
//! let pool = Arc::new(ObjectPool::new(|| Vec::<u8>::with_capacity(4096)));
//! let wg = WaitGroup::new();
//!
//! for n in 0..4u8 {
//!     wg.add(1).unwrap();
//!     let pool = pool.clone();
//!     let wg = wg.clone();
//!     thread::spawn(move || {
//!         let mut buf = pool.get().unwrap();
//!         buf.clear();
//!         buf.push(n);
//!         drop(buf); // back into the pool
//!         wg.done().unwrap();
//!     });
//! }
//!
//! wg.wait();
//! assert!(pool.available() >= 1);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod pool;
pub mod wait_group;

pub use error::{SyncError, SyncResult};
pub use pool::{Factory, ObjectPool, PoolStats, PooledValue};
pub use wait_group::WaitGroup;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
