//! In-memory cache backend implementation.
//!
//! Provides a thread-safe in-memory store with per-entry TTL and a
//! background sweep that removes expired entries.

mod store;
mod sweep;

pub use store::MemoryStore;
pub use sweep::SweepHandle;
