//! Cache backend implementations.
//!
//! Concrete implementations of the cache traits defined in
//! `elphi_calendar_core::cache`. Only the in-memory backend exists: nothing
//! is persisted across restarts and a cold start refills from upstream.

pub mod memory;

pub use memory::{MemoryStore, SweepHandle};
