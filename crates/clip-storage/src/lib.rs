//! Mapping store backends for the clip URL shortener.
//!
//! Two implementations of the [`MappingStore`] contract: an in-memory store
//! for tests and single-process deployments, and a MySQL store for durable
//! deployments.

pub mod memory;
pub mod mysql;

pub use clip_core::{MappingStore, StoreError};
pub use memory::MemoryStore;
pub use mysql::MySqlStore;
