//! Posting store implementations.

pub mod memory;

pub use memory::MemoryStore;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;
