//! Snapshot storage
//!
//! The reading list is persisted as a single JSON snapshot, rewritten in
//! full after every committed mutation.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::SnapshotPersistence;
