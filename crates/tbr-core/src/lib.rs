//! TBR Core Library
//!
//! This crate provides the core functionality for TBR (To Be Read),
//! a local reading-list tracker backed by a single JSON snapshot.
//!
//! # Architecture
//!
//! The `Store` owns the ordered book collection and is the only writer
//! to the persisted snapshot. Every committed mutation rewrites the
//! full snapshot and notifies subscribers.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open()?;
//!
//! // Add a book
//! let book = Book::new("/works/OL27448W", "The Lord of the Rings");
//! store.add_book(book);
//!
//! // Move it to the Currently Reading shelf
//! store.move_book("/works/OL27448W", Status::Reading);
//! ```
//!
//! # Modules
//!
//! - `store`: the reading-list store (main entry point)
//! - `models`: data structures for books and statuses
//! - `storage`: snapshot persistence
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::{Book, Status};
pub use storage::{SnapshotPersistence, StorageError};
pub use store::{Store, SubscriptionId};
