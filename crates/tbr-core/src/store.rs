//! The reading-list store
//!
//! The `Store` owns the ordered book collection and is the single
//! source of truth for it. All changes go through the store's
//! operations; after every committed mutation the full collection is
//! written to the snapshot and subscribers are notified.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open()?;  // Loads snapshot or installs seed
//!
//! store.add_book(book);
//! store.move_book("/works/OL27448W", Status::Reading);
//! let reading = store.shelf(Status::Reading);
//! ```

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::config::Config;
use crate::models::{Book, Status};
use crate::storage::SnapshotPersistence;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    callback: Box<dyn FnMut(&[Book])>,
}

/// The reading-list store
///
/// Owns the ordered collection of tracked books. Relative order within
/// a shelf is significant; order across shelves is not.
pub struct Store {
    books: Vec<Book>,
    persistence: SnapshotPersistence,
    config: Config,
    subscribers: Vec<Subscriber>,
    next_subscriber: u64,
}

impl Store {
    /// Open the store, loading the snapshot or installing the seed set
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Self::open_with_config(config)
    }

    /// Open the store with a specific configuration
    pub fn open_with_config(config: Config) -> Result<Self> {
        let persistence = SnapshotPersistence::new(config.clone());

        let mut store = Self {
            books: Vec::new(),
            persistence,
            config,
            subscribers: Vec::new(),
            next_subscriber: 0,
        };
        store.reload();
        Ok(store)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Queries ====================

    /// The full collection, in storage order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by key
    pub fn get_book(&self, key: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.key == key)
    }

    /// The ordered sub-sequence of books on one shelf
    pub fn shelf(&self, status: Status) -> Vec<&Book> {
        self.books.iter().filter(|b| b.status == status).collect()
    }

    /// Total number of tracked books
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of books on one shelf
    pub fn shelf_count(&self, status: Status) -> usize {
        self.books.iter().filter(|b| b.status == status).count()
    }

    // ==================== Mutations ====================

    /// Add a book to the list
    ///
    /// New books always enter on the For Later shelf, whatever status
    /// the input carries. Adding a key that is already tracked is a
    /// silent no-op, so add is idempotent by key.
    pub fn add_book(&mut self, book: Book) {
        if self.books.iter().any(|b| b.key == book.key) {
            return;
        }

        let mut book = book;
        book.status = Status::Later;
        self.books.push(book);
        self.commit();
    }

    /// Remove a book, gated on a confirmation callback
    ///
    /// The callback receives the book about to be removed; returning
    /// `false` leaves the collection and the snapshot untouched. An
    /// absent key is a silent no-op. Returns whether a book was removed.
    pub fn remove_book<F>(&mut self, key: &str, confirm: F) -> bool
    where
        F: FnOnce(&Book) -> bool,
    {
        let Some(pos) = self.books.iter().position(|b| b.key == key) else {
            return false;
        };

        if !confirm(&self.books[pos]) {
            return false;
        }

        self.books.remove(pos);
        self.commit();
        true
    }

    /// Move a book to another shelf
    ///
    /// Only the status field changes; the book keeps its slot in the
    /// overall collection, so it displays at the end of its new shelf.
    /// An absent key is a silent no-op.
    pub fn move_book(&mut self, key: &str, status: Status) {
        let Some(book) = self.books.iter_mut().find(|b| b.key == key) else {
            return;
        };

        book.status = status;
        self.commit();
    }

    /// Reorder one shelf by moving the book at `from` to `to`
    ///
    /// Indices address the shelf's sub-sequence (0-based, in existing
    /// relative order). Out-of-range indices are rejected and the
    /// collection is left untouched. Books on other shelves keep their
    /// exact positions.
    pub fn reorder_books(&mut self, status: Status, from: usize, to: usize) -> Result<()> {
        // Work on a copy of the sub-sequence, then write it back into
        // the slots its books already occupy.
        let mut shelf: Vec<Book> = self
            .books
            .iter()
            .filter(|b| b.status == status)
            .cloned()
            .collect();

        let len = shelf.len();
        if from >= len || to >= len {
            bail!(
                "Reorder index out of range: {} -> {} on a shelf of {} book(s)",
                from,
                to,
                len
            );
        }

        let book = shelf.remove(from);
        shelf.insert(to, book);

        let mut replacements = shelf.into_iter();
        for slot in self.books.iter_mut() {
            if slot.status == status {
                if let Some(next) = replacements.next() {
                    *slot = next;
                }
            }
        }

        self.commit();
        Ok(())
    }

    /// Replace in-memory state from the snapshot
    ///
    /// Missing snapshot installs the seed set; an unreadable or
    /// unparseable snapshot is treated the same way, with a warning,
    /// and is left on disk until the next successful mutation
    /// overwrites it. Notifies subscribers.
    pub fn reload(&mut self) {
        self.books = match self.persistence.load() {
            Ok(Some(books)) => dedup_by_key(books),
            Ok(None) => seed_books(),
            Err(e) => {
                warn!(
                    "Could not load reading-list snapshot, starting from seed: {}",
                    e
                );
                seed_books()
            }
        };
        self.notify();
    }

    // ==================== Subscriptions ====================

    /// Register a callback invoked with the full collection after every
    /// committed mutation (and on reload)
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&[Book]) + 'static,
    {
        let id = SubscriptionId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscription; returns whether it existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    // ==================== Internals ====================

    /// Persist the collection and notify subscribers
    ///
    /// A failed snapshot write is reported as a warning; in-memory
    /// state stays authoritative for the session.
    fn commit(&mut self) {
        if let Err(e) = self.persistence.save(&self.books) {
            warn!("Could not persist reading list: {}", e);
        }
        self.notify();
    }

    fn notify(&mut self) {
        let Self {
            books, subscribers, ..
        } = self;
        for sub in subscribers.iter_mut() {
            (sub.callback)(books.as_slice());
        }
    }
}

/// Drop later duplicates of a key, keeping the first occurrence
fn dedup_by_key(books: Vec<Book>) -> Vec<Book> {
    let mut seen = std::collections::HashSet::new();
    books
        .into_iter()
        .filter(|b| seen.insert(b.key.clone()))
        .collect()
}

/// The built-in seed set, installed when no snapshot exists
fn seed_books() -> Vec<Book> {
    let mut reading = Book::new("/works/OL27448W", "The Lord of the Rings");
    reading.authors = vec!["J.R.R. Tolkien".to_string()];
    reading.first_publish_year = Some(1954);
    reading.pages_median = Some(1193);
    reading.status = Status::Reading;

    let mut later = Book::new("/works/OL262758W", "The Hobbit");
    later.authors = vec!["J.R.R. Tolkien".to_string()];
    later.first_publish_year = Some(1937);
    later.pages_median = Some(310);

    let mut done = Book::new("/works/OL893415W", "Dune");
    done.authors = vec!["Frank Herbert".to_string()];
    done.first_publish_year = Some(1965);
    done.pages_median = Some(604);
    done.status = Status::Done;

    vec![reading, later, done]
}
