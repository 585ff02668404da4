//! Book repository
//!
//! CRUD and toggle operations over the list of books stored as one JSON
//! array under a single key. Every operation re-reads the whole list from
//! the backend; every mutation rewrites it.
//!
//! ## Degraded storage
//!
//! When the backend reports itself unavailable, reads return an empty list
//! and writes are dropped. Malformed JSON under the key is reported as
//! [`RepositoryError::MalformedStore`].
//!
//! ## Concurrency
//!
//! Mutations are read-modify-write cycles with no locking. `&mut self`
//! keeps one repository from interleaving them, but two processes sharing
//! a backend can still lose each other's writes.

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Book, BookId};
use crate::storage::{KeyValueStore, StorageError};

/// Key the book list is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "BOOKSHELF_APPS";

/// Errors raised by repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Stored data under '{key}' is not a valid book list: {source}")]
    MalformedStore {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize books: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository owning the canonical book list
pub struct BookRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BookRepository<S> {
    /// Create a repository using the default storage key
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Create a repository storing its list under `key`
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read every stored book
    ///
    /// An absent key, an empty value, or an unavailable backend all read as
    /// an empty list.
    pub fn list(&self) -> RepositoryResult<Vec<Book>> {
        if !self.store.is_available() {
            warn!("Storage unavailable; reading '{}' as empty", self.key);
            return Ok(Vec::new());
        }

        let books = match self.store.get(&self.key)? {
            Some(data) if !data.is_empty() => {
                serde_json::from_str(&data).map_err(|source| RepositoryError::MalformedStore {
                    key: self.key.clone(),
                    source,
                })?
            }
            _ => Vec::new(),
        };

        Ok(books)
    }

    /// Overwrite the stored list with `books`
    pub fn save(&mut self, books: &[Book]) -> RepositoryResult<()> {
        if !self.store.is_available() {
            warn!("Storage unavailable; dropping write to '{}'", self.key);
            return Ok(());
        }

        let data = serde_json::to_string(books).map_err(RepositoryError::Serialize)?;
        self.store.set(&self.key, &data)?;
        debug!("Saved {} book(s) under '{}'", books.len(), self.key);
        Ok(())
    }

    /// First book with a matching id
    pub fn get(&self, id: BookId) -> RepositoryResult<Option<Book>> {
        Ok(self.list()?.into_iter().find(|b| b.id == id))
    }

    /// Append a book
    pub fn add(&mut self, book: Book) -> RepositoryResult<()> {
        let mut books = self.list()?;
        debug!("Adding book {} ({:?})", book.id, book.title);
        books.push(book);
        self.save(&books)
    }

    /// Remove every book with a matching id
    ///
    /// Returns `false`, leaving storage untouched, when no book matched.
    pub fn remove(&mut self, id: BookId) -> RepositoryResult<bool> {
        let books = self.list()?;
        let before = books.len();
        let remaining: Vec<Book> = books.into_iter().filter(|b| b.id != id).collect();

        if remaining.len() == before {
            debug!("Remove: no book with id {}", id);
            return Ok(false);
        }

        debug!("Removing book {}", id);
        self.save(&remaining)?;
        Ok(true)
    }

    /// Replace the first book whose id matches `book.id`
    ///
    /// Returns `false`, leaving storage untouched, when no book matched.
    pub fn update(&mut self, book: &Book) -> RepositoryResult<bool> {
        let mut books = self.list()?;
        let Some(slot) = books.iter_mut().find(|b| b.id == book.id) else {
            debug!("Update: no book with id {}", book.id);
            return Ok(false);
        };

        *slot = book.clone();
        debug!("Updated book {}", book.id);
        self.save(&books)?;
        Ok(true)
    }

    /// Flip the read status of the first book with a matching id
    ///
    /// Returns the book as it was saved, or `None` when no book matched.
    pub fn toggle_complete(&mut self, id: BookId) -> RepositoryResult<Option<Book>> {
        let mut books = self.list()?;
        let Some(book) = books.iter_mut().find(|b| b.id == id) else {
            debug!("Toggle: no book with id {}", id);
            return Ok(None);
        };

        book.toggle();
        let toggled = book.clone();
        debug!("Toggled book {} to complete={}", id, toggled.is_complete);
        self.save(&books)?;
        Ok(Some(toggled))
    }
}
