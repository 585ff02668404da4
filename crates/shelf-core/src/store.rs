//! Unified storage interface
//!
//! The `Store` opens the configured key-value backend and exposes the book
//! repository with `anyhow` context attached, for front ends.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open_with_config(Config::load()?)?;
//!
//! let book = BookDraft::new("Dune", "Frank Herbert", 1965).into_book()?;
//! store.add_book(book)?;
//!
//! let view = store.shelf("dune")?;
//! ```

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{Backend, Config};
use crate::models::{Book, BookId};
use crate::repository::BookRepository;
use crate::storage::{FileStore, KeyValueStore, SqliteStore};
use crate::view::ShelfView;

/// Unified storage interface for Bookshelf
pub struct Store {
    repo: BookRepository<Box<dyn KeyValueStore>>,
}

impl Store {
    /// Open the store with a specific configuration
    pub fn open_with_config(config: Config) -> Result<Self> {
        let backend: Box<dyn KeyValueStore> = match config.backend {
            Backend::File => Box::new(FileStore::open(&config.data_dir)),
            Backend::Sqlite => Box::new(
                SqliteStore::open(&config.sqlite_path())
                    .context("Failed to open SQLite database")?,
            ),
        };
        debug!(
            "Opened {} store at {:?} (key '{}')",
            config.backend, config.data_dir, config.storage_key
        );

        Ok(Self::with_backend(backend, config))
    }

    /// Build a store over an already-constructed backend
    pub fn with_backend(backend: Box<dyn KeyValueStore>, config: Config) -> Self {
        Self {
            repo: BookRepository::with_key(backend, config.storage_key),
        }
    }

    /// Whether the backend is usable
    pub fn is_available(&self) -> bool {
        self.repo.store().is_available()
    }

    // ==================== Book Operations ====================

    /// Add a new book
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        self.repo.add(book).context("Failed to add book")
    }

    /// Replace an existing book; returns `false` if no book has its id
    pub fn update_book(&mut self, book: &Book) -> Result<bool> {
        self.repo.update(book).context("Failed to update book")
    }

    /// Delete a book; returns `false` if no book has the id
    pub fn delete_book(&mut self, id: BookId) -> Result<bool> {
        self.repo.remove(id).context("Failed to delete book")
    }

    /// Flip a book's read status
    pub fn toggle_book(&mut self, id: BookId) -> Result<Option<Book>> {
        self.repo
            .toggle_complete(id)
            .context("Failed to toggle book status")
    }

    /// Get a book by ID
    pub fn get_book(&self, id: BookId) -> Result<Option<Book>> {
        self.repo.get(id).context("Failed to get book")
    }

    /// Get all books in stored order
    pub fn get_all_books(&self) -> Result<Vec<Book>> {
        self.repo.list().context("Failed to load books")
    }

    /// Books split into unfinished/finished shelves, filtered by title
    pub fn shelf(&self, query: &str) -> Result<ShelfView> {
        Ok(ShelfView::build(self.get_all_books()?, query))
    }

    /// Get count of books
    pub fn book_count(&self) -> Result<usize> {
        Ok(self.get_all_books()?.len())
    }
}
