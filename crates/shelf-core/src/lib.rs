//! Bookshelf Core Library
//!
//! This crate provides the core functionality for Bookshelf, a small
//! manager for book records that tracks which books have been read.
//!
//! # Architecture
//!
//! - **Key-value store**: the whole book list is one JSON array stored
//!   under a single key, in a file, SQLite, or memory backend
//! - **Repository**: read-modify-write CRUD over that list
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open_with_config(Config::load()?)?;
//!
//! // Add a book
//! let book = BookDraft::new("Dune", "Frank Herbert", 1965).into_book()?;
//! store.add_book(book)?;
//!
//! // Query books
//! let view = store.shelf("")?;
//! ```
//!
//! # Modules
//!
//! - `store`: Unified storage interface (main entry point)
//! - `repository`: Book repository over a key-value backend
//! - `models`: Book records and input validation
//! - `view`: Unfinished/finished partition with title search
//! - `storage`: Key-value backends
//! - `config`: Application configuration

pub mod config;
pub mod models;
pub mod repository;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{Backend, Config};
pub use models::{generate_id, Book, BookDraft, BookId, ValidationError};
pub use repository::{BookRepository, RepositoryError, RepositoryResult, DEFAULT_STORAGE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SqliteStore, StorageError, StorageResult};
pub use store::Store;
pub use view::ShelfView;
