//! Data models for Bookshelf
//!
//! Defines the stored `Book` record and `BookDraft`, the unvalidated input
//! that front ends collect before a book is created or edited.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a stored book
///
/// Derived from the creation time in epoch milliseconds. Two books created
/// within the same millisecond share an id; nothing rejects that.
pub type BookId = i64;

/// Generate a new book id from the current time
pub fn generate_id() -> BookId {
    Utc::now().timestamp_millis()
}

/// A single shelf record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Creation-timestamp id
    pub id: BookId,
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Publication year
    pub year: i32,
    /// Whether the book has been read
    pub is_complete: bool,
}

impl Book {
    /// Create a book with a freshly generated id
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self::with_id(generate_id(), title, author, year)
    }

    /// Create a book with a specific id (for loading or replacing records)
    pub fn with_id(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            is_complete: false,
        }
    }

    /// Mark the book read or unread
    pub fn set_complete(&mut self, is_complete: bool) {
        self.is_complete = is_complete;
    }

    /// Flip the read status
    pub fn toggle(&mut self) {
        self.is_complete = !self.is_complete;
    }

    /// Build an editable draft pre-filled with this book's fields
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year,
            is_complete: self.is_complete,
        }
    }
}

/// Input rejected at the front-end boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Author must not be empty")]
    EmptyAuthor,

    #[error("Year must not be zero")]
    ZeroYear,
}

/// Unvalidated book fields as entered by a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_complete: bool,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            is_complete: false,
        }
    }

    /// Trim text fields and reject empty title/author or a zero year
    ///
    /// Storage never re-checks these rules; records written by other means
    /// are loaded as-is.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let title = self.title.trim().to_string();
        let author = self.author.trim().to_string();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        if self.year == 0 {
            return Err(ValidationError::ZeroYear);
        }

        Ok(Self {
            title,
            author,
            year: self.year,
            is_complete: self.is_complete,
        })
    }

    /// Validate and turn into a new book with a generated id
    pub fn into_book(self) -> Result<Book, ValidationError> {
        self.into_book_with_id(generate_id())
    }

    /// Validate and turn into a book carrying an existing id
    pub fn into_book_with_id(self, id: BookId) -> Result<Book, ValidationError> {
        let draft = self.validate()?;
        Ok(Book {
            id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
            is_complete: draft.is_complete,
        })
    }
}
