//! Shelf view
//!
//! Splits the stored books into the "not yet read" and "finished" shelves,
//! optionally narrowed by a title search.

use serde::Serialize;

use crate::models::Book;

/// Books partitioned by read status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShelfView {
    /// Normalized query (lower-cased, trimmed); empty when unfiltered
    pub query: String,
    /// Books not yet read, in stored order
    pub unfinished: Vec<Book>,
    /// Books already read, in stored order
    pub finished: Vec<Book>,
}

impl ShelfView {
    /// Build a view of `books` whose titles contain `query`
    ///
    /// Matching is case-insensitive substring search on the title. An empty
    /// or whitespace-only query matches every book.
    pub fn build(books: impl IntoIterator<Item = Book>, query: &str) -> Self {
        let query = query.trim().to_lowercase();
        let (finished, unfinished): (Vec<Book>, Vec<Book>) = books
            .into_iter()
            .filter(|b| query.is_empty() || title_matches(b, &query))
            .partition(|b| b.is_complete);

        Self {
            query,
            unfinished,
            finished,
        }
    }

    /// Whether a search query narrowed the view
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn unfinished_count(&self) -> usize {
        self.unfinished.len()
    }

    pub fn finished_count(&self) -> usize {
        self.finished.len()
    }

    pub fn total(&self) -> usize {
        self.unfinished.len() + self.finished.len()
    }

    /// Placeholder text for an empty shelf
    pub fn empty_message(&self) -> &'static str {
        if self.is_filtered() {
            "No matching books"
        } else {
            "No books on this shelf yet"
        }
    }
}

fn title_matches(book: &Book, query: &str) -> bool {
    book.title.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<Book> {
        let mut read = Book::with_id(2, "The Rust Programming Language", "Klabnik", 2018);
        read.set_complete(true);
        vec![
            Book::with_id(1, "Programming Rust", "Blandy", 2017),
            read,
            Book::with_id(3, "Bumi Manusia", "Pramoedya", 1980),
        ]
    }

    #[test]
    fn test_partition_without_query() {
        let view = ShelfView::build(books(), "");
        assert!(!view.is_filtered());
        assert_eq!(
            view.unfinished.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(view.finished.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(view.total(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let view = ShelfView::build(books(), "  RUST ");
        assert!(view.is_filtered());
        assert_eq!(view.query, "rust");
        assert_eq!(view.unfinished_count(), 1);
        assert_eq!(view.finished_count(), 1);
    }

    #[test]
    fn test_query_matches_title_only() {
        let view = ShelfView::build(books(), "pramoedya");
        assert_eq!(view.total(), 0);
        assert_eq!(view.empty_message(), "No matching books");
    }

    #[test]
    fn test_whitespace_query_matches_all() {
        let view = ShelfView::build(books(), "   ");
        assert!(!view.is_filtered());
        assert_eq!(view.total(), 3);
    }

    #[test]
    fn test_empty_shelf_message() {
        let view = ShelfView::build(Vec::new(), "");
        assert_eq!(view.empty_message(), "No books on this shelf yet");
    }
}
