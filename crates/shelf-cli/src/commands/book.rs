//! Book command handlers

use anyhow::{anyhow, Context, Result};

use shelf_core::{Book, BookDraft, BookId, Store};

use crate::editor::{confirm, is_interactive, prompt_with_default};
use crate::output::{status_label, Output};

/// Field changes requested for `edit`
#[derive(Debug, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub complete: Option<bool>,
}

impl BookChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.year.is_none()
            && self.complete.is_none()
    }

    /// Overlay the requested changes onto a draft
    pub fn apply(self, mut draft: BookDraft) -> BookDraft {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(author) = self.author {
            draft.author = author;
        }
        if let Some(year) = self.year {
            draft.year = year;
        }
        if let Some(complete) = self.complete {
            draft.is_complete = complete;
        }
        draft
    }
}

/// Add a new book
pub fn add(
    store: &mut Store,
    title: String,
    author: String,
    year: i32,
    complete: bool,
    output: &Output,
) -> Result<()> {
    let mut draft = BookDraft::new(title, author, year);
    draft.is_complete = complete;
    let book = draft.into_book().context("Invalid book details")?;

    store.add_book(book.clone()).context("Failed to add book")?;

    output.success(&outcome(
        store,
        format!(
            "Added \"{}\" to {}",
            book.title,
            status_label(book.is_complete)
        ),
    ));
    output.print_book(&book);

    Ok(())
}

/// List both shelves, optionally filtered by title
pub fn list(store: &Store, search: Option<String>, output: &Output) -> Result<()> {
    let view = store.shelf(search.as_deref().unwrap_or(""))?;
    output.print_shelf(&view);
    Ok(())
}

/// Show a single book
pub fn show(store: &Store, id: BookId, output: &Output) -> Result<()> {
    let book = find_book(store, id)?;
    output.print_book(&book);
    Ok(())
}

/// Edit a book
///
/// With no field flags on an interactive terminal, each field is prompted
/// for in turn.
pub fn edit(store: &mut Store, id: BookId, changes: BookChanges, output: &Output) -> Result<()> {
    let book = find_book(store, id)?;

    let changes = if changes.is_empty() && output.should_prompt() && is_interactive() {
        prompt_changes(&book)?
    } else {
        changes
    };

    let updated = changes
        .apply(book.to_draft())
        .into_book_with_id(book.id)
        .context("Invalid book details")?;

    if !store.update_book(&updated)? {
        return Err(anyhow!("Book not found: {}", id));
    }

    output.success(&outcome(store, format!("Updated \"{}\"", updated.title)));
    output.print_book(&updated);

    Ok(())
}

/// Delete a book
pub fn delete(store: &mut Store, id: BookId, yes: bool, output: &Output) -> Result<()> {
    let book = find_book(store, id)?;

    if !yes && output.should_prompt() {
        output.message(&format!("Delete book: {} - {}", book.id, book.title));
        if !confirm("Are you sure?")? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    store.delete_book(id).context("Failed to delete book")?;

    output.success(&outcome(store, format!("Deleted \"{}\"", book.title)));

    Ok(())
}

/// Move a book to the other shelf
pub fn toggle(store: &mut Store, id: BookId, output: &Output) -> Result<()> {
    let book = store
        .toggle_book(id)?
        .ok_or_else(|| anyhow!("Book not found: {}", id))?;

    output.success(&outcome(
        store,
        format!(
            "Moved \"{}\" to {}",
            book.title,
            status_label(book.is_complete)
        ),
    ));
    if output.is_json() || output.is_quiet() {
        output.print_book(&book);
    }

    Ok(())
}

/// Success text, flagged when the backend dropped the write
fn outcome(store: &Store, message: String) -> String {
    if store.is_available() {
        message
    } else {
        format!("{} (not saved)", message)
    }
}

fn find_book(store: &Store, id: BookId) -> Result<Book> {
    store
        .get_book(id)?
        .ok_or_else(|| anyhow!("Book not found: {}", id))
}

fn prompt_changes(book: &Book) -> Result<BookChanges> {
    println!("Editing book: {}", book.id);
    println!("Press Enter to keep current value, or type new value.\n");

    let title = prompt_with_default("Title", &book.title)?;
    let author = prompt_with_default("Author", &book.author)?;
    let year = prompt_with_default("Year", &book.year.to_string())?
        .map(|y| y.parse::<i32>().with_context(|| format!("Invalid year: {}", y)))
        .transpose()?;
    let complete = prompt_with_default(
        "Finished (y/n)",
        if book.is_complete { "y" } else { "n" },
    )?
    .map(|v| v.eq_ignore_ascii_case("y") || v.eq_ignore_ascii_case("yes"));

    Ok(BookChanges {
        title,
        author,
        year,
        complete,
    })
}
