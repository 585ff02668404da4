//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde::Serialize;
use shelf_core::{Book, ShelfView};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print a single book
    pub fn print_book(&self, book: &Book) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:     {}", book.id);
                println!("Title:  {}", book.title);
                println!("Author: {}", book.author);
                println!("Year:   {}", book.year);
                println!("Status: {}", status_label(book.is_complete));
            }
            OutputFormat::Json => print_json(book),
            OutputFormat::Quiet => println!("{}", book.id),
        }
    }

    /// Print both shelves of a view
    pub fn print_shelf(&self, view: &ShelfView) {
        match self.format {
            OutputFormat::Human => {
                if view.is_filtered() {
                    println!("Search: \"{}\"", view.query);
                    println!();
                }
                print_section("Not yet read", &view.unfinished, view.empty_message());
                println!();
                print_section("Finished", &view.finished, view.empty_message());
                println!("\n{} book(s)", view.total());
            }
            OutputFormat::Json => print_json(view),
            OutputFormat::Quiet => {
                for book in view.unfinished.iter().chain(&view.finished) {
                    println!("{}", book.id);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Shelf name for a read status
pub fn status_label(is_complete: bool) -> &'static str {
    if is_complete {
        "Finished"
    } else {
        "Not yet read"
    }
}

fn print_section(heading: &str, books: &[Book], empty_message: &str) {
    println!("── {} ({}) ──", heading, books.len());
    if books.is_empty() {
        println!("  {}", empty_message);
        return;
    }
    for book in books {
        println!("{}", format_row(book));
    }
}

fn format_row(book: &Book) -> String {
    format!(
        "{} | {} | {} | {}",
        book.id,
        truncate(&book.title, 35),
        truncate(&book.author, 25),
        book.year
    )
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode JSON output: {}", e),
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
