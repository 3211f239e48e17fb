//! Plain-text rendering of service results for the MCP tools.

use crate::domain::model::book::Book;
use crate::domain::model::statistics::LibraryStatistics;

/// `- Dune by Frank Herbert (1965) - Genre: SciFi - Status: Read`
pub fn render_book(book: &Book) -> String {
    let status = if book.is_read() { "Read" } else { "Unread" };
    format!(
        "- {} by {} ({}) - Genre: {} - Status: {}",
        book.title(),
        book.author(),
        book.year(),
        book.genre(),
        status
    )
}

pub fn render_listing(books: &[Book]) -> String {
    if books.is_empty() {
        return "Your library is empty.".to_string();
    }
    let lines: Vec<String> = books.iter().map(render_book).collect();
    let noun = if books.len() == 1 { "book" } else { "books" };
    format!(
        "# Your Library ({} {})\n\n{}",
        books.len(),
        noun,
        lines.join("\n")
    )
}

pub fn render_search_results(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found matching your search.".to_string();
    }
    let lines: Vec<String> = books.iter().map(render_book).collect();
    format!(
        "Found {} matching book(s):\n\n{}",
        books.len(),
        lines.join("\n")
    )
}

pub fn render_statistics(stats: &LibraryStatistics) -> String {
    if stats.total == 0 {
        return "Your library is empty.".to_string();
    }
    format!(
        "Total books: {}\nBooks read: {} ({:.2}%)\nBooks unread: {} ({:.2}%)",
        stats.total,
        stats.read_count,
        stats.read_percentage,
        stats.unread_count,
        stats.unread_percentage
    )
}
