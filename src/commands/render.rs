//! Terminal rendering helpers shared by the command handlers.

use librarian_core::Book;

/// One-line rendering of a book: title, authors, and any status or
/// membership annotations.
pub(crate) fn book_line(book: &Book) -> String {
    let mut line = book.title.clone();
    if !book.authors.is_empty() {
        line.push_str(" by ");
        line.push_str(&book.authors.join(", "));
    }
    if let Some(status) = book.status {
        line.push_str(&format!(" [{status}]"));
    }
    if book.in_library == Some(true) {
        line.push_str(" (in library)");
    }
    line
}
