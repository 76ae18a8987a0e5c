//! Search dispatch: local library filtering vs. remote catalog search.
//!
//! Both modes produce the same [`Book`] representation so downstream
//! pagination and rendering never care where results came from.

use tracing::debug;

use crate::client::{ApiClient, ApiError};
use crate::model::Book;

/// Where a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive substring filter over the in-memory library
    /// snapshot. Synchronous, no network.
    Library,
    /// Free-text query against the external catalog via the backend.
    Catalog,
}

/// Result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank; the caller keeps its prior result set. An
    /// accidental Enter-press must not clear a visible result page.
    Unchanged,
    /// A new result list, in library order (Library mode) or remote order
    /// (Catalog mode).
    Matches(Vec<Book>),
}

/// Runs a search in the requested mode.
///
/// Blank and whitespace-only queries are a no-op in both modes. Library
/// mode matches the query case-insensitively against the title or any
/// author entry and returns the full match list in original library order
/// (single-result variants of this dispatcher are rejected uniformly).
/// Catalog mode delegates verbatim to the backend and preserves remote
/// order.
///
/// # Errors
///
/// Propagates [`ApiError`] from the catalog call; Library mode cannot
/// fail.
pub async fn dispatch(
    mode: SearchMode,
    query: &str,
    library: &[Book],
    client: &ApiClient,
) -> Result<SearchOutcome, ApiError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        debug!("blank search query, keeping prior results");
        return Ok(SearchOutcome::Unchanged);
    }

    match mode {
        SearchMode::Library => Ok(SearchOutcome::Matches(filter_library(trimmed, library))),
        SearchMode::Catalog => {
            let results = client.search_books(trimmed).await?;
            debug!(results = results.len(), "catalog search complete");
            Ok(SearchOutcome::Matches(results))
        }
    }
}

/// Case-insensitive substring filter over title and authors, preserving
/// library order.
fn filter_library(query: &str, library: &[Book]) -> Vec<Book> {
    let needle = query.to_lowercase();
    library
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book
                    .authors
                    .iter()
                    .any(|author| author.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
