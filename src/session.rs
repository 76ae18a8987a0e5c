//! Session state: the single source of truth for one running client.
//!
//! A [`Session`] owns the library snapshot, the current search results and
//! page, and the author-bio cache. All mutation flows through it;
//! grouping and pagination only derive read-only views. There is exactly
//! one session per process and it is driven from one task, so no locking
//! is involved anywhere.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::bio_cache::AuthorBioCache;
use crate::client::{ApiClient, ApiError};
use crate::grouping::{RangeLabel, group_by_range};
use crate::model::{AuthorBio, Book, Quote, ReadingStatus};
use crate::pagination::{DEFAULT_PAGE_SIZE, needs_pagination, page_count, paginate};
use crate::search::{SearchMode, SearchOutcome, dispatch};

/// One running client's state, from load to close.
#[derive(Debug)]
pub struct Session {
    client: ApiClient,
    library: Vec<Book>,
    results: Vec<Book>,
    page: usize,
    page_size: usize,
    bio_cache: AuthorBioCache,
}

impl Session {
    /// Creates a session with the default page size. The library snapshot
    /// starts empty; call [`Session::refresh_library`] to populate it.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self::with_page_size(client, DEFAULT_PAGE_SIZE)
    }

    /// Creates a session with an explicit page size.
    #[must_use]
    pub fn with_page_size(client: ApiClient, page_size: usize) -> Self {
        Self {
            client,
            library: Vec::new(),
            results: Vec::new(),
            page: 1,
            page_size,
            bio_cache: AuthorBioCache::new(),
        }
    }

    /// The current library snapshot.
    #[must_use]
    pub fn library(&self) -> &[Book] {
        &self.library
    }

    /// The current full result list (all pages).
    #[must_use]
    pub fn results(&self) -> &[Book] {
        &self.results
    }

    /// Current 1-based page number.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Results shown per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The backend client, for pass-through operations.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Replaces the library snapshot with the backend's current state.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the fetch; the prior snapshot is kept
    /// on failure so the session stays usable.
    pub async fn refresh_library(&mut self) -> Result<usize, ApiError> {
        let books = self.client.get_books().await?;
        info!(books = books.len(), "library snapshot refreshed");
        self.library = books;
        Ok(self.library.len())
    }

    /// Library view grouped into navigation buckets. Derived on demand;
    /// never mutates the snapshot.
    #[must_use]
    pub fn grouped_library(&self) -> BTreeMap<RangeLabel, Vec<&Book>> {
        group_by_range(&self.library)
    }

    /// Runs a search and stores the outcome as the current result set.
    ///
    /// Returns `false` when the query was blank: the prior result set and
    /// page are kept untouched. On new results the page resets to 1 and
    /// every result is cross-referenced against the library snapshot to
    /// set its membership flag (title + first author, never isbn).
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from a catalog search; the prior result
    /// set is kept on failure.
    pub async fn search(&mut self, mode: SearchMode, query: &str) -> Result<bool, ApiError> {
        match dispatch(mode, query, &self.library, &self.client).await? {
            SearchOutcome::Unchanged => Ok(false),
            SearchOutcome::Matches(mut matches) => {
                for book in &mut matches {
                    let known = self.library.iter().any(|entry| entry.same_identity(book));
                    book.in_library = Some(known);
                }
                debug!(results = matches.len(), "search results replaced");
                self.results = matches;
                self.page = 1;
                Ok(true)
            }
        }
    }

    /// The visible slice of the current result set.
    #[must_use]
    pub fn visible_results(&self) -> &[Book] {
        paginate(&self.results, self.page, self.page_size)
    }

    /// Total pages in the current result set.
    #[must_use]
    pub fn result_page_count(&self) -> usize {
        page_count(self.results.len(), self.page_size)
    }

    /// True when the result set does not fit on one page.
    #[must_use]
    pub fn results_need_pagination(&self) -> bool {
        needs_pagination(self.results.len(), self.page_size)
    }

    /// Moves to a 1-based page. Out-of-range pages are stored as-is and
    /// simply show an empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Adds a book to the library with a status and returns the backend
    /// acknowledgement. On acknowledgement the book joins the local
    /// snapshot, so membership checks immediately see it.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`]; the snapshot is unchanged on failure.
    pub async fn add_book(
        &mut self,
        book: &Book,
        status: ReadingStatus,
    ) -> Result<String, ApiError> {
        let message = self.client.add_book(book, status).await?;
        let mut stored = book.clone();
        stored.status = Some(status);
        stored.in_library = Some(true);
        self.library.push(stored);
        Ok(message)
    }

    /// Updates the status of a library entry by title and returns the
    /// acknowledgement. The snapshot entry is updated in place.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`]; the snapshot is unchanged on failure.
    pub async fn update_status(
        &mut self,
        title: &str,
        status: ReadingStatus,
    ) -> Result<String, ApiError> {
        let message = self.client.update_book_status(title, status).await?;
        for book in self.library.iter_mut().filter(|book| book.title == title) {
            book.status = Some(status);
        }
        Ok(message)
    }

    /// Removes a library entry by isbn and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`]; the snapshot is unchanged on failure.
    pub async fn remove_book(&mut self, isbn: &str) -> Result<String, ApiError> {
        let message = self.client.delete_book(isbn).await?;
        self.library.retain(|book| book.isbn != isbn);
        Ok(message)
    }

    /// Author biography through the session cache: at most one network
    /// fetch per distinct author name for the life of the session.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from a cache-miss fetch; failures are not
    /// cached and the next call retries.
    pub async fn author_bio(&mut self, name: &str) -> Result<AuthorBio, ApiError> {
        self.bio_cache.get_or_fetch(&self.client, name).await
    }

    /// Quote of the day, passed through to the backend.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn quote_of_the_day(&self) -> Result<Quote, ApiError> {
        self.client.quote_of_the_day().await
    }

    /// Book summary by title, passed through to the backend.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`].
    pub async fn book_summary(&self, title: &str) -> Result<String, ApiError> {
        self.client.fetch_book_summary(title).await
    }
}
