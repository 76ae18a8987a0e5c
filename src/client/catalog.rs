//! External catalog search.
//!
//! The backend proxies the real catalog service; the client sees a flat
//! array of books already normalized to the library shape. Result order is
//! whatever the remote service returned and is preserved as-is.

use crate::model::Book;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Searches the external catalog with a free-text query.
    ///
    /// An empty result array is a successful search with no matches, not
    /// an error. Callers wanting to skip blank queries do so before
    /// reaching this client (see the search dispatcher).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BackendUnavailable`] on transport failure or a
    /// non-2xx status, [`ApiError::MalformedResponse`] if the body is not
    /// an array of books.
    #[tracing::instrument(skip(self))]
    pub async fn search_books(&self, query: &str) -> Result<Vec<Book>, ApiError> {
        let path = format!("/search_books?query={}", urlencoding::encode(query));
        self.get_json("search_books", &path).await
    }
}
