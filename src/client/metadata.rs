//! Supplementary metadata lookups: quote of the day, author biographies,
//! and book summaries.
//!
//! The backend scrapes these from third-party services, so shapes are
//! loose: the biography endpoint in particular may answer with a non-JSON
//! body when the upstream misbehaves, which surfaces as
//! [`ApiError::MalformedResponse`].

use serde::Deserialize;

use crate::model::{AuthorBio, Quote};

use super::{ApiClient, ApiError};

/// Wire envelope of `/api/quote_of_the_day`.
#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    quote: Quote,
}

/// Wire shape of `/api/fetch_author_bio`. Both fields are optional; the
/// sentinel for a missing biography is applied client-side.
#[derive(Debug, Deserialize)]
struct AuthorBioResponse {
    #[serde(default)]
    biography: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

/// Wire envelope of `/api/fetch_book_summary`.
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    summary: String,
}

impl ApiClient {
    /// Fetches the quote of the day.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BackendUnavailable`] on transport failure or a
    /// non-2xx status, [`ApiError::MalformedResponse`] if the envelope is
    /// missing.
    #[tracing::instrument(skip(self))]
    pub async fn quote_of_the_day(&self) -> Result<Quote, ApiError> {
        let envelope: QuoteEnvelope = self
            .get_json("quote_of_the_day", "/api/quote_of_the_day")
            .await?;
        Ok(envelope.quote)
    }

    /// Fetches an author's biography and portrait URL.
    ///
    /// The author name is percent-encoded into the query string. A
    /// response without a biography still succeeds and carries the
    /// no-biography sentinel, so negative results are cacheable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BackendUnavailable`] on transport failure or a
    /// non-2xx status, [`ApiError::MalformedResponse`] when the body is
    /// not the expected JSON shape.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_author_bio(&self, author_name: &str) -> Result<AuthorBio, ApiError> {
        let path = format!(
            "/api/fetch_author_bio?author_name={}",
            urlencoding::encode(author_name)
        );
        let response: AuthorBioResponse = self.get_json("fetch_author_bio", &path).await?;
        Ok(AuthorBio::from_response(
            response.biography,
            response.image_url,
        ))
    }

    /// Fetches a book summary by title.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BackendUnavailable`] on transport failure or a
    /// non-2xx status, [`ApiError::MalformedResponse`] if the envelope is
    /// missing.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_book_summary(&self, book_title: &str) -> Result<String, ApiError> {
        let path = format!(
            "/api/fetch_book_summary?book_title={}",
            urlencoding::encode(book_title)
        );
        let response: SummaryResponse = self.get_json("fetch_book_summary", &path).await?;
        Ok(response.summary)
    }
}
