//! Library operations: the user's own curated collection.
//!
//! These endpoints read and mutate the persisted library. Mutations return
//! the backend's acknowledgement message so the caller can surface it
//! verbatim.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::model::{Book, ReadingStatus};

use super::{AckMessage, ApiClient, ApiError};

/// POST body for `/api/add_book`: the book fields plus the chosen status.
#[derive(Debug, Serialize)]
struct AddBookPayload<'a> {
    isbn: &'a str,
    title: &'a str,
    authors: &'a [String],
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover_art: Option<&'a str>,
    status: &'a str,
}

/// PUT body for `/api/update_book_status`.
#[derive(Debug, Serialize)]
struct UpdateStatusPayload<'a> {
    title: &'a str,
    status: &'a str,
}

/// Response shape of `/api/is_book_in_library`.
#[derive(Debug, Deserialize)]
struct MembershipResponse {
    exists: bool,
    #[serde(default)]
    book: Option<Book>,
}

impl ApiClient {
    /// Fetches the full library, in the backend's storage order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BackendUnavailable`] on transport failure or a
    /// non-2xx status, [`ApiError::MalformedResponse`] if the body is not
    /// an array of books.
    #[tracing::instrument(skip(self))]
    pub async fn get_books(&self) -> Result<Vec<Book>, ApiError> {
        self.get_json("get_books", "/api/get_books").await
    }

    /// Adds a book to the library with a reading status and returns the
    /// backend acknowledgement message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BackendUnavailable`] on transport failure or a
    /// non-2xx status, [`ApiError::MalformedResponse`] if the body lacks
    /// the acknowledgement shape.
    #[tracing::instrument(skip(self, book), fields(title = %book.title))]
    pub async fn add_book(&self, book: &Book, status: ReadingStatus) -> Result<String, ApiError> {
        let payload = AddBookPayload {
            isbn: &book.isbn,
            title: &book.title,
            authors: &book.authors,
            description: &book.description,
            cover_art: book.cover_art.as_deref(),
            status: status.as_str(),
        };
        let ack: AckMessage = self
            .send_json("add_book", Method::POST, "/api/add_book", &payload)
            .await?;
        Ok(ack.message)
    }

    /// Updates the reading status of a library entry, identified by title.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BackendUnavailable`] on transport failure or a
    /// non-2xx status, [`ApiError::MalformedResponse`] if the body lacks
    /// the acknowledgement shape.
    #[tracing::instrument(skip(self))]
    pub async fn update_book_status(
        &self,
        title: &str,
        status: ReadingStatus,
    ) -> Result<String, ApiError> {
        let payload = UpdateStatusPayload {
            title,
            status: status.as_str(),
        };
        let ack: AckMessage = self
            .send_json(
                "update_book_status",
                Method::PUT,
                "/api/update_book_status",
                &payload,
            )
            .await?;
        Ok(ack.message)
    }

    /// Removes a library entry by isbn and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BackendUnavailable`] on transport failure or a
    /// non-2xx status, [`ApiError::MalformedResponse`] if the body lacks
    /// the acknowledgement shape.
    #[tracing::instrument(skip(self))]
    pub async fn delete_book(&self, isbn: &str) -> Result<String, ApiError> {
        let path = format!("/api/delete_book/{}", urlencoding::encode(isbn));
        let ack: AckMessage = self.send_empty("delete_book", Method::DELETE, &path).await?;
        Ok(ack.message)
    }

    /// Asks the backend whether a title is already in the library.
    ///
    /// Returns the stored entry when it exists. The session prefers its
    /// own title + first-author cross-reference for membership flags; this
    /// endpoint exists for title-only checks against the persisted state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::BackendUnavailable`] on transport failure or a
    /// non-2xx status, [`ApiError::MalformedResponse`] if the body lacks
    /// the membership shape.
    #[tracing::instrument(skip(self))]
    pub async fn is_book_in_library(&self, title: &str) -> Result<Option<Book>, ApiError> {
        let path = format!(
            "/api/is_book_in_library?title={}",
            urlencoding::encode(title)
        );
        let response: MembershipResponse = self.get_json("is_book_in_library", &path).await?;
        if response.exists {
            // A bare `{"exists": true}` still counts as membership even if
            // the backend omits the stored entry.
            Ok(response.book.or_else(|| Some(Book::new(title, Vec::new()))))
        } else {
            Ok(None)
        }
    }
}
