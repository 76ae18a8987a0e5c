//! Core data types shared between the backend client and session state.
//!
//! [`Book`] is the single representation used for both catalog search
//! results and library entries; the two shapes differ only in which
//! optional fields are populated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog or library entry.
///
/// The wire shape matches the backend JSON: `cover_art` is absent or empty
/// when no artwork exists, and `status` is absent until the book has been
/// added to the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Catalog identifier. Not guaranteed unique across catalog responses;
    /// membership checks join on title + first author instead.
    #[serde(default)]
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReadingStatus>,
    /// Set after cross-referencing a search result against the current
    /// library snapshot. Never serialized; the backend does not know it.
    #[serde(skip)]
    pub in_library: Option<bool>,
}

impl Book {
    /// Creates a minimal book with the fields every catalog entry carries.
    #[must_use]
    pub fn new(title: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            isbn: String::new(),
            title: title.into(),
            authors,
            description: String::new(),
            cover_art: None,
            status: None,
            in_library: None,
        }
    }

    /// First author name, when present.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    /// Returns true when `other` names the same book for membership
    /// purposes: identical title and identical first author. Isbn is
    /// deliberately not consulted.
    #[must_use]
    pub fn same_identity(&self, other: &Book) -> bool {
        self.title == other.title && self.first_author() == other.first_author()
    }

    /// True when the book has usable cover artwork. Empty strings from the
    /// backend count as "no artwork" and must render as a placeholder.
    #[must_use]
    pub fn has_cover_art(&self) -> bool {
        self.cover_art.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Reading status of a library entry.
///
/// The wire strings are the lowercase forms the backend validates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingStatus {
    #[serde(rename = "unread")]
    Unread,
    #[serde(rename = "currently reading")]
    CurrentlyReading,
    #[serde(rename = "read")]
    Read,
}

impl ReadingStatus {
    /// The backend wire string for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::CurrentlyReading => "currently reading",
            Self::Read => "read",
        }
    }

    /// Parses a wire string, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unread" => Some(Self::Unread),
            "currently reading" => Some(Self::CurrentlyReading),
            "read" => Some(Self::Read),
            _ => None,
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quote of the day. Fetched once per session, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

/// Sentinel biography text stored when the upstream has none.
pub const NO_BIOGRAPHY: &str = "No biography available.";

/// An author biography as cached per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorBio {
    /// Biography text; [`NO_BIOGRAPHY`] when the upstream had none.
    pub biography: String,
    pub image_url: Option<String>,
}

impl AuthorBio {
    /// Builds a cache entry from the raw backend fields, applying the
    /// no-biography sentinel so negative results are cacheable.
    #[must_use]
    pub fn from_response(biography: Option<String>, image_url: Option<String>) -> Self {
        let biography = match biography {
            Some(text) if !text.is_empty() => text,
            _ => NO_BIOGRAPHY.to_string(),
        };
        Self {
            biography,
            image_url,
        }
    }

    /// True when this entry holds the no-biography sentinel.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.biography == NO_BIOGRAPHY
    }
}
