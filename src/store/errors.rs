//! # Store Errors
//!
//! Lookups that come back empty are not errors; only updates against a
//! missing record, id exhaustion and a poisoned store lock are.

use thiserror::Error;

use super::types::{AuthorId, BookId};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Update targeted an author id with no record
    #[error("Author not found: {0}")]
    AuthorNotFound(AuthorId),

    /// Update targeted a book id with no record
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    /// No id in the `Int` range is left for a new record
    #[error("No {0} ids left")]
    IdsExhausted(&'static str),

    /// A previous operation panicked while holding the store lock
    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthorNotFound(_) | Self::BookNotFound(_) => "NOT_FOUND",
            Self::IdsExhausted(_) | Self::Poisoned => "INTERNAL_ERROR",
        }
    }

    /// True for the not-found family
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AuthorNotFound(_) | Self::BookNotFound(_))
    }
}
