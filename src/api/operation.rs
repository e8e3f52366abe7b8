//! Named operations
//!
//! Every operation the service answers, keyed by name under `"op"` with its
//! arguments alongside:
//!
//! ```json
//! {"op": "updateBook", "id": 1, "name": "X", "authorId": 2}
//! ```

use serde::{Deserialize, Serialize};

use crate::store::{AuthorId, BookId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Operation {
    // Queries
    Book {
        #[serde(default)]
        id: Option<BookId>,
    },
    Books,
    Author {
        #[serde(default)]
        id: Option<AuthorId>,
    },
    Authors,

    // Mutations
    AddBook {
        name: String,
        #[serde(rename = "authorId")]
        author_id: AuthorId,
    },
    UpdateBook {
        id: BookId,
        name: String,
        #[serde(rename = "authorId")]
        author_id: AuthorId,
    },
    DeleteBook {
        id: BookId,
    },
    AddAuthor {
        name: String,
    },
    UpdateAuthor {
        id: AuthorId,
        name: String,
    },
    DeleteAuthor {
        id: AuthorId,
    },
}

/// Whether an operation reads or writes the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl Operation {
    /// Operation name as clients spell it
    pub fn name(&self) -> &'static str {
        match self {
            Self::Book { .. } => "book",
            Self::Books => "books",
            Self::Author { .. } => "author",
            Self::Authors => "authors",
            Self::AddBook { .. } => "addBook",
            Self::UpdateBook { .. } => "updateBook",
            Self::DeleteBook { .. } => "deleteBook",
            Self::AddAuthor { .. } => "addAuthor",
            Self::UpdateAuthor { .. } => "updateAuthor",
            Self::DeleteAuthor { .. } => "deleteAuthor",
        }
    }
}
