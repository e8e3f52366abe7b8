//! GraphQL object types
//!
//! `Book.author` and `Author.books` are resolved only when a query selects
//! them, with a fresh scan of the store each time.

use async_graphql::{Context, Object, Result};

use crate::api::OperationHandler;
use crate::resolver::{author_books, book_author};
use crate::store::{Author, AuthorId, Book, BookId};

use super::errors::extend;

/// A book written by an author
pub struct BookNode(pub Book);

/// An author of books
pub struct AuthorNode(pub Author);

#[Object(name = "Book")]
impl BookNode {
    async fn id(&self) -> BookId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn author_id(&self) -> AuthorId {
        self.0.author_id
    }

    /// The author this book points at; null if no such author exists
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<AuthorNode>> {
        let handler = ctx.data::<OperationHandler>()?;
        let store = handler.store().read().map_err(extend)?;
        Ok(book_author(&store, &self.0).map(AuthorNode))
    }
}

#[Object(name = "Author")]
impl AuthorNode {
    async fn id(&self) -> AuthorId {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books whose `authorId` is this author's id
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<BookNode>> {
        let handler = ctx.data::<OperationHandler>()?;
        let store = handler.store().read().map_err(extend)?;
        Ok(author_books(&store, &self.0)
            .into_iter()
            .map(BookNode)
            .collect())
    }
}
