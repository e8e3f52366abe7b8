use async_graphql::{Context, Object, Result};

use crate::resolver::query;
use crate::store::{AuthorId, BookId};

use super::errors::extend;
use super::types::{AuthorNode, BookNode};
use super::parts;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single book. Without an id nothing matches.
    async fn book(&self, ctx: &Context<'_>, id: Option<BookId>) -> Result<Option<BookNode>> {
        let (handler, req) = parts(ctx)?;
        let book = handler
            .query("book", &req, |s| query::book(s, id))
            .map_err(extend)?;
        Ok(book.map(BookNode))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<BookNode>> {
        let (handler, req) = parts(ctx)?;
        let books = handler.query("books", &req, query::books).map_err(extend)?;
        Ok(books.into_iter().map(BookNode).collect())
    }

    /// A single author. Without an id nothing matches.
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<AuthorId>,
    ) -> Result<Option<AuthorNode>> {
        let (handler, req) = parts(ctx)?;
        let author = handler
            .query("author", &req, |s| query::author(s, id))
            .map_err(extend)?;
        Ok(author.map(AuthorNode))
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<AuthorNode>> {
        let (handler, req) = parts(ctx)?;
        let authors = handler
            .query("authors", &req, query::authors)
            .map_err(extend)?;
        Ok(authors.into_iter().map(AuthorNode).collect())
    }
}
