use async_graphql::{Context, Object, Result};

use crate::resolver::mutation;
use crate::store::{AuthorId, BookId};

use super::errors::extend;
use super::parts;
use super::types::{AuthorNode, BookNode};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book. The author id is not checked.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: AuthorId,
    ) -> Result<BookNode> {
        let (handler, req) = parts(ctx)?;
        let book = handler
            .mutate("addBook", &req, |s| mutation::add_book(s, name, author_id))
            .map_err(extend)?;
        Ok(BookNode(book))
    }

    /// Replace a book's name and author
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: BookId,
        name: String,
        author_id: AuthorId,
    ) -> Result<BookNode> {
        let (handler, req) = parts(ctx)?;
        let book = handler
            .mutate("updateBook", &req, |s| {
                mutation::update_book(s, id, name, author_id)
            })
            .map_err(extend)?;
        Ok(BookNode(book))
    }

    /// Delete a book; returns the books that remain
    async fn delete_book(&self, ctx: &Context<'_>, id: BookId) -> Result<Vec<BookNode>> {
        let (handler, req) = parts(ctx)?;
        let books = handler
            .mutate("deleteBook", &req, |s| Ok(mutation::delete_book(s, id)))
            .map_err(extend)?;
        Ok(books.into_iter().map(BookNode).collect())
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<AuthorNode> {
        let (handler, req) = parts(ctx)?;
        let author = handler
            .mutate("addAuthor", &req, |s| mutation::add_author(s, name))
            .map_err(extend)?;
        Ok(AuthorNode(author))
    }

    /// Rename an author
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: AuthorId,
        name: String,
    ) -> Result<AuthorNode> {
        let (handler, req) = parts(ctx)?;
        let author = handler
            .mutate("updateAuthor", &req, |s| mutation::update_author(s, id, name))
            .map_err(extend)?;
        Ok(AuthorNode(author))
    }

    /// Delete an author; returns the authors that remain. Their books stay.
    async fn delete_author(&self, ctx: &Context<'_>, id: AuthorId) -> Result<Vec<AuthorNode>> {
        let (handler, req) = parts(ctx)?;
        let authors = handler
            .mutate("deleteAuthor", &req, |s| Ok(mutation::delete_author(s, id)))
            .map_err(extend)?;
        Ok(authors.into_iter().map(AuthorNode).collect())
    }
}
