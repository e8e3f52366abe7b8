//! GraphQL API for the authors-and-books store
//!
//! - [`QueryRoot`]: `book`, `books`, `author`, `authors`
//! - [`MutationRoot`]: add, update and delete for both entities
//!
//! Parsing, validation and argument coercion belong to async-graphql; the
//! roots hand each operation to the shared [`OperationHandler`].

mod errors;
mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{AuthorNode, BookNode};

use async_graphql::{Context, EmptySubscription, Result, Schema};

use crate::api::{OperationHandler, RequestContext};

pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around a handler
pub fn build_schema(handler: OperationHandler) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(handler)
        .finish()
}

/// The handler plus the request context the transport attached, or a
/// fresh one when the schema is executed directly.
fn parts<'a>(ctx: &Context<'a>) -> Result<(&'a OperationHandler, RequestContext)> {
    let handler = ctx.data::<OperationHandler>()?;
    let req = ctx.data_opt::<RequestContext>().cloned().unwrap_or_default();
    Ok((handler, req))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DataStore, IdAllocation, SharedStore};

    #[test]
    fn test_sdl_names_every_operation() {
        let schema = build_schema(OperationHandler::new(SharedStore::new(DataStore::seeded(
            IdAllocation::Counter,
        ))));
        let sdl = schema.sdl();

        for name in [
            "book(", "books:", "author(", "authors:", "addBook(", "updateBook(",
            "deleteBook(", "addAuthor(", "updateAuthor(", "deleteAuthor(",
        ] {
            assert!(sdl.contains(name), "missing {name} in SDL");
        }
        assert!(sdl.contains("authorId: Int!"));
    }
}
