//! # Resolution & Mutation Layer
//!
//! Plain functions over a borrowed [`DataStore`](crate::store::DataStore):
//! queries take `&DataStore`, mutations take `&mut DataStore`. Callers own
//! the locking; nothing here touches a lock or keeps state of its own.
//!
//! - [`query`]: `book`, `books`, `author`, `authors`
//! - [`relations`]: a book's author, an author's books
//! - [`mutation`]: add/update/delete for both entities

pub mod mutation;
pub mod query;
pub mod relations;

pub use relations::{author_books, book_author};
