//! Read-only lookups
//!
//! Single-entity lookups take an optional id; an omitted id matches nothing.

use crate::store::{Author, AuthorId, Book, BookId, DataStore};

pub fn book(store: &DataStore, id: Option<BookId>) -> Option<Book> {
    id.and_then(|id| store.find_book(id)).cloned()
}

pub fn books(store: &DataStore) -> Vec<Book> {
    store.books().to_vec()
}

pub fn author(store: &DataStore, id: Option<AuthorId>) -> Option<Author> {
    id.and_then(|id| store.find_author(id)).cloned()
}

pub fn authors(store: &DataStore) -> Vec<Author> {
    store.authors().to_vec()
}
