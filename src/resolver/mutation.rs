//! Side-effecting operations
//!
//! Each mutation touches at most one record (or, for delete, every record
//! sharing the id) and returns the post-mutation state.

use crate::observability::{log_event_with_fields, Event};
use crate::store::{Author, AuthorId, Book, BookId, DataStore, StoreError, StoreResult};

/// Append a book. `author_id` is stored as given, even if no such author exists.
pub fn add_book(store: &mut DataStore, name: String, author_id: AuthorId) -> StoreResult<Book> {
    store.insert_book(name, author_id)
}

/// Overwrite the name and author of an existing book
pub fn update_book(
    store: &mut DataStore,
    id: BookId,
    name: String,
    author_id: AuthorId,
) -> StoreResult<Book> {
    let book = store.find_book_mut(id).ok_or(StoreError::BookNotFound(id))?;
    book.name = name;
    book.author_id = author_id;
    Ok(book.clone())
}

/// Remove a book and return every book that remains.
///
/// An unknown id leaves the store untouched.
pub fn delete_book(store: &mut DataStore, id: BookId) -> Vec<Book> {
    if store.remove_book(id) == 0 {
        let id = id.to_string();
        log_event_with_fields(Event::DeleteNoMatch, &[("entity", "book"), ("id", &id)]);
    }
    store.books().to_vec()
}

pub fn add_author(store: &mut DataStore, name: String) -> StoreResult<Author> {
    store.insert_author(name)
}

/// Rename an existing author
pub fn update_author(store: &mut DataStore, id: AuthorId, name: String) -> StoreResult<Author> {
    let author = store
        .find_author_mut(id)
        .ok_or(StoreError::AuthorNotFound(id))?;
    author.name = name;
    Ok(author.clone())
}

/// Remove an author and return every author that remains.
///
/// Books pointing at the removed author are left in place.
pub fn delete_author(store: &mut DataStore, id: AuthorId) -> Vec<Author> {
    if store.remove_author(id) == 0 {
        let id = id.to_string();
        log_event_with_fields(Event::DeleteNoMatch, &[("entity", "author"), ("id", &id)]);
    }
    store.authors().to_vec()
}
