//! # In-Memory Data Store
//!
//! Owns the `authors` and `books` collections. Both are plain vectors kept in
//! insertion order; every lookup is a linear scan where the first match wins.

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::seed;
use super::types::{Author, AuthorId, Book, BookId};

/// How new records get their id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdAllocation {
    /// Per-collection counter that only ever moves forward
    #[default]
    Counter,
    /// `len(collection) + 1` at insertion time.
    ///
    /// Can hand out an id that is still in use once a record has been
    /// deleted.
    CollectionLength,
}

impl IdAllocation {
    /// Pick the next id. `counter` is kept wider than an id so it can sit
    /// one past `i32::MAX` once the range is used up.
    fn next(self, counter: &mut i64, len: usize, entity: &'static str) -> StoreResult<i32> {
        let candidate = match self {
            Self::Counter => *counter,
            Self::CollectionLength => len as i64 + 1,
        };
        let id = i32::try_from(candidate).map_err(|_| StoreError::IdsExhausted(entity))?;
        *counter = (*counter).max(i64::from(id) + 1);
        Ok(id)
    }
}

/// The single owned store every handler acts on
#[derive(Debug, Clone)]
pub struct DataStore {
    authors: Vec<Author>,
    books: Vec<Book>,
    id_allocation: IdAllocation,
    next_author_id: i64,
    next_book_id: i64,
}

impl DataStore {
    /// Create a store with no records
    pub fn empty(id_allocation: IdAllocation) -> Self {
        Self::with_records(Vec::new(), Vec::new(), id_allocation)
    }

    /// Create a store pre-loaded with the startup fixture
    pub fn seeded(id_allocation: IdAllocation) -> Self {
        Self::with_records(seed::authors(), seed::books(), id_allocation)
    }

    /// Create a store from existing records.
    ///
    /// Counters start one past the largest id present, and never below 1.
    pub fn with_records(
        authors: Vec<Author>,
        books: Vec<Book>,
        id_allocation: IdAllocation,
    ) -> Self {
        let next_author_id = next_after(authors.iter().map(|a| a.id));
        let next_book_id = next_after(books.iter().map(|b| b.id));

        Self {
            authors,
            books,
            id_allocation,
            next_author_id,
            next_book_id,
        }
    }

    pub fn id_allocation(&self) -> IdAllocation {
        self.id_allocation
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn find_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn find_author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.iter_mut().find(|a| a.id == id)
    }

    pub fn find_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn find_book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Append a new author and return a copy of the stored record
    pub fn insert_author(&mut self, name: impl Into<String>) -> StoreResult<Author> {
        let id = self
            .id_allocation
            .next(&mut self.next_author_id, self.authors.len(), "author")?;
        let author = Author::new(id, name);
        self.authors.push(author.clone());
        Ok(author)
    }

    /// Append a new book and return a copy of the stored record
    pub fn insert_book(
        &mut self,
        name: impl Into<String>,
        author_id: AuthorId,
    ) -> StoreResult<Book> {
        let id = self
            .id_allocation
            .next(&mut self.next_book_id, self.books.len(), "book")?;
        let book = Book::new(id, name, author_id);
        self.books.push(book.clone());
        Ok(book)
    }

    /// Drop every author with the given id. Returns how many were removed.
    pub fn remove_author(&mut self, id: AuthorId) -> usize {
        let before = self.authors.len();
        self.authors.retain(|a| a.id != id);
        before - self.authors.len()
    }

    /// Drop every book with the given id. Returns how many were removed.
    pub fn remove_book(&mut self, id: BookId) -> usize {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        before - self.books.len()
    }
}

fn next_after(ids: impl Iterator<Item = i32>) -> i64 {
    ids.map(|id| i64::from(id) + 1).max().unwrap_or(1).max(1)
}

impl Default for DataStore {
    fn default() -> Self {
        Self::seeded(IdAllocation::default())
    }
}
