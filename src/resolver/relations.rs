//! Cross-reference resolution between books and authors
//!
//! Called per field, on demand. Each call rescans the store; nothing is
//! joined ahead of time or cached.

use crate::store::{Author, Book, DataStore};

/// The author a book points at, if that author exists
pub fn book_author(store: &DataStore, book: &Book) -> Option<Author> {
    store.find_author(book.author_id).cloned()
}

/// Every book written by `author`, in collection order
pub fn author_books(store: &DataStore, author: &Author) -> Vec<Book> {
    store
        .books()
        .iter()
        .filter(|b| b.author_id == author.id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IdAllocation;

    #[test]
    fn test_book_author() {
        let store = DataStore::default();
        let book = store.find_book(7).cloned().unwrap();
        let author = book_author(&store, &book).unwrap();
        assert_eq!(author.name, "Brent Weeks");
    }

    #[test]
    fn test_dangling_author_reference() {
        let store = DataStore::default();
        let orphan = Book::new(100, "Orphan", 42);
        assert!(book_author(&store, &orphan).is_none());
    }

    #[test]
    fn test_author_books_in_order() {
        let store = DataStore::default();
        let tolkien = store.find_author(2).cloned().unwrap();
        let ids: Vec<_> = author_books(&store, &tolkien).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
    }

    #[test]
    fn test_author_without_books() {
        let mut store = DataStore::seeded(IdAllocation::Counter);
        let new_author = store.insert_author("Robin Hobb").unwrap();
        assert!(author_books(&store, &new_author).is_empty());
    }

    #[test]
    fn test_resolution_sees_latest_state() {
        let mut store = DataStore::default();
        let rowling = store.find_author(1).cloned().unwrap();
        store
            .insert_book("Harry Potter and the Half-Blood Prince", 1)
            .unwrap();
        assert_eq!(author_books(&store, &rowling).len(), 4);
    }
}
