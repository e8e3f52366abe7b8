//! Entity records held by the data store

use serde::{Deserialize, Serialize};

/// Identifier of an author record. Signed to match GraphQL `Int`.
pub type AuthorId = i32;

/// Identifier of a book record
pub type BookId = i32;

/// A writer who owns zero or more books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A book pointing at its author by id
///
/// `author_id` is not checked against the author collection; a book may
/// reference an author that does not (or no longer) exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author_id: AuthorId,
}

impl Book {
    pub fn new(id: BookId, name: impl Into<String>, author_id: AuthorId) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_serializes_camel_case() {
        let book = Book::new(4, "The Fellowship of the Ring", 2);
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["authorId"], 2);
        assert!(json.get("author_id").is_none());
    }

    #[test]
    fn test_author_roundtrip_through_json() {
        let json = r#"{"id": 3, "name": "Brent Weeks"}"#;
        let author: Author = serde_json::from_str(json).unwrap();
        assert_eq!(author, Author::new(3, "Brent Weeks"));
    }

    #[test]
    fn test_negative_author_id_is_kept() {
        let book: Book = serde_json::from_str(r#"{"id": 9, "name": "x", "authorId": -1}"#).unwrap();
        assert_eq!(book.author_id, -1);
    }
}
