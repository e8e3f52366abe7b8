//! # Data Store
//!
//! Two ordered in-memory collections, `authors` and `books`, owned by a
//! single [`DataStore`]. Nothing is persisted; the store lives as long as
//! the process.
//!
//! - [`DataStore`]: the collections plus id allocation
//! - [`SharedStore`]: lock-guarded handle passed to request handlers
//! - [`IdAllocation`]: monotonic counter (default) or legacy `len + 1`

mod errors;
mod memory;
mod seed;
mod shared;
mod types;

pub use errors::{StoreError, StoreResult};
pub use memory::{DataStore, IdAllocation};
pub use shared::SharedStore;
pub use types::{Author, AuthorId, Book, BookId};
