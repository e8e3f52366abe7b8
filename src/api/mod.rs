//! # Operation API
//!
//! Named-operation dispatch shared by every transport. An [`Operation`]
//! names one of the ten operations and carries its arguments; the
//! [`OperationHandler`] runs it against the shared store.
//!
//! # Supported Operations
//!
//! - queries: `book`, `books`, `author`, `authors`
//! - mutations: `addBook`, `updateBook`, `deleteBook`, `addAuthor`,
//!   `updateAuthor`, `deleteAuthor`

mod context;
mod errors;
mod handler;
mod operation;
mod response;

pub use context::RequestContext;
pub use errors::{ApiError, ApiResult};
pub use handler::OperationHandler;
pub use operation::{Operation, OperationKind};
pub use response::{ErrorInfo, OperationResponse};
