//! Store errors as GraphQL field errors
//!
//! The message is the error's display text; `extensions.code` carries the
//! machine-readable code (`NOT_FOUND`, `INTERNAL_ERROR`).

use async_graphql::{Error, ErrorExtensions};

use crate::store::StoreError;

impl ErrorExtensions for StoreError {
    fn extend(&self) -> Error {
        let code = self.code();
        Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// `map_err` adapter
pub(crate) fn extend(err: StoreError) -> Error {
    err.extend()
}
