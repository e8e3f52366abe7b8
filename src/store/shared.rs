//! Process-wide handle to the data store
//!
//! One `RwLock` guards both collections, so an operation sees and mutates
//! the store as a whole with nothing interleaved.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::memory::DataStore;

/// Cloneable handle shared by every request handler
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<DataStore>>,
}

impl SharedStore {
    pub fn new(store: DataStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Lock for a read-only operation
    pub fn read(&self) -> StoreResult<RwLockReadGuard<'_, DataStore>> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    /// Lock for a mutation
    pub fn write(&self) -> StoreResult<RwLockWriteGuard<'_, DataStore>> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}
