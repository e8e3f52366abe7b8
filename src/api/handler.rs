//! Operation handler
//!
//! Every named operation, whichever transport it arrived on, runs through
//! [`OperationHandler::query`] or [`OperationHandler::mutate`]: one lock
//! acquisition, one outcome log line, one counter bump.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::observability::{MetricsRegistry, OperationScope};
use crate::resolver::{mutation, query};
use crate::store::{DataStore, SharedStore, StoreResult};

use super::context::RequestContext;
use super::errors::ApiResult;
use super::operation::{Operation, OperationKind};

#[derive(Debug, Clone)]
pub struct OperationHandler {
    store: SharedStore,
    metrics: Arc<MetricsRegistry>,
}

impl OperationHandler {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Run a read-only operation under the read lock
    pub fn query<T>(
        &self,
        op: &str,
        ctx: &RequestContext,
        f: impl FnOnce(&DataStore) -> T,
    ) -> StoreResult<T> {
        let scope = OperationScope::new(op, ctx.request_id);
        let result = self.store.read().map(|store| f(&store));
        self.finish(scope, OperationKind::Query, result)
    }

    /// Run a mutation under the write lock
    pub fn mutate<T>(
        &self,
        op: &str,
        ctx: &RequestContext,
        f: impl FnOnce(&mut DataStore) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let scope = OperationScope::new(op, ctx.request_id);
        let result = self.store.write().and_then(|mut store| f(&mut store));
        self.finish(scope, OperationKind::Mutation, result)
    }

    fn finish<T>(
        &self,
        scope: OperationScope<'_>,
        kind: OperationKind,
        result: StoreResult<T>,
    ) -> StoreResult<T> {
        match &result {
            Ok(_) => {
                match kind {
                    OperationKind::Query => self.metrics.increment_queries(),
                    OperationKind::Mutation => self.metrics.increment_mutations(),
                }
                scope.complete();
            }
            Err(e) => {
                self.metrics.increment_failures();
                scope.fail(&e.to_string());
            }
        }
        result
    }

    /// Execute a named operation and render its result as JSON.
    ///
    /// Entities come back flat; relations are not expanded.
    pub fn execute(&self, op: Operation, ctx: &RequestContext) -> ApiResult<Value> {
        let op_name = op.name();
        match op {
            Operation::Book { id } => to_json(self.query(op_name, ctx, |s| query::book(s, id))?),
            Operation::Books => to_json(self.query(op_name, ctx, query::books)?),
            Operation::Author { id } => {
                to_json(self.query(op_name, ctx, |s| query::author(s, id))?)
            }
            Operation::Authors => to_json(self.query(op_name, ctx, query::authors)?),
            Operation::AddBook { name, author_id } => to_json(self.mutate(op_name, ctx, |s| {
                mutation::add_book(s, name, author_id)
            })?),
            Operation::UpdateBook {
                id,
                name,
                author_id,
            } => to_json(self.mutate(op_name, ctx, |s| {
                mutation::update_book(s, id, name, author_id)
            })?),
            Operation::DeleteBook { id } => to_json(self.mutate(op_name, ctx, |s| {
                Ok(mutation::delete_book(s, id))
            })?),
            Operation::AddAuthor { name } => to_json(self.mutate(op_name, ctx, |s| {
                mutation::add_author(s, name)
            })?),
            Operation::UpdateAuthor { id, name } => to_json(self.mutate(op_name, ctx, |s| {
                mutation::update_author(s, id, name)
            })?),
            Operation::DeleteAuthor { id } => to_json(self.mutate(op_name, ctx, |s| {
                Ok(mutation::delete_author(s, id))
            })?),
        }
    }
}

fn to_json<T: Serialize>(value: T) -> ApiResult<Value> {
    Ok(serde_json::to_value(value)?)
}
