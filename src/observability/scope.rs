//! OperationScope for per-operation outcome logging
//!
//! - `complete()` logs `OPERATION_COMPLETE` with the elapsed time
//! - `fail()` logs `OPERATION_FAILED` with the reason
//! - dropping the scope without either logs `OPERATION_ABANDONED`

use std::time::Instant;

use super::events::Event;
use super::log_event_with_fields;

/// Tracks one named operation from dispatch to outcome
///
/// ```ignore
/// let scope = OperationScope::new("addBook", &request_id);
/// match run() {
///     Ok(v) => scope.complete(),
///     Err(e) => scope.fail(&e.to_string()),
/// }
/// ```
pub struct OperationScope<'a> {
    op: &'a str,
    request_id: String,
    timer: Timer,
    completed: bool,
}

impl<'a> OperationScope<'a> {
    pub fn new(op: &'a str, request_id: impl ToString) -> Self {
        Self {
            op,
            request_id: request_id.to_string(),
            timer: Timer::new(),
            completed: false,
        }
    }

    pub fn complete(mut self) {
        self.completed = true;
        let elapsed = self.timer.elapsed_ms();
        log_event_with_fields(
            Event::OperationComplete,
            &[
                ("op", self.op),
                ("request_id", &self.request_id),
                ("elapsed_ms", &elapsed),
            ],
        );
    }

    pub fn fail(mut self, reason: &str) {
        self.completed = true;
        let elapsed = self.timer.elapsed_ms();
        log_event_with_fields(
            Event::OperationFailed,
            &[
                ("op", self.op),
                ("request_id", &self.request_id),
                ("elapsed_ms", &elapsed),
                ("reason", reason),
            ],
        );
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Drop for OperationScope<'_> {
    fn drop(&mut self) {
        if !self.completed {
            log_event_with_fields(
                Event::OperationAbandoned,
                &[("op", self.op), ("request_id", &self.request_id)],
            );
        }
    }
}

/// Wall-clock timer reported in whole milliseconds
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> String {
        self.start.elapsed().as_millis().to_string()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
