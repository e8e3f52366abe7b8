//! Observability for bookgraph
//!
//! - Structured one-line JSON logs ([`Logger`])
//! - Typed lifecycle and operation events ([`Event`])
//! - Per-operation outcome logging ([`OperationScope`])
//! - Operation counters ([`MetricsRegistry`])
//!
//! Observability never changes the outcome of the operation it observes.
//!
//! ```ignore
//! use bookgraph::observability::{log_event, Event, OperationScope};
//!
//! log_event(Event::Serving);
//!
//! let scope = OperationScope::new("books", request_id);
//! // ... run the operation ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{OperationScope, Timer};

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event at its own severity, with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
