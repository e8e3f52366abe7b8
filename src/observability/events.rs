//! Observable events
//!
//! Every log line the service emits names one of these.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration file read (or defaults applied)
    ConfigLoaded,
    /// Fixture records loaded into the store
    StoreSeeded,
    /// Listener bound, ready for requests
    Serving,
    /// Listener closed
    ShutdownComplete,
    /// Listener could not be started
    ServeFailed,

    // Operations
    /// A named operation returned successfully
    OperationComplete,
    /// A named operation returned an error
    OperationFailed,
    /// Operation scope dropped before reporting an outcome
    OperationAbandoned,
    /// Delete matched no record; store unchanged
    DeleteNoMatch,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "SERVER_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::Serving => "SERVER_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServeFailed => "SERVE_FAILED",
            Event::OperationComplete => "OPERATION_COMPLETE",
            Event::OperationFailed => "OPERATION_FAILED",
            Event::OperationAbandoned => "OPERATION_ABANDONED",
            Event::DeleteNoMatch => "DELETE_NO_MATCH",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ServeFailed => Severity::Fatal,
            Event::OperationFailed => Severity::Error,
            Event::DeleteNoMatch | Event::OperationAbandoned => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
