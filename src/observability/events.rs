//! Lifecycle events
//!
//! Stable names for the service's log lines, emitted as the `event` field
//! of a tracing record.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Storage sink connected and answering
    SinkConnected,
    /// Listening for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server drained and stopped
    ShutdownComplete,

    // Write path
    /// Batch validated, normalized and persisted
    BatchAccepted,
    /// Batch failed validation or normalization
    BatchRejected,
    /// Sink write failed
    BatchFailed,
}

impl LifecycleEvent {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::BootStart => "BOOT_START",
            LifecycleEvent::ConfigLoaded => "CONFIG_LOADED",
            LifecycleEvent::SinkConnected => "SINK_CONNECTED",
            LifecycleEvent::Serving => "SERVING",
            LifecycleEvent::ShutdownStart => "SHUTDOWN_START",
            LifecycleEvent::ShutdownComplete => "SHUTDOWN_COMPLETE",
            LifecycleEvent::BatchAccepted => "BATCH_ACCEPTED",
            LifecycleEvent::BatchRejected => "BATCH_REJECTED",
            LifecycleEvent::BatchFailed => "BATCH_FAILED",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
