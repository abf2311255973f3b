//! Logging setup for spec-ui.
//!
//! The handlers in `spec-ui-server` emit `tracing` events with structured
//! fields (`spec.path`, `spec.source`, `spec.format`, `spec.bytes`). This
//! crate installs the subscriber that turns them into JSON or pretty output.

#![warn(missing_docs)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
