//! Structured logging for spec-ui services.
//!
//! Installs a global `tracing-subscriber` registry with an [`EnvFilter`]
//! and a JSON (production) or pretty (development) formatting layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use spec_ui_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//!
//! tracing::info!(spec.path = "/docs/openapi.json", "serving specification");
//! ```

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::error::TelemetryError;
use crate::TelemetryResult;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether logging is enabled.
    pub enabled: bool,

    /// Filter directives (e.g., "info", "spec_ui_server=debug").
    pub level: String,

    /// Whether to output JSON format.
    pub json_format: bool,

    /// Whether to include span events (new, close).
    pub span_events: bool,

    /// Whether to include file/line info.
    pub file_line_info: bool,

    /// Whether to include thread IDs.
    pub thread_ids: bool,

    /// Whether to include target (module path).
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl LogConfig {
    /// Human-readable output at debug level.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            level: "debug".to_string(),
            json_format: false,
            span_events: true,
            file_line_info: true,
            thread_ids: false,
            include_target: true,
        }
    }

    /// JSON output at info level.
    #[must_use]
    pub fn production() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            json_format: true,
            span_events: false,
            file_line_info: false,
            thread_ids: false,
            include_target: true,
        }
    }
}

/// Field names shared by every spec-ui log event.
///
/// Use them as constant field names with `tracing`'s brace syntax:
///
/// ```rust,ignore
/// use spec_ui_telemetry::logging::fields;
///
/// tracing::info!({ fields::SPEC_PATH } = "/docs/openapi.json", "serving specification");
/// ```
pub mod fields {
    /// Route the specification is served on.
    pub const SPEC_PATH: &str = "spec.path";

    /// Source kind the specification was read from (`generator`,
    /// `archive`, `filesystem`, `local_file`, `unset`).
    pub const SPEC_SOURCE: &str = "spec.source";

    /// Output format, `json` or `yaml`.
    pub const SPEC_FORMAT: &str = "spec.format";

    /// Size of the resolved document in bytes.
    pub const SPEC_BYTES: &str = "spec.bytes";
}

/// Initializes the global logging subscriber.
///
/// Does nothing when `config.enabled` is false.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` for a malformed level and
/// `TelemetryError::LoggingInit` when a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> TelemetryResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = create_env_filter(&config.level)?;

    tracing_subscriber::registry()
        .with(fmt_layer(config).with_filter(filter))
        .try_init()
        .map_err(|e| TelemetryError::LoggingInit(e.to_string()))
}

fn fmt_layer(config: &LogConfig) -> Box<dyn Layer<Registry> + Send + Sync> {
    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_span_events(span_events)
        .with_file(config.file_line_info)
        .with_line_number(config.file_line_info)
        .with_thread_ids(config.thread_ids)
        .with_target(config.include_target);

    if config.json_format {
        layer.json().boxed()
    } else {
        layer.pretty().boxed()
    }
}

/// Parses filter directives into an [`EnvFilter`].
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` if the directives do not parse.
pub fn create_env_filter(directives: &str) -> TelemetryResult<EnvFilter> {
    EnvFilter::try_new(directives)
        .map_err(|e| TelemetryError::InvalidFilter(format!("{directives}: {e}")))
}
