//! # spec-ui
//!
//! Serve an OpenAPI specification from a generator, an embedded archive, a
//! filesystem or a local file. The document is read once, on first request,
//! and served with caching disabled.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spec_ui::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = ConfigLoader::new()
//!         .with_optional_file("spec-ui.toml")?
//!         .with_env_prefix("SPEC_UI")
//!         .load()?;
//!     init_logging(&settings.logging.to_log_config())?;
//!
//!     let ui = SpecUi::from_settings(&settings);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     serve(listener, ui.spec_service(), async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/spec-ui/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod spec_ui;

pub use spec_ui::SpecUi;

// Re-export core types
pub use spec_ui_core as core;

// Re-export server types
pub use spec_ui_server as server;

// Re-export configuration types
pub use spec_ui_config as config;

// Re-export logging setup
pub use spec_ui_telemetry as telemetry;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use spec_ui::prelude::*;
/// ```
pub mod prelude {
    pub use crate::SpecUi;

    pub use spec_ui_core::{
        embed_files, DirFs, EmbeddedFs, GeneratorError, SerializedSpec, SpecError, SpecFormat,
        SpecFs, SpecGenerator, SpecResult, SpecSource, SpecUiConfig,
    };

    pub use spec_ui_server::{serve, serve_connection, SpecHandler, SpecService};

    pub use spec_ui_config::{ConfigError, ConfigLoader, SpecUiSettings};

    pub use spec_ui_telemetry::{init_logging, LogConfig};
}
