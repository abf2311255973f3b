//! Typed configuration for spec-ui.
//!
//! Settings are layered: defaults, then a TOML or JSON file, then
//! environment variables of the form `PREFIX__SECTION__KEY`. Unknown fields
//! in files are rejected.
//!
//! # Example
//!
//! ```no_run
//! use spec_ui_config::ConfigLoader;
//!
//! # fn main() -> Result<(), spec_ui_config::ConfigError> {
//! let settings = ConfigLoader::new()
//!     .with_dotenv()?
//!     .with_optional_file("spec-ui.toml")?
//!     .with_env_prefix("SPEC_UI")
//!     .load()?;
//!
//! let config = settings.to_config();
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [spec]
//! docs_path = "/docs"
//! spec_path = "/docs/openapi.yaml"
//! spec_file = "openapi.yaml"
//! spec_dir = "./api"
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! include_location = false
//! ```
//!
//! # Environment Variable Overrides
//!
//! - `SPEC_UI__SPEC__SPEC_PATH=/openapi.json`
//! - `SPEC_UI__SPEC__SPEC_FILE=openapi.json`
//! - `SPEC_UI__LOGGING__FORMAT=pretty`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::SpecUiSettings;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{LogFormat, LoggingSettings, SpecSettings};
