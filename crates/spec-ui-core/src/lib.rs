//! # spec-ui core
//!
//! Shared types for serving an OpenAPI specification document:
//!
//! - [`SpecUiConfig`] - the explicit configuration value handlers are built from
//! - [`SpecSource`] - the single source a handler reads from, chosen by precedence
//! - [`SpecGenerator`], [`SpecFs`], [`DirFs`], [`EmbeddedFs`] - source collaborators
//! - [`SpecFormat`] - JSON/YAML inference from the spec path
//! - [`SpecError`] - the failure taxonomy and its HTTP mapping
//!
//! The resolver that ties these together lives in `spec-ui-server`.

#![doc(html_root_url = "https://docs.rs/spec-ui-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod embedded;
mod error;
mod format;
mod source;

pub use config::{SpecUiConfig, DEFAULT_DOCS_PATH, DEFAULT_SPEC_PATH};
pub use embedded::EmbeddedFs;
pub use error::{ErrorBody, SpecError, SpecResult};
pub use format::{SpecFormat, JSON_CONTENT_TYPE, YAML_CONTENT_TYPE};
pub use source::{DirFs, GeneratorError, SerializedSpec, SpecFs, SpecGenerator, SpecSource};
