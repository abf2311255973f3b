//! Top-level settings and their conversion to [`SpecUiConfig`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use spec_ui_core::{DirFs, SpecFs, SpecUiConfig};

use crate::{ConfigError, LoggingSettings, SpecSettings};

/// Complete spec-ui settings as loaded from files and the environment.
///
/// Generators and embedded archives cannot be expressed in a file; attach
/// them to the [`SpecUiConfig`] returned by [`to_config`](Self::to_config).
///
/// # Example
///
/// ```
/// use spec_ui_config::SpecUiSettings;
///
/// let settings = SpecUiSettings::default();
/// assert!(settings.validate().is_ok());
/// assert_eq!(settings.to_config().spec_path, "/docs/openapi.json");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct SpecUiSettings {
    /// Specification routes and file location.
    #[serde(default)]
    pub spec: SpecSettings,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl SpecUiSettings {
    /// Validate the settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a route is empty or does not
    /// start with `/`, if `spec_dir` is set without `spec_file`, or if the
    /// log level does not parse as a filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("spec.docs_path", &self.spec.docs_path),
            ("spec.spec_path", &self.spec.spec_path),
        ] {
            if value.is_empty() {
                return Err(ConfigError::invalid_value(field, "must not be empty"));
            }
            if !value.starts_with('/') {
                return Err(ConfigError::invalid_value(
                    field,
                    format!("must start with '/': {value}"),
                ));
            }
        }

        let has_file = self.spec.spec_file.as_deref().is_some_and(|f| !f.is_empty());
        if self.spec.spec_dir.is_some() && !has_file {
            return Err(ConfigError::invalid_value(
                "spec.spec_dir",
                "spec.spec_file must be set when spec.spec_dir is set",
            ));
        }

        if self.logging.enabled {
            spec_ui_telemetry::create_env_filter(&self.logging.level)
                .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))?;
        }

        Ok(())
    }

    /// Build the runtime configuration.
    ///
    /// A `spec_dir` becomes a [`DirFs`] filesystem source.
    #[must_use]
    pub fn to_config(&self) -> SpecUiConfig {
        SpecUiConfig {
            docs_path: self.spec.docs_path.clone(),
            spec_path: self.spec.spec_path.clone(),
            spec_file: self.spec.spec_file.clone(),
            spec_fs: self
                .spec
                .spec_dir
                .as_ref()
                .map(|dir| Arc::new(DirFs::new(dir)) as Arc<dyn SpecFs>),
            ..SpecUiConfig::default()
        }
    }
}
