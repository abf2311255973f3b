//! Configuration schema types.

use serde::{Deserialize, Serialize};
use spec_ui_core::{DEFAULT_DOCS_PATH, DEFAULT_SPEC_PATH};
use spec_ui_telemetry::LogConfig;

/// The `[spec]` section: where the document is served and read from.
///
/// # Example
///
/// ```
/// use spec_ui_config::SpecSettings;
///
/// let spec = SpecSettings {
///     spec_path: "/docs/openapi.yaml".to_string(),
///     spec_file: Some("openapi.yaml".to_string()),
///     spec_dir: Some("./api".into()),
///     ..Default::default()
/// };
/// assert_eq!(spec.docs_path, "/docs");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SpecSettings {
    /// Route of the documentation page.
    #[serde(default = "default_docs_path")]
    pub docs_path: String,

    /// Route the specification is served on. A `.json` suffix selects JSON.
    #[serde(default = "default_spec_path")]
    pub spec_path: String,

    /// Specification file. Relative to `spec_dir` when that is set,
    /// otherwise a path on the local disk.
    #[serde(default)]
    pub spec_file: Option<String>,

    /// Directory to read `spec_file` from.
    #[serde(default)]
    pub spec_dir: Option<std::path::PathBuf>,
}

impl Default for SpecSettings {
    fn default() -> Self {
        Self {
            docs_path: default_docs_path(),
            spec_path: default_spec_path(),
            spec_file: None,
            spec_dir: None,
        }
    }
}

fn default_docs_path() -> String {
    DEFAULT_DOCS_PATH.to_string()
}

fn default_spec_path() -> String {
    DEFAULT_SPEC_PATH.to_string()
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (production).
    #[default]
    Json,
    /// Human-readable pretty format (development).
    Pretty,
}

/// The `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directives (e.g. "info" or "spec_ui_server=debug").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

impl LoggingSettings {
    /// Convert to the telemetry crate's [`LogConfig`].
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        let base = match self.format {
            LogFormat::Json => LogConfig::production(),
            LogFormat::Pretty => LogConfig::development(),
        };

        LogConfig {
            enabled: self.enabled,
            level: self.level.clone(),
            file_line_info: self.include_location,
            ..base
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_settings_defaults() {
        let spec = SpecSettings::default();
        assert_eq!(spec.docs_path, "/docs");
        assert_eq!(spec.spec_path, "/docs/openapi.json");
        assert!(spec.spec_file.is_none());
        assert!(spec.spec_dir.is_none());
    }

    #[test]
    fn test_spec_settings_partial_toml() {
        let spec: SpecSettings = toml::from_str(r#"spec_file = "openapi.yaml""#).unwrap();
        assert_eq!(spec.spec_path, "/docs/openapi.json");
        assert_eq!(spec.spec_file.as_deref(), Some("openapi.yaml"));
    }

    #[test]
    fn test_spec_settings_rejects_unknown_fields() {
        let result: Result<SpecSettings, _> = toml::from_str(r#"spec_url = "/openapi.json""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_format_serde() {
        let logging: LoggingSettings = toml::from_str(r#"format = "pretty""#).unwrap();
        assert_eq!(logging.format, LogFormat::Pretty);
        assert_eq!(serde_json::to_string(&LogFormat::Json).unwrap(), r#""json""#);
    }

    #[test]
    fn test_to_log_config() {
        let json = LoggingSettings::default().to_log_config();
        assert!(json.json_format);
        assert_eq!(json.level, "info");
        assert!(!json.file_line_info);

        let pretty = LoggingSettings {
            enabled: false,
            level: "spec_ui_server=trace".to_string(),
            format: LogFormat::Pretty,
            include_location: true,
        }
        .to_log_config();
        assert!(!pretty.enabled);
        assert!(!pretty.json_format);
        assert!(pretty.file_line_info);
        assert_eq!(pretty.level, "spec_ui_server=trace");
    }
}
