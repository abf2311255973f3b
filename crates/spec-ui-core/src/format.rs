//! Output format inference from the specification path.

use std::fmt;

/// Content type for JSON specifications.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type for YAML specifications.
pub const YAML_CONTENT_TYPE: &str = "application/x-yaml";

/// Serialization format of the served specification.
///
/// Inferred once from the configured spec path: an exact, case-sensitive
/// `.json` suffix selects JSON and anything else selects YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecFormat {
    /// JSON document.
    Json,
    /// YAML document.
    #[default]
    Yaml,
}

impl SpecFormat {
    /// Infer the format from a spec path such as `/docs/openapi.json`.
    ///
    /// # Example
    ///
    /// ```
    /// use spec_ui_core::SpecFormat;
    ///
    /// assert_eq!(SpecFormat::from_spec_path("/docs/openapi.json"), SpecFormat::Json);
    /// assert_eq!(SpecFormat::from_spec_path("/docs/openapi.yml"), SpecFormat::Yaml);
    /// assert_eq!(SpecFormat::from_spec_path("/docs/openapi.JSON"), SpecFormat::Yaml);
    /// ```
    #[must_use]
    pub fn from_spec_path(path: &str) -> Self {
        if path.ends_with(".json") {
            Self::Json
        } else {
            Self::Yaml
        }
    }

    /// Returns the `Content-Type` header value for this format.
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => JSON_CONTENT_TYPE,
            Self::Yaml => YAML_CONTENT_TYPE,
        }
    }

    /// Short lowercase name, used in log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
