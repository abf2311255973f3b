//! Runtime configuration for the specification handlers.
//!
//! [`SpecUiConfig`] is a plain value: build it with struct-update syntax,
//! wrap it in an `Arc` and hand it to the handlers. It is never mutated
//! after construction.
//!
//! # Example
//!
//! ```
//! use spec_ui_core::{SpecFormat, SpecUiConfig};
//!
//! let config = SpecUiConfig {
//!     spec_path: "/docs/openapi.yaml".to_string(),
//!     spec_file: Some("api/openapi.yaml".to_string()),
//!     ..Default::default()
//! };
//!
//! assert_eq!(config.format(), SpecFormat::Yaml);
//! assert_eq!(config.source().kind(), "local_file");
//! ```

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::embedded::EmbeddedFs;
use crate::format::SpecFormat;
use crate::source::{SpecFs, SpecGenerator, SpecSource};

/// Default path the documentation page is mounted at.
pub const DEFAULT_DOCS_PATH: &str = "/docs";

/// Default path the specification is served at.
pub const DEFAULT_SPEC_PATH: &str = "/docs/openapi.json";

/// Configuration for serving a specification document.
#[derive(Clone)]
pub struct SpecUiConfig {
    /// Path the documentation page is mounted at.
    pub docs_path: String,

    /// Path the specification is served at. Its suffix selects the format.
    pub spec_path: String,

    /// Path of the specification file, within the archive or filesystem
    /// when one is set, otherwise on the local disk.
    pub spec_file: Option<String>,

    /// Generator rendering the specification on demand.
    pub spec_generator: Option<Arc<dyn SpecGenerator>>,

    /// Filesystem compiled into the binary.
    pub spec_archive: Option<EmbeddedFs>,

    /// Caller-supplied filesystem.
    pub spec_fs: Option<Arc<dyn SpecFs>>,
}

impl Default for SpecUiConfig {
    fn default() -> Self {
        Self {
            docs_path: DEFAULT_DOCS_PATH.to_string(),
            spec_path: DEFAULT_SPEC_PATH.to_string(),
            spec_file: None,
            spec_generator: None,
            spec_archive: None,
            spec_fs: None,
        }
    }
}

impl SpecUiConfig {
    /// Format inferred from [`spec_path`](Self::spec_path).
    #[must_use]
    pub fn format(&self) -> SpecFormat {
        SpecFormat::from_spec_path(&self.spec_path)
    }

    /// Select the source to read the specification from.
    ///
    /// Precedence is generator, then archive, then filesystem, then local
    /// file. The archive and filesystem only apply when `spec_file` is set.
    #[must_use]
    pub fn source(&self) -> SpecSource {
        if let Some(generator) = &self.spec_generator {
            return SpecSource::Generator(Arc::clone(generator));
        }

        let Some(file) = self.spec_file.as_deref().filter(|f| !f.is_empty()) else {
            return SpecSource::Unset;
        };

        if let Some(archive) = self.spec_archive {
            SpecSource::Archive {
                archive,
                path: file.to_string(),
            }
        } else if let Some(fs) = &self.spec_fs {
            SpecSource::Filesystem {
                fs: Arc::clone(fs),
                path: file.to_string(),
            }
        } else {
            SpecSource::LocalFile {
                path: PathBuf::from(file),
            }
        }
    }
}

impl fmt::Debug for SpecUiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecUiConfig")
            .field("docs_path", &self.docs_path)
            .field("spec_path", &self.spec_path)
            .field("spec_file", &self.spec_file)
            .field("spec_generator", &self.spec_generator.is_some())
            .field("spec_archive", &self.spec_archive)
            .field("spec_fs", &self.spec_fs.is_some())
            .finish()
    }
}
