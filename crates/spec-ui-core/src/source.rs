//! Specification sources.
//!
//! The specification bytes can come from four kinds of collaborator:
//!
//! - a [`SpecGenerator`] that renders the document on demand
//! - an [`EmbeddedFs`] archive compiled into the binary
//! - a caller-supplied [`SpecFs`] filesystem (for example [`DirFs`])
//! - a plain file on the local disk
//!
//! [`SpecSource`] is the single source a handler consults, selected once
//! from the configuration by a fixed precedence.

use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::embedded::EmbeddedFs;
use crate::format::SpecFormat;

/// Boxed error returned by generators.
pub type GeneratorError = Box<dyn std::error::Error + Send + Sync>;

/// Produces the specification document on demand.
///
/// Implementations should be deterministic: the resolver calls exactly one
/// of the two methods, once, and replays the result for the lifetime of the
/// handler.
pub trait SpecGenerator: Send + Sync {
    /// Render the document as JSON.
    fn to_json(&self) -> Result<Vec<u8>, GeneratorError>;

    /// Render the document as YAML.
    fn to_yaml(&self) -> Result<Vec<u8>, GeneratorError>;

    /// Render the document in the given format.
    fn generate(&self, format: SpecFormat) -> Result<Vec<u8>, GeneratorError> {
        match format {
            SpecFormat::Json => self.to_json(),
            SpecFormat::Yaml => self.to_yaml(),
        }
    }
}

/// Generator backed by any serde-serializable document.
///
/// # Example
///
/// ```
/// use spec_ui_core::{SerializedSpec, SpecGenerator};
///
/// let doc = serde_json::json!({"openapi": "3.1.0", "info": {"title": "Pets", "version": "1"}});
/// let generator = SerializedSpec::new(doc);
///
/// let yaml = String::from_utf8(generator.to_yaml().unwrap()).unwrap();
/// assert!(yaml.contains("title: Pets"));
/// ```
#[derive(Debug, Clone)]
pub struct SerializedSpec<T> {
    document: T,
}

impl<T> SerializedSpec<T> {
    /// Wrap a document.
    pub fn new(document: T) -> Self {
        Self { document }
    }

    /// Returns the wrapped document.
    pub fn document(&self) -> &T {
        &self.document
    }
}

impl<T> SpecGenerator for SerializedSpec<T>
where
    T: Serialize + Send + Sync,
{
    fn to_json(&self) -> Result<Vec<u8>, GeneratorError> {
        Ok(serde_json::to_vec_pretty(&self.document)?)
    }

    fn to_yaml(&self) -> Result<Vec<u8>, GeneratorError> {
        Ok(serde_yaml::to_string(&self.document)?.into_bytes())
    }
}

/// A filesystem the specification can be read from.
pub trait SpecFs: Send + Sync {
    /// Read the whole file at `path`.
    ///
    /// A missing file should be reported as [`io::ErrorKind::NotFound`].
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>>;
}

impl SpecFs for EmbeddedFs {
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        self.read(path).map(<[u8]>::to_vec)
    }
}

/// Filesystem rooted at a directory on the local disk.
///
/// Paths are interpreted relative to the root. A leading `/` is ignored and
/// any `..` component is rejected, so reads cannot escape the root.
///
/// # Example
///
/// ```no_run
/// use spec_ui_core::{DirFs, SpecFs};
///
/// let fs = DirFs::new("./api");
/// let bytes = fs.read_file("openapi.yaml")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirFs {
    root: PathBuf,
}

impl DirFs {
    /// Create a filesystem rooted at `root`.
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let relative = path.trim_start_matches('/');

        for component in Path::new(relative).components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("path escapes the filesystem root: {path}"),
                    ));
                }
            }
        }

        Ok(self.root.join(relative))
    }
}

impl SpecFs for DirFs {
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.resolve(path)?)
    }
}

/// The one source a handler reads the specification from.
#[derive(Clone)]
pub enum SpecSource {
    /// Rendered on demand by a generator.
    Generator(Arc<dyn SpecGenerator>),
    /// Read from a filesystem compiled into the binary.
    Archive {
        /// The embedded filesystem.
        archive: EmbeddedFs,
        /// Path within the archive.
        path: String,
    },
    /// Read from a caller-supplied filesystem.
    Filesystem {
        /// The filesystem.
        fs: Arc<dyn SpecFs>,
        /// Path within the filesystem.
        path: String,
    },
    /// Read from the local disk.
    LocalFile {
        /// Path on disk.
        path: PathBuf,
    },
    /// No source configured.
    Unset,
}

impl SpecSource {
    /// Short name of the source kind, used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Generator(_) => "generator",
            Self::Archive { .. } => "archive",
            Self::Filesystem { .. } => "filesystem",
            Self::LocalFile { .. } => "local_file",
            Self::Unset => "unset",
        }
    }

    /// Returns true if no source is configured.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Debug for SpecSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generator(_) => f.write_str("Generator"),
            Self::Archive { archive, path } => f
                .debug_struct("Archive")
                .field("files", &archive.len())
                .field("path", path)
                .finish(),
            Self::Filesystem { path, .. } => {
                f.debug_struct("Filesystem").field("path", path).finish()
            }
            Self::LocalFile { path } => f.debug_struct("LocalFile").field("path", path).finish(),
            Self::Unset => f.write_str("Unset"),
        }
    }
}
