//! Read-only filesystem compiled into the binary.
//!
//! An [`EmbeddedFs`] is a static table of `(path, bytes)` entries, normally
//! produced with [`embed_files!`](crate::embed_files) and `include_bytes!`.
//! Reads never touch the disk and hand out `'static` slices, so the served
//! body is zero-copy.
//!
//! # Example
//!
//! ```rust,ignore
//! use spec_ui_core::{embed_files, EmbeddedFs};
//!
//! static SPECS: EmbeddedFs = embed_files! {
//!     "openapi.yaml" => "../api/openapi.yaml",
//! };
//!
//! assert!(SPECS.contains("openapi.yaml"));
//! ```

use std::io;

/// A read-only set of files bundled at build time.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFs {
    files: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedFs {
    /// Create an embedded filesystem from a static file table.
    #[must_use]
    pub const fn new(files: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { files }
    }

    /// Look up a file, returning `None` when it is absent.
    ///
    /// Leading `/` and `./` segments are ignored on both sides, so
    /// `"/openapi.yaml"`, `"./openapi.yaml"` and `"openapi.yaml"` name the
    /// same entry.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&'static [u8]> {
        let wanted = normalize(path);
        self.files
            .iter()
            .find(|(name, _)| normalize(name) == wanted)
            .map(|(_, contents)| *contents)
    }

    /// Read a file, failing with [`io::ErrorKind::NotFound`] when it is absent.
    pub fn read(&self, path: &str) -> io::Result<&'static [u8]> {
        self.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{path} is not in the embedded filesystem"),
            )
        })
    }

    /// Returns true if the file exists.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Iterate over the embedded paths, in table order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> {
        self.files.iter().map(|(name, _)| *name)
    }

    /// Number of embedded files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if nothing is embedded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn normalize(mut path: &str) -> &str {
    loop {
        if let Some(rest) = path.strip_prefix("./") {
            path = rest;
        } else if let Some(rest) = path.strip_prefix('/') {
            path = rest;
        } else {
            return path;
        }
    }
}

/// Build an [`EmbeddedFs`] from `name => path` pairs.
///
/// Each path is passed to `include_bytes!`, so it resolves relative to the
/// file invoking the macro. Use it to initialise a `static`.
///
/// ```rust,ignore
/// static SPECS: spec_ui_core::EmbeddedFs = spec_ui_core::embed_files! {
///     "openapi.json" => concat!(env!("CARGO_MANIFEST_DIR"), "/api/openapi.json"),
/// };
/// ```
#[macro_export]
macro_rules! embed_files {
    ($($name:expr => $path:expr),* $(,)?) => {
        $crate::EmbeddedFs::new(&[
            $(($name, include_bytes!($path) as &'static [u8])),*
        ])
    };
}
