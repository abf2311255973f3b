//! The specification handler.
//!
//! A [`SpecHandler`] reads or generates the specification at most once in
//! its lifetime and replays the outcome, success or failure, on every
//! request.
//!
//! # Example
//!
//! ```no_run
//! use spec_ui_core::SpecUiConfig;
//! use spec_ui_server::SpecHandler;
//!
//! let handler = SpecHandler::new(SpecUiConfig {
//!     spec_path: "/docs/openapi.yaml".to_string(),
//!     spec_file: Some("api/openapi.yaml".to_string()),
//!     ..Default::default()
//! });
//!
//! let response = handler.response();
//! assert_eq!(response.status(), 200);
//! ```

use std::any::Any;
use std::fmt;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};

use bytes::Bytes;
use http::Request;

use spec_ui_core::{SpecError, SpecFormat, SpecGenerator, SpecResult, SpecSource, SpecUiConfig};
use spec_ui_telemetry::logging::fields;

use crate::response::{error_response, spec_response, HttpResponse};

/// Serves one specification document, resolved lazily and exactly once.
///
/// The source is selected from the configuration when the handler is
/// built, but nothing is read until the first request. Concurrent first
/// requests block on the same resolution.
pub struct SpecHandler {
    config: Option<Arc<SpecUiConfig>>,
    source: SpecSource,
    format: SpecFormat,
    resolved: OnceLock<SpecResult<Bytes>>,
}

impl SpecHandler {
    /// Create a handler for the given configuration.
    pub fn new(config: impl Into<Arc<SpecUiConfig>>) -> Self {
        let config = config.into();
        let format = config.format();
        let source = config.source();

        Self {
            config: Some(config),
            source,
            format,
            resolved: OnceLock::new(),
        }
    }

    /// Returns the configuration, if one was supplied.
    #[must_use]
    pub fn config(&self) -> Option<&SpecUiConfig> {
        self.config.as_deref()
    }

    /// Returns the format inferred from the spec path.
    #[must_use]
    pub fn format(&self) -> SpecFormat {
        self.format
    }

    /// Returns the selected source.
    #[must_use]
    pub fn source(&self) -> &SpecSource {
        &self.source
    }

    /// Returns true once the specification has been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Resolve the specification, reading the source on first call only.
    pub fn resolve(&self) -> Result<&Bytes, &SpecError> {
        self.resolved.get_or_init(|| self.load()).as_ref()
    }

    /// Serve a request. Only routing cares about the request; the response
    /// is the same for all of them.
    pub fn handle<B>(&self, _request: &Request<B>) -> HttpResponse {
        self.response()
    }

    /// Build the response for the resolved specification.
    pub fn response(&self) -> HttpResponse {
        match self.resolve() {
            Ok(bytes) => spec_response(self.format, bytes.clone()),
            Err(error) => error_response(error),
        }
    }

    fn load(&self) -> SpecResult<Bytes> {
        let Some(config) = &self.config else {
            tracing::error!("OpenAPI specification handler has no configuration");
            return Err(SpecError::ConfigurationMissing);
        };

        let kind = self.source.kind();
        tracing::debug!(
            { fields::SPEC_PATH } = config.spec_path.as_str(),
            { fields::SPEC_SOURCE } = kind,
            { fields::SPEC_FORMAT } = self.format.as_str(),
            "resolving OpenAPI specification"
        );

        let result = match &self.source {
            SpecSource::Generator(generator) => generate(generator.as_ref(), self.format),
            SpecSource::Archive { archive, path } => {
                read_guarded(path, || archive.read(path).map(Bytes::from_static))
            }
            SpecSource::Filesystem { fs, path } => {
                read_guarded(path, || fs.read_file(path).map(Bytes::from))
            }
            SpecSource::LocalFile { path } => read_guarded(&path.display().to_string(), || {
                std::fs::read(path).map(Bytes::from)
            }),
            SpecSource::Unset => Err(SpecError::SourceUnset),
        };

        match &result {
            Ok(bytes) => tracing::info!(
                { fields::SPEC_PATH } = config.spec_path.as_str(),
                { fields::SPEC_SOURCE } = kind,
                { fields::SPEC_FORMAT } = self.format.as_str(),
                { fields::SPEC_BYTES } = bytes.len(),
                "resolved OpenAPI specification"
            ),
            Err(error) => tracing::error!(
                { fields::SPEC_PATH } = config.spec_path.as_str(),
                { fields::SPEC_SOURCE } = kind,
                error = %error,
                "failed to resolve OpenAPI specification"
            ),
        }

        result
    }
}

impl Default for SpecHandler {
    /// A handler without configuration; every request gets a 500.
    fn default() -> Self {
        Self {
            config: None,
            source: SpecSource::Unset,
            format: SpecFormat::default(),
            resolved: OnceLock::new(),
        }
    }
}

impl fmt::Debug for SpecHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecHandler")
            .field("configured", &self.config.is_some())
            .field("source", &self.source)
            .field("format", &self.format)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

// Collaborator panics are caught so they memoize as a failure instead of
// leaving the cell empty and unwinding into the host server.
fn generate(generator: &dyn SpecGenerator, format: SpecFormat) -> SpecResult<Bytes> {
    match panic::catch_unwind(AssertUnwindSafe(|| generator.generate(format))) {
        Ok(Ok(bytes)) => Ok(Bytes::from(bytes)),
        Ok(Err(error)) => Err(SpecError::generation_failed(error.to_string())),
        Err(payload) => Err(SpecError::generation_failed(format!(
            "generator panicked{}",
            panic_message(payload.as_ref())
        ))),
    }
}

fn read_guarded<F>(path: &str, read: F) -> SpecResult<Bytes>
where
    F: FnOnce() -> io::Result<Bytes>,
{
    match panic::catch_unwind(AssertUnwindSafe(read)) {
        Ok(Ok(bytes)) => Ok(bytes),
        Ok(Err(e)) => Err(SpecError::source_not_found(path, e.to_string())),
        Err(payload) => Err(SpecError::source_not_found(
            path,
            format!("read panicked{}", panic_message(payload.as_ref())),
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!(": {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!(": {message}")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spec_ui_core::{EmbeddedFs, GeneratorError, SerializedSpec, SpecFs};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Panicking;

    impl SpecGenerator for Panicking {
        fn to_json(&self) -> Result<Vec<u8>, GeneratorError> {
            panic!("schema registry unavailable")
        }

        fn to_yaml(&self) -> Result<Vec<u8>, GeneratorError> {
            panic!("schema registry unavailable")
        }
    }

    #[derive(Default)]
    struct Counting {
        json: AtomicUsize,
        yaml: AtomicUsize,
    }

    impl SpecGenerator for Counting {
        fn to_json(&self) -> Result<Vec<u8>, GeneratorError> {
            self.json.fetch_add(1, Ordering::SeqCst);
            Ok(b"{}".to_vec())
        }

        fn to_yaml(&self) -> Result<Vec<u8>, GeneratorError> {
            self.yaml.fetch_add(1, Ordering::SeqCst);
            Ok(b"openapi: 3.1.0".to_vec())
        }
    }

    #[test]
    fn test_construction_is_lazy() {
        let handler = SpecHandler::new(SpecUiConfig {
            spec_file: Some("/definitely/not/here.yaml".to_string()),
            ..Default::default()
        });
        assert!(!handler.is_resolved());
        assert_eq!(handler.source().kind(), "local_file");
    }

    #[test]
    fn test_default_is_configuration_missing() {
        let handler = SpecHandler::default();
        assert!(handler.config().is_none());
        assert_eq!(handler.resolve(), Err(&SpecError::ConfigurationMissing));
        assert_eq!(handler.response().status(), 500);
    }

    #[test]
    fn test_unset_source() {
        let handler = SpecHandler::new(SpecUiConfig::default());
        assert_eq!(handler.resolve(), Err(&SpecError::SourceUnset));
        assert_eq!(handler.response().status(), 500);
    }

    #[test]
    fn test_generator_method_follows_format() {
        let generator = Arc::new(Counting::default());

        let json = SpecHandler::new(SpecUiConfig {
            spec_path: "/docs/openapi.json".to_string(),
            spec_generator: Some(generator.clone()),
            ..Default::default()
        });
        assert_eq!(json.resolve().unwrap().as_ref(), b"{}");

        let yaml = SpecHandler::new(SpecUiConfig {
            spec_path: "/docs/openapi.yaml".to_string(),
            spec_generator: Some(generator.clone()),
            ..Default::default()
        });
        assert_eq!(yaml.resolve().unwrap().as_ref(), b"openapi: 3.1.0");

        assert_eq!(generator.json.load(Ordering::SeqCst), 1);
        assert_eq!(generator.yaml.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolves_once() {
        let generator = Arc::new(Counting::default());
        let handler = SpecHandler::new(SpecUiConfig {
            spec_generator: Some(generator.clone()),
            ..Default::default()
        });

        for _ in 0..5 {
            assert_eq!(handler.response().status(), 200);
        }
        assert!(handler.is_resolved());
        assert_eq!(generator.json.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_generator_panic_is_memoized_failure() {
        let handler = SpecHandler::new(SpecUiConfig {
            spec_generator: Some(Arc::new(Panicking)),
            ..Default::default()
        });

        match handler.resolve() {
            Err(SpecError::GenerationFailed { reason }) => {
                assert!(reason.contains("schema registry unavailable"));
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
        assert!(handler.is_resolved());
        assert_eq!(handler.response().status(), 500);
    }

    struct PanickingFs {
        reads: AtomicUsize,
    }

    impl SpecFs for PanickingFs {
        fn read_file(&self, _path: &str) -> io::Result<Vec<u8>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            panic!("disk controller reset")
        }
    }

    #[test]
    fn test_filesystem_panic_is_memoized_not_found() {
        let fs = Arc::new(PanickingFs {
            reads: AtomicUsize::new(0),
        });
        let handler = SpecHandler::new(SpecUiConfig {
            spec_file: Some("openapi.json".to_string()),
            spec_fs: Some(fs.clone()),
            ..Default::default()
        });

        assert_eq!(handler.response().status(), 404);
        assert_eq!(handler.response().status(), 404);
        assert!(handler.is_resolved());
        assert_eq!(fs.reads.load(Ordering::SeqCst), 1);

        match handler.resolve() {
            Err(SpecError::SourceNotFound { path, reason }) => {
                assert_eq!(path, "openapi.json");
                assert!(reason.contains("disk controller reset"));
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_archive_bytes_are_static() {
        static ARCHIVE: EmbeddedFs = EmbeddedFs::new(&[("openapi.yaml", b"openapi: 3.1.0" as &[u8])]);

        let handler = SpecHandler::new(SpecUiConfig {
            spec_path: "/docs/openapi.yaml".to_string(),
            spec_file: Some("openapi.yaml".to_string()),
            spec_archive: Some(ARCHIVE),
            ..Default::default()
        });

        let bytes = handler.resolve().unwrap();
        assert_eq!(bytes.as_ptr(), ARCHIVE.get("openapi.yaml").unwrap().as_ptr());
    }

    #[test]
    fn test_serialized_spec_generator() {
        let handler = SpecHandler::new(SpecUiConfig {
            spec_path: "/openapi.yaml".to_string(),
            spec_generator: Some(Arc::new(SerializedSpec::new(
                serde_json::json!({"openapi": "3.1.0"}),
            ))),
            ..Default::default()
        });
        let yaml = std::str::from_utf8(handler.resolve().unwrap()).unwrap();
        assert!(yaml.contains("openapi: 3.1.0"));
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "");

        let payload: Box<dyn Any + Send> = Box::new("boom".to_string());
        assert_eq!(panic_message(payload.as_ref()), ": boom");
    }

    #[test]
    fn test_debug() {
        let debug = format!("{:?}", SpecHandler::default());
        assert!(debug.contains("configured: false"));
        assert!(debug.contains("resolved: false"));
    }
}
