//! The [`SpecUi`] entry point.

use std::sync::Arc;

use spec_ui_config::SpecUiSettings;
use spec_ui_core::SpecUiConfig;
use spec_ui_server::{SpecHandler, SpecService};

/// Owns the configuration and the one shared specification handler.
///
/// The handler's memo lives as long as the `SpecUi`: mount
/// [`spec`](Self::spec) or [`spec_service`](Self::spec_service) as many
/// times as needed and the document is still read once.
///
/// # Example
///
/// ```
/// use spec_ui::prelude::*;
///
/// let ui = SpecUi::new(SpecUiConfig {
///     spec_path: "/api/openapi.yaml".to_string(),
///     spec_file: Some("openapi.yaml".to_string()),
///     ..Default::default()
/// });
///
/// assert_eq!(ui.docs_path(), "/docs");
/// assert_eq!(ui.spec_path(), "/api/openapi.yaml");
/// assert!(!ui.spec().is_resolved());
/// ```
#[derive(Debug, Clone)]
pub struct SpecUi {
    config: Arc<SpecUiConfig>,
    spec: Arc<SpecHandler>,
}

impl SpecUi {
    /// Build from an explicit configuration.
    pub fn new(config: SpecUiConfig) -> Self {
        let config = Arc::new(config);
        let spec = Arc::new(SpecHandler::new(Arc::clone(&config)));
        Self { config, spec }
    }

    /// Build from loaded settings.
    pub fn from_settings(settings: &SpecUiSettings) -> Self {
        Self::new(settings.to_config())
    }

    /// Route of the documentation page.
    pub fn docs_path(&self) -> &str {
        &self.config.docs_path
    }

    /// Route the specification is served on.
    pub fn spec_path(&self) -> &str {
        &self.config.spec_path
    }

    /// The configuration.
    pub fn config(&self) -> &SpecUiConfig {
        &self.config
    }

    /// The shared specification handler.
    pub fn spec(&self) -> Arc<SpecHandler> {
        Arc::clone(&self.spec)
    }

    /// A hyper service over the shared handler.
    pub fn spec_service(&self) -> SpecService {
        SpecService::new(self.spec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handlers_are_shared() {
        let ui = SpecUi::new(SpecUiConfig::default());
        assert!(Arc::ptr_eq(&ui.spec(), &ui.spec()));
        assert!(Arc::ptr_eq(&ui.spec(), ui.spec_service().handler()));
        assert!(Arc::ptr_eq(&ui.spec(), &ui.clone().spec()));
    }

    #[test]
    fn test_from_settings() {
        let mut settings = SpecUiSettings::default();
        settings.spec.spec_path = "/openapi.yaml".to_string();
        settings.spec.spec_file = Some("openapi.yaml".to_string());

        let ui = SpecUi::from_settings(&settings);
        assert_eq!(ui.spec_path(), "/openapi.yaml");
        assert_eq!(ui.config().spec_file.as_deref(), Some("openapi.yaml"));
        assert_eq!(ui.spec().source().kind(), "local_file");
    }
}
