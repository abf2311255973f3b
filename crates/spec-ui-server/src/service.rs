//! Async adapter for [`SpecHandler`].
//!
//! Resolution reads files and may run user code, so the first request moves
//! it onto the blocking pool. The blocking task finishes and memoizes its
//! result even if the request that started it is dropped.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use http::Request;
use hyper::service::Service;

use spec_ui_core::SpecError;

use crate::handler::SpecHandler;
use crate::response::{error_response, HttpResponse};

/// A cloneable hyper service serving one shared [`SpecHandler`].
#[derive(Debug, Clone)]
pub struct SpecService {
    handler: Arc<SpecHandler>,
}

impl SpecService {
    /// Wrap a shared handler.
    pub fn new(handler: Arc<SpecHandler>) -> Self {
        Self { handler }
    }

    /// Returns the shared handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<SpecHandler> {
        &self.handler
    }

    /// Produce the response, resolving on the blocking pool if needed.
    pub async fn respond(&self) -> HttpResponse {
        if self.handler.is_resolved() {
            return self.handler.response();
        }

        let handler = Arc::clone(&self.handler);
        match tokio::task::spawn_blocking(move || handler.response()).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "specification resolution task failed");
                error_response(&SpecError::generation_failed(e.to_string()))
            }
        }
    }
}

impl<B> Service<Request<B>> for SpecService {
    type Response = HttpResponse;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, request: Request<B>) -> Self::Future {
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            "serving OpenAPI specification"
        );

        let service = self.clone();
        Box::pin(async move { Ok(service.respond().await) })
    }
}
