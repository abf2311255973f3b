//! # spec-ui server
//!
//! Serves an OpenAPI specification document over HTTP.
//!
//! - [`SpecHandler`] resolves the document from its configured source once
//!   and answers every request with the memoized bytes or error.
//! - [`SpecService`] adapts a shared handler to [`hyper::service::Service`],
//!   resolving on the blocking pool.
//! - [`serve`] and [`serve_connection`] run the service on plain HTTP/1
//!   connections.
//!
//! Successful responses carry `Content-Type` for the inferred format and
//! headers that disable caching. Failures are JSON bodies of the form
//! `{"status": 404, "message": "..."}`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use spec_ui_core::SpecUiConfig;
//! use spec_ui_server::{serve, SpecHandler, SpecService};
//!
//! let handler = Arc::new(SpecHandler::new(SpecUiConfig {
//!     spec_file: Some("openapi.json".to_string()),
//!     ..Default::default()
//! }));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! serve(listener, SpecService::new(handler), tokio::signal::ctrl_c().map(|_| ())).await?;
//! ```

#![doc(html_root_url = "https://docs.rs/spec-ui-server/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod handler;
mod response;
mod server;
mod service;

pub use handler::SpecHandler;
pub use response::{error_response, spec_response, HttpResponse, ResponseBody, NO_CACHE};
pub use server::{serve, serve_connection};
pub use service::SpecService;
