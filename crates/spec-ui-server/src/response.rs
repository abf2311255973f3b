//! HTTP responses for the specification endpoint.

use bytes::Bytes;
use http::{header, Response, StatusCode};
use http_body_util::Full;

use spec_ui_core::{SpecError, SpecFormat, JSON_CONTENT_TYPE};

/// Type alias for HTTP response body.
pub type ResponseBody = Full<Bytes>;

/// Type alias for the HTTP response.
pub type HttpResponse = Response<ResponseBody>;

/// `Cache-Control` value sent with every specification.
pub const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Builds the 200 response carrying the specification bytes verbatim.
pub fn spec_response(format: SpecFormat, body: Bytes) -> HttpResponse {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, format.content_type())
        .header(header::CACHE_CONTROL, NO_CACHE)
        .header(header::PRAGMA, "no-cache")
        .header(header::EXPIRES, "0")
        .body(Full::new(body.clone()))
        .unwrap_or_else(|_| Response::new(Full::new(body)))
}

/// Builds the structured JSON error response for a resolution failure.
pub fn error_response(error: &SpecError) -> HttpResponse {
    let body = Bytes::from(error.body().to_json());

    Response::builder()
        .status(error.status_code())
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(Full::new(body.clone()))
        .unwrap_or_else(|_| {
            let mut response = Response::new(Full::new(body));
            *response.status_mut() = error.status_code();
            response
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(response: HttpResponse) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_spec_response_headers() {
        let response = spec_response(SpecFormat::Yaml, Bytes::from_static(b"openapi: 3.1.0"));
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "application/x-yaml");
        assert_eq!(headers[header::CACHE_CONTROL], "no-cache, no-store, must-revalidate");
        assert_eq!(headers[header::PRAGMA], "no-cache");
        assert_eq!(headers[header::EXPIRES], "0");

        assert_eq!(body_bytes(response).await, Bytes::from_static(b"openapi: 3.1.0"));
    }

    #[tokio::test]
    async fn test_error_response() {
        let response = error_response(&SpecError::source_not_found("openapi.yaml", "missing"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert!(response.headers().get(header::CACHE_CONTROL).is_none());

        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "OpenAPI specification file is not found");
    }
}
