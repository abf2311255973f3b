//! Facade tests: configuration in, specification out.

use std::sync::Arc;

use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use spec_ui::prelude::*;
use spec_ui::server::HttpResponse;

static ARCHIVE: EmbeddedFs = embed_files! {
    "openapi.json" => concat!(env!("CARGO_MANIFEST_DIR"), "/../../testdata/petstore.json"),
};

async fn body_string(response: HttpResponse) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn embedded_archive_through_facade() {
    let ui = SpecUi::new(SpecUiConfig {
        spec_file: Some("openapi.json".to_string()),
        spec_archive: Some(ARCHIVE),
        ..Default::default()
    });

    let response = ui.spec().handle(&Request::get(ui.spec_path()).body(()).unwrap());
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert!(body_string(response).await.contains("Swagger Petstore"));
}

#[tokio::test]
async fn settings_with_spec_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("openapi.yaml"), "openapi: 3.1.0\ninfo:\n  title: Pets\n")
        .unwrap();

    let toml = format!(
        "[spec]\nspec_path = \"/docs/openapi.yaml\"\nspec_file = \"openapi.yaml\"\nspec_dir = {:?}\n",
        dir.path().display().to_string()
    );
    let settings = ConfigLoader::new()
        .with_string(&toml, "toml")
        .unwrap()
        .load()
        .unwrap();

    let ui = SpecUi::from_settings(&settings);
    let response = ui.spec_service().respond().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/x-yaml");
    assert_eq!(body_string(response).await, "openapi: 3.1.0\ninfo:\n  title: Pets\n");
}

#[tokio::test]
async fn serialized_document_generator() {
    let document = serde_json::json!({
        "openapi": "3.1.0",
        "info": {"title": "Generated", "version": "1.0.0"},
        "paths": {}
    });

    let ui = SpecUi::new(SpecUiConfig {
        spec_path: "/docs/openapi.json".to_string(),
        spec_file: Some("ignored.json".to_string()),
        spec_generator: Some(Arc::new(SerializedSpec::new(document.clone()))),
        ..Default::default()
    });

    let body = body_string(ui.spec_service().respond().await).await;
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed, document);
}

#[tokio::test]
async fn every_accessor_shares_one_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("openapi.json");
    std::fs::write(&path, "{}").unwrap();

    let ui = SpecUi::new(SpecUiConfig {
        spec_file: Some(path.display().to_string()),
        ..Default::default()
    });

    assert_eq!(ui.spec_service().respond().await.status(), StatusCode::OK);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(ui.spec().response().status(), StatusCode::OK);
    assert_eq!(ui.clone().spec_service().respond().await.status(), StatusCode::OK);
}
