//! End-to-end upload flow against a mock analysis endpoint.

use std::sync::Arc;

use blink::adapters::analysis::HttpAnalysisGateway;
use blink::domain::{AppStore, Domain, DomainError, ImageRef, UploadState};
use blink::ports::{AnalysisPort, MediaPickerPort};
use blink::usecases::UploadService;
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// The interactive picker never runs in these tests; selection state is
/// seeded through store actions instead.
struct NoPicker;

#[async_trait::async_trait]
impl MediaPickerPort for NoPicker {
    async fn pick_image(&self) -> Result<Option<ImageRef>, DomainError> {
        Ok(None)
    }
}

fn domain(endpoint: String) -> Domain {
    Domain {
        id: "vision-pro".to_string(),
        name: "Vision Pro".to_string(),
        endpoint,
        description: "High fidelity scene understanding.".to_string(),
    }
}

async fn write_image(dir: &TempDir, name: &str) -> String {
    let path = dir.path().join(name);
    tokio::fs::write(&path, b"fake image bytes").await.unwrap();
    path.display().to_string()
}

fn service_with(store: Arc<AppStore>) -> UploadService {
    let gateway = Arc::new(HttpAnalysisGateway::new(None).unwrap());
    UploadService::new(gateway, Arc::new(NoPicker), store)
}

#[tokio::test]
async fn upload_success_returns_payload_and_settles_store() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/vision/pro");
        then.status(200)
            .json_body(json!({"label": "cat", "score": 0.97}));
    });

    let dir = TempDir::new().unwrap();
    let locator = write_image(&dir, "cat.jpg").await;

    let store = Arc::new(AppStore::new(vec![], 10));
    store.select_domain(domain(server.url("/vision/pro"))).await;
    store
        .set_selected_image(Some(ImageRef {
            locator,
            display_name: Some("cat.jpg".to_string()),
            mime_type: Some("image/jpeg".to_string()),
        }))
        .await;

    let payload = service_with(Arc::clone(&store))
        .upload_selected()
        .await
        .unwrap();

    mock.assert();
    let expected = json!({"label": "cat", "score": 0.97});
    assert_eq!(payload, *expected.as_object().unwrap());

    let state = store.snapshot().await;
    assert_eq!(state.upload_state, UploadState::Success);
    assert_eq!(state.last_response, Some(payload));
    assert_eq!(state.credits, 9);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn upload_failure_surfaces_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/vision/pro");
        then.status(500).body("internal error");
    });

    let dir = TempDir::new().unwrap();
    let locator = write_image(&dir, "cat.jpg").await;

    let store = Arc::new(AppStore::new(vec![], 10));
    store.select_domain(domain(server.url("/vision/pro"))).await;
    store
        .set_selected_image(Some(ImageRef {
            locator,
            display_name: None,
            mime_type: None,
        }))
        .await;

    let err = service_with(Arc::clone(&store))
        .upload_selected()
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Upload(ref m) if m == "internal error"));

    let state = store.snapshot().await;
    assert_eq!(state.upload_state, UploadState::Error);
    assert_eq!(state.error.as_deref(), Some("internal error"));
    assert!(state.last_response.is_none());
    assert_eq!(state.credits, 10);
}

#[tokio::test]
async fn failure_with_empty_body_uses_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/vision/pro");
        then.status(502);
    });

    let dir = TempDir::new().unwrap();
    let locator = write_image(&dir, "cat.jpg").await;

    let gateway = HttpAnalysisGateway::new(None).unwrap();
    let err = gateway
        .upload(
            &domain(server.url("/vision/pro")),
            &ImageRef {
                locator,
                display_name: None,
                mime_type: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Upload(ref m) if m == "Failed to upload image"));
}

#[tokio::test]
async fn unparsable_success_body_is_a_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/vision/pro");
        then.status(200).body("not json");
    });

    let dir = TempDir::new().unwrap();
    let locator = write_image(&dir, "cat.jpg").await;

    let store = Arc::new(AppStore::new(vec![], 10));
    store.select_domain(domain(server.url("/vision/pro"))).await;
    store
        .set_selected_image(Some(ImageRef {
            locator,
            display_name: None,
            mime_type: None,
        }))
        .await;

    let err = service_with(Arc::clone(&store))
        .upload_selected()
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Parse(_)));

    let state = store.snapshot().await;
    assert_eq!(state.upload_state, UploadState::Error);
    assert!(state.error.as_deref().is_some_and(|m| !m.is_empty()));
    assert!(state.last_response.is_none());
}

#[tokio::test]
async fn refusal_without_image_issues_no_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/vision/pro");
        then.status(200).json_body(json!({}));
    });

    let store = Arc::new(AppStore::new(vec![], 10));
    store.select_domain(domain(server.url("/vision/pro"))).await;

    let err = service_with(Arc::clone(&store))
        .upload_selected()
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(mock.hits(), 0);

    let state = store.snapshot().await;
    assert_eq!(state.upload_state, UploadState::Idle);
    assert_eq!(state.credits, 10);
}

#[tokio::test]
async fn multipart_request_carries_single_file_part_with_defaults() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/vision/lite")
            .header("accept", "application/json")
            .body_contains("name=\"file\"")
            .body_contains("filename=\"snapshot.png\"")
            .body_contains("image/jpeg")
            .body_contains("fake image bytes");
        then.status(200).json_body(json!({}));
    });

    let dir = TempDir::new().unwrap();
    // No display name or MIME set: the part falls back to the locator's last
    // segment and image/jpeg.
    let locator = write_image(&dir, "snapshot.png").await;

    let store = Arc::new(AppStore::new(vec![], 10));
    store.select_domain(domain(server.url("/vision/lite"))).await;
    store
        .set_selected_image(Some(ImageRef {
            locator,
            display_name: None,
            mime_type: None,
        }))
        .await;

    let payload = service_with(Arc::clone(&store))
        .upload_selected()
        .await
        .unwrap();

    mock.assert();
    assert!(payload.is_empty());

    let state = store.snapshot().await;
    assert_eq!(state.upload_state, UploadState::Success);
    assert_eq!(state.last_response, Some(payload));
}
