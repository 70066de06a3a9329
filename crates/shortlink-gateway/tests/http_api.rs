use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use shortlink_core::LinkStore;
use shortlink_gateway::{App, AppState};
use shortlink_generator::SeqGenerator;
use shortlink_shortener::{LinkService, ServiceConfig};
use shortlink_storage::InMemoryLinkStore;
use tower::ServiceExt;

type Service = LinkService<InMemoryLinkStore, SeqGenerator>;

struct Fixture {
    store: Arc<InMemoryLinkStore>,
    service: Arc<Service>,
    router: Router,
}

impl Fixture {
    fn start() -> Self {
        let store = Arc::new(InMemoryLinkStore::new());
        let service = Arc::new(LinkService::new(
            Arc::clone(&store),
            SeqGenerator::with_prefix("sl"),
            ServiceConfig::default(),
        ));
        let router = App::router(AppState::new(service.clone(), "https://sho.rt/"));

        Self {
            store,
            service,
            router,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, body.to_vec())
    }

    async fn create(&self, payload: Value) -> (StatusCode, Value) {
        let request = Request::post("/api/links")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let (status, _, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    async fn get(&self, path: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        self.send(Request::get(path).body(Body::empty()).unwrap()).await
    }
}

#[tokio::test]
async fn health_check() {
    let fixture = Fixture::start();

    let (status, _, body) = fixture.get("/healthz").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_returns_code_and_short_url() {
    let fixture = Fixture::start();

    let (status, body) = fixture
        .create(json!({ "long_url": "https://example.com/a/long/path" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["short_code"], "sl000000");
    assert_eq!(body["short_url"], "https://sho.rt/sl000000");
}

#[tokio::test]
async fn redirect_to_long_url_and_count_visit() {
    let fixture = Fixture::start();
    let (_, body) = fixture
        .create(json!({ "long_url": "https://example.com" }))
        .await;
    let code = body["short_code"].as_str().unwrap().to_string();

    let (status, headers, _) = fixture.get(&format!("/{code}")).await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(headers[header::LOCATION], "https://example.com");

    fixture.service.shutdown().await;
    let link = fixture.store.find_by_short_code(&code).await.unwrap();
    assert_eq!(link.visit_count, 1);
}

#[tokio::test]
async fn blank_url_is_bad_request() {
    let fixture = Fixture::start();

    let (status, body) = fixture.create(json!({ "long_url": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid long url"));
    assert!(fixture.store.is_empty());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let fixture = Fixture::start();
    let request = Request::post("/api/links")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, _, _) = fixture.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(fixture.store.is_empty());
}

#[tokio::test]
async fn too_short_code_is_bad_request() {
    let fixture = Fixture::start();

    let (status, _, body) = fixture.get("/ab").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("too short"));
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let fixture = Fixture::start();

    let (status, headers, body) = fixture.get("/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(headers.get(header::LOCATION).is_none());
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "link not found for code 'missing'");
}

#[tokio::test]
async fn store_failure_is_internal_error_without_details() {
    let fixture = Fixture::start();
    let (_, body) = fixture
        .create(json!({ "long_url": "https://example.com" }))
        .await;
    let code = body["short_code"].as_str().unwrap().to_string();
    fixture.store.close().await.unwrap();

    let (status, _, body) = fixture.get(&format!("/{code}")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn create_requires_post() {
    let fixture = Fixture::start();

    let (status, _, _) = fixture.get("/api/links").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
