#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use artworks_api::config::{ServerConfig, StoreBackend, StoreConfig};
use artworks_api::router::build_app_router;
use artworks_api::state::AppState;
use artworks_db::models::artwork::Artwork;
use artworks_db::InMemoryArtworkStore;

/// Build a test `ServerConfig` with safe defaults and an optional API key.
pub fn test_config(api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        api_key: api_key.map(str::to_string),
        store: StoreConfig {
            backend: StoreBackend::Memory,
            mongodb_uri: String::new(),
            database: "artworks_test".to_string(),
            collection: "artworks".to_string(),
            seed_data_path: PathBuf::from("does-not-exist.json"),
        },
    }
}

/// Build the full application router over an in-memory store holding
/// `artworks`, with the same middleware stack production uses.
pub fn build_test_app_with(artworks: Vec<Artwork>, api_key: Option<&str>) -> Router {
    build_test_app_with_config(artworks, test_config(api_key))
}

/// Like [`build_test_app_with`], but with a caller-supplied config.
pub fn build_test_app_with_config(artworks: Vec<Artwork>, config: ServerConfig) -> Router {
    let state = AppState {
        store: Arc::new(InMemoryArtworkStore::with_artworks(artworks)),
        config: Arc::new(config),
    };
    build_app_router(state)
}

/// Router over the standard [`fixture`] artworks, no API key.
pub fn build_test_app() -> Router {
    build_test_app_with(fixture(), None)
}

pub fn artwork(id: &str, types: &[&str], price: f64, year: i32, available: bool) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: format!("Artwork {id}"),
        description: "test piece".to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        price,
        dimensions: "30x40cm".to_string(),
        year,
        available,
        image_url: format!("https://example.com/{id}.jpg"),
    }
}

pub fn fixture() -> Vec<Artwork> {
    vec![
        artwork("a1", &["watercolor", "featured"], 150.0, 2020, true),
        artwork("a2", &["Mixed-Media"], 420.0, 2021, false),
        artwork("a3", &["large-canvas", "featured"], 1800.0, 2021, true),
        artwork("a4", &["watercolor"], 95.0, 2019, true),
    ]
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `id` of every artwork in a `GET /artworks` body.
pub fn listed_ids(json: &serde_json::Value) -> Vec<String> {
    json["artworks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect()
}
