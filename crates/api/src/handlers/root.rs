//! Welcome and API description endpoints.

use axum::Json;
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// GET /
///
/// Welcome message with a map of the available endpoints.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Artworks API",
        "docs": "/docs",
        "openapi": "/openapi.json",
        "endpoints": {
            "list_artworks": "GET /artworks",
            "get_artwork": "GET /artworks/{artwork_id}",
            "create_artwork": "POST /artworks",
            "update_artwork": "PUT /artworks/{artwork_id}",
            "delete_artwork": "DELETE /artworks/{artwork_id}",
            "get_types": "GET /types",
        },
    }))
}

/// GET /openapi.json
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
