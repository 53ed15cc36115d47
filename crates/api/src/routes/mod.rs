pub mod artworks;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                          welcome + endpoint map (no API key)
/// /openapi.json              OpenAPI document (no API key)
/// /docs, /redoc              interactive docs over /openapi.json (no API key)
/// /health                    service and store health (no API key)
///
/// /artworks                  list (filters), create
/// /artworks/{artwork_id}     get, update, delete
/// /types                     distinct type labels
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::root))
        .route("/openapi.json", get(handlers::root::openapi))
        .route("/docs", get(handlers::docs::swagger_ui))
        .route("/redoc", get(handlers::docs::redoc))
        .merge(health::router())
        .nest("/artworks", artworks::router())
        .merge(artworks::types_router())
}
