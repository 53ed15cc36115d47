//! Route definitions for artwork listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::artworks;
use crate::state::AppState;

/// Artwork routes mounted at `/artworks`.
///
/// ```text
/// GET    /        -> list_artworks
/// POST   /        -> create_artwork
/// GET    /{artwork_id}    -> get_artwork
/// PUT    /{artwork_id}    -> update_artwork
/// DELETE /{artwork_id}    -> delete_artwork
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(artworks::list_artworks).post(artworks::create_artwork),
        )
        .route(
            "/{artwork_id}",
            get(artworks::get_artwork)
                .put(artworks::update_artwork)
                .delete(artworks::delete_artwork),
        )
}

/// `GET /types` at root level.
pub fn types_router() -> Router<AppState> {
    Router::new().route("/types", get(artworks::list_types))
}
