//! Handlers for artwork listings.
//!
//! Each handler is one store call (plus a count for listings). Misses map to
//! 404 and empty updates to 400.

use artworks_core::artwork::{generate_artwork_id, ARTWORK_ENTITY};
use artworks_core::error::CoreError;
use artworks_db::models::artwork::{ArtworkListParams, CreateArtwork, UpdateArtwork};
use artworks_db::models::artwork::Artwork;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::response::{ArtworksResponse, DeleteResponse, ErrorBody, TypesResponse};
use crate::state::AppState;

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ARTWORK_ENTITY,
        id,
    })
}

/// GET /artworks
///
/// List artworks matching the optional `type`, `available`, `min_price`,
/// `max_price` and `year` filters.
#[utoipa::path(
    get,
    path = "/artworks",
    tag = "Artworks",
    params(ArtworkListParams),
    responses(
        (status = 200, description = "Matching artworks", body = ArtworksResponse),
        (status = 400, description = "Malformed or out-of-range filter", body = ErrorBody),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
    )
)]
pub async fn list_artworks(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ArtworkListParams>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;

    let total = state.store.count_all().await?;
    let artworks = state.store.list(&params).await?;

    Ok(Json(ArtworksResponse {
        total,
        filtered_count: artworks.len(),
        artworks,
    }))
}

/// GET /artworks/{artwork_id}
#[utoipa::path(
    get,
    path = "/artworks/{artwork_id}",
    tag = "Artworks",
    params(("artwork_id" = String, Path, description = "Artwork id")),
    responses(
        (status = 200, description = "The artwork", body = Artwork),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
        (status = 404, description = "No artwork with this id", body = ErrorBody),
    )
)]
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let artwork = state
        .store
        .find_by_id(&artwork_id)
        .await?
        .ok_or_else(|| not_found(artwork_id))?;

    Ok(Json(artwork))
}

/// POST /artworks
///
/// Create an artwork with a server-generated id.
#[utoipa::path(
    post,
    path = "/artworks",
    tag = "Artworks",
    request_body = CreateArtwork,
    responses(
        (status = 201, description = "Artwork created", body = Artwork),
        (status = 400, description = "Invalid field value or malformed JSON", body = ErrorBody),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
        (status = 409, description = "Generated id already in use", body = ErrorBody),
        (status = 415, description = "Body is not JSON", body = ErrorBody),
        (status = 422, description = "Missing or mistyped field", body = ErrorBody),
    )
)]
pub async fn create_artwork(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateArtwork>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let artwork = input.into_artwork(generate_artwork_id());
    state.store.insert(&artwork).await?;

    tracing::info!(artwork_id = %artwork.id, title = %artwork.title, "Artwork created");

    Ok((StatusCode::CREATED, Json(artwork)))
}

/// PUT /artworks/{artwork_id}
///
/// Replace the given fields. At least one field must be present.
#[utoipa::path(
    put,
    path = "/artworks/{artwork_id}",
    tag = "Artworks",
    params(("artwork_id" = String, Path, description = "Artwork id")),
    request_body = UpdateArtwork,
    responses(
        (status = 200, description = "The updated artwork", body = Artwork),
        (status = 400, description = "No fields to update or invalid field value", body = ErrorBody),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
        (status = 404, description = "No artwork with this id", body = ErrorBody),
        (status = 415, description = "Body is not JSON", body = ErrorBody),
        (status = 422, description = "Mistyped field", body = ErrorBody),
    )
)]
pub async fn update_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<String>,
    AppJson(input): AppJson<UpdateArtwork>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }
    input.validate()?;

    let artwork = state
        .store
        .update(&artwork_id, &input)
        .await?
        .ok_or_else(|| not_found(artwork_id))?;

    tracing::info!(artwork_id = %artwork.id, "Artwork updated");

    Ok(Json(artwork))
}

/// DELETE /artworks/{artwork_id}
#[utoipa::path(
    delete,
    path = "/artworks/{artwork_id}",
    tag = "Artworks",
    params(("artwork_id" = String, Path, description = "Artwork id")),
    responses(
        (status = 200, description = "Artwork deleted", body = DeleteResponse),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
        (status = 404, description = "No artwork with this id", body = ErrorBody),
    )
)]
pub async fn delete_artwork(
    State(state): State<AppState>,
    Path(artwork_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let artwork = state
        .store
        .delete(&artwork_id)
        .await?
        .ok_or_else(|| not_found(artwork_id))?;

    tracing::info!(artwork_id = %artwork.id, "Artwork deleted");

    Ok(Json(DeleteResponse {
        message: format!("Artwork '{}' deleted successfully", artwork.title),
        deleted_id: artwork.id,
    }))
}

/// GET /types
///
/// Every distinct type label in use, sorted.
#[utoipa::path(
    get,
    path = "/types",
    tag = "Artworks",
    responses(
        (status = 200, description = "Distinct type labels", body = TypesResponse),
        (status = 401, description = "Invalid or missing API key", body = ErrorBody),
    )
)]
pub async fn list_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = state.store.distinct_types().await?;

    Ok(Json(TypesResponse {
        count: types.len(),
        types,
    }))
}
