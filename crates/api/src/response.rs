//! Response bodies for the artwork endpoints.

use artworks_db::models::artwork::Artwork;
use serde::Serialize;
use utoipa::ToSchema;

/// Body of `GET /artworks`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArtworksResponse {
    /// Number of artworks in the collection, ignoring filters.
    pub total: u64,
    /// Number of artworks returned after filtering.
    pub filtered_count: usize,
    pub artworks: Vec<Artwork>,
}

/// Body of `DELETE /artworks/{artwork_id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_id: String,
}

/// Body of `GET /types`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TypesResponse {
    pub types: Vec<String>,
    pub count: usize,
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable code, e.g. `NOT_FOUND`.
    pub code: String,
}
