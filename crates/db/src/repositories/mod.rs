//! Artwork store seam and its implementations.
//!
//! Handlers only see [`ArtworkStore`]; the concrete store is picked at
//! startup ([`MongoArtworkStore`] in production, [`InMemoryArtworkStore`]
//! for tests and local runs without a database).

pub mod artwork_repo;
pub mod memory_repo;

use async_trait::async_trait;

use crate::models::artwork::{Artwork, ArtworkListParams, UpdateArtwork};
use crate::DbError;

pub use artwork_repo::MongoArtworkStore;
pub use memory_repo::InMemoryArtworkStore;

/// Operations the HTTP layer performs against the artwork collection.
///
/// Each call is a single store operation; there is no multi-document
/// transaction behind any of them.
#[async_trait]
pub trait ArtworkStore: Send + Sync {
    /// Total number of artworks, ignoring any filter.
    async fn count_all(&self) -> Result<u64, DbError>;

    /// All artworks matching every filter in `params`, in storage order.
    async fn list(&self, params: &ArtworkListParams) -> Result<Vec<Artwork>, DbError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Artwork>, DbError>;

    async fn insert(&self, artwork: &Artwork) -> Result<(), DbError>;

    /// Bulk insert, returning how many documents were written.
    async fn insert_many(&self, artworks: &[Artwork]) -> Result<usize, DbError>;

    /// Apply the given fields and return the updated artwork, or `None` if
    /// no artwork has this id.
    async fn update(&self, id: &str, changes: &UpdateArtwork)
        -> Result<Option<Artwork>, DbError>;

    /// Remove and return the artwork, or `None` if no artwork has this id.
    async fn delete(&self, id: &str) -> Result<Option<Artwork>, DbError>;

    /// Every distinct type label across the collection, sorted ascending.
    async fn distinct_types(&self) -> Result<Vec<String>, DbError>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> Result<(), DbError>;
}
