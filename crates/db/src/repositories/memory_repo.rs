//! In-process artwork store with the same filter semantics as MongoDB.

use artworks_core::artwork::distinct_type_labels;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ArtworkStore;
use crate::models::artwork::{Artwork, ArtworkListParams, UpdateArtwork};
use crate::DbError;

/// Artwork store backed by a `Vec` behind an async lock.
///
/// Keeps insertion order, enforces unique ids like the MongoDB index does.
#[derive(Debug, Default)]
pub struct InMemoryArtworkStore {
    artworks: RwLock<Vec<Artwork>>,
}

impl InMemoryArtworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of artworks (e.g. test fixtures).
    pub fn with_artworks(artworks: Vec<Artwork>) -> Self {
        Self {
            artworks: RwLock::new(artworks),
        }
    }
}

#[async_trait]
impl ArtworkStore for InMemoryArtworkStore {
    async fn count_all(&self) -> Result<u64, DbError> {
        Ok(self.artworks.read().await.len() as u64)
    }

    async fn list(&self, params: &ArtworkListParams) -> Result<Vec<Artwork>, DbError> {
        let artworks = self.artworks.read().await;
        Ok(artworks
            .iter()
            .filter(|artwork| params.matches(artwork))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Artwork>, DbError> {
        let artworks = self.artworks.read().await;
        Ok(artworks.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, artwork: &Artwork) -> Result<(), DbError> {
        let mut artworks = self.artworks.write().await;
        if artworks.iter().any(|a| a.id == artwork.id) {
            return Err(DbError::DuplicateKey(artwork.id.clone()));
        }
        artworks.push(artwork.clone());
        Ok(())
    }

    async fn insert_many(&self, new_artworks: &[Artwork]) -> Result<usize, DbError> {
        let mut artworks = self.artworks.write().await;
        for (i, artwork) in new_artworks.iter().enumerate() {
            let clashes_existing = artworks.iter().any(|a| a.id == artwork.id);
            let clashes_batch = new_artworks[..i].iter().any(|a| a.id == artwork.id);
            if clashes_existing || clashes_batch {
                return Err(DbError::DuplicateKey(artwork.id.clone()));
            }
        }
        artworks.extend_from_slice(new_artworks);
        Ok(new_artworks.len())
    }

    async fn update(
        &self,
        id: &str,
        changes: &UpdateArtwork,
    ) -> Result<Option<Artwork>, DbError> {
        let mut artworks = self.artworks.write().await;
        Ok(artworks.iter_mut().find(|a| a.id == id).map(|artwork| {
            changes.apply_to(artwork);
            artwork.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<Artwork>, DbError> {
        let mut artworks = self.artworks.write().await;
        Ok(artworks
            .iter()
            .position(|a| a.id == id)
            .map(|index| artworks.remove(index)))
    }

    async fn distinct_types(&self) -> Result<Vec<String>, DbError> {
        let artworks = self.artworks.read().await;
        Ok(distinct_type_labels(
            artworks.iter().map(|a| a.types.as_slice()),
        ))
    }

    async fn health_check(&self) -> Result<(), DbError> {
        Ok(())
    }
}
