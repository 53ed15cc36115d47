//! Startup seeding from a JSON fixture file.
//!
//! The file has the shape `{ "artworks": [ { ...artwork with id... } ] }`.
//! Seeding only happens when the store is empty.

use std::path::Path;

use serde::Deserialize;

use crate::models::artwork::Artwork;
use crate::repositories::ArtworkStore;
use crate::DbError;

#[derive(Debug, Deserialize)]
struct SeedFile {
    artworks: Vec<Artwork>,
}

/// Parse seed file contents.
pub fn parse_seed(raw: &str) -> Result<Vec<Artwork>, DbError> {
    let seed: SeedFile = serde_json::from_str(raw)?;
    Ok(seed.artworks)
}

/// Insert the artworks from `path` if the store holds no artworks yet.
///
/// Returns the number of artworks inserted. A missing file is not an error:
/// it is logged and nothing is inserted.
pub async fn seed_if_empty(store: &dyn ArtworkStore, path: &Path) -> Result<usize, DbError> {
    let existing = store.count_all().await?;
    if existing > 0 {
        tracing::debug!(existing, "Artwork store already populated, skipping seed");
        return Ok(0);
    }

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Seed data file not found, skipping seed");
            return Ok(0);
        }
        Err(err) => return Err(err.into()),
    };

    let artworks = parse_seed(&raw)?;
    if artworks.is_empty() {
        return Ok(0);
    }

    let inserted = store.insert_many(&artworks).await?;
    tracing::info!(inserted, path = %path.display(), "Seeded artwork store");
    Ok(inserted)
}
