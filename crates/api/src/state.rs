use std::sync::Arc;

use artworks_db::{ArtworkStore, DbError, InMemoryArtworkStore, MongoArtworkStore};

use crate::config::{ServerConfig, StoreBackend, StoreConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Artwork collection.
    pub store: Arc<dyn ArtworkStore>,
    /// Server configuration (read by the API-key middleware).
    pub config: Arc<ServerConfig>,
}

/// Build the configured artwork store.
///
/// For MongoDB this connects, checks the server answers a ping and ensures
/// the unique id index.
pub async fn build_store(config: &StoreConfig) -> Result<Arc<dyn ArtworkStore>, DbError> {
    match config.backend {
        StoreBackend::MongoDb => {
            let store =
                MongoArtworkStore::connect(&config.mongodb_uri, &config.database, &config.collection)
                    .await?;
            store.health_check().await?;
            tracing::info!(
                database = %config.database,
                collection = %config.collection,
                "MongoDB health check passed"
            );
            store.ensure_indexes().await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory artwork store; data will not persist");
            Ok(Arc::new(InMemoryArtworkStore::new()))
        }
    }
}
