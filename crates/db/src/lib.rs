//! Storage layer for artwork listings.
//!
//! Models and DTOs live in [`models`], the [`ArtworkStore`] seam and its
//! MongoDB and in-memory implementations in [`repositories`], and startup
//! seeding in [`seed`].

use mongodb::error::{ErrorKind, WriteFailure};

pub mod models;
pub mod repositories;
pub mod seed;

pub use repositories::{ArtworkStore, InMemoryArtworkStore, MongoArtworkStore};

/// Server error code MongoDB reports for unique index violations.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Errors raised by artwork stores and seeding.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("BSON serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    #[error("Duplicate artwork id: {0}")]
    DuplicateKey(String),

    #[error("Failed to read seed data: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

impl DbError {
    /// Whether this error is a unique-index violation on the artwork id.
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            DbError::DuplicateKey(_) => true,
            DbError::Mongo(err) => match err.kind.as_ref() {
                ErrorKind::Write(WriteFailure::WriteError(write_err)) => {
                    write_err.code == DUPLICATE_KEY_CODE
                }
                ErrorKind::Command(command_err) => command_err.code == DUPLICATE_KEY_CODE,
                _ => false,
            },
            _ => false,
        }
    }
}
