//! MongoDB-backed artwork store.

use artworks_core::artwork::distinct_type_labels;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, Database, IndexModel};

use super::ArtworkStore;
use crate::models::artwork::{Artwork, ArtworkListParams, UpdateArtwork};
use crate::DbError;

/// Name of the unique index on the artwork `id` field.
const ID_INDEX_NAME: &str = "uq_artworks_id";

/// Artwork store over a single MongoDB collection.
#[derive(Clone)]
pub struct MongoArtworkStore {
    database: Database,
    collection: Collection<Artwork>,
}

impl MongoArtworkStore {
    /// Connect to `uri` and bind to `database.collection`.
    ///
    /// The driver owns the connection pool; this does not perform any I/O
    /// beyond parsing the URI and resolving SRV records.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, DbError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(client.database(database), collection))
    }

    pub fn new(database: Database, collection: &str) -> Self {
        let collection = database.collection::<Artwork>(collection);
        Self {
            database,
            collection,
        }
    }

    /// Create the unique index on `id` if it does not exist yet.
    pub async fn ensure_indexes(&self) -> Result<(), DbError> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(ID_INDEX_NAME.to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(index).await?;
        tracing::debug!(index = ID_INDEX_NAME, "Artwork indexes ensured");
        Ok(())
    }
}

/// Build the MongoDB query document for the given list filters.
///
/// The type label is escaped so it matches literally, anchored with `\A` and
/// `\z` so it matches a whole label, and compared case-insensitively. `^` and
/// `$` would also accept a label with a trailing newline.
pub fn build_filter(params: &ArtworkListParams) -> Document {
    let mut filter = Document::new();

    if let Some(type_label) = params.type_filter() {
        filter.insert(
            "types",
            doc! {
                "$regex": format!(r"\A{}\z", regex::escape(type_label)),
                "$options": "i",
            },
        );
    }

    if let Some(available) = params.available {
        filter.insert("available", available);
    }

    let mut price = Document::new();
    if let Some(min_price) = params.min_price {
        price.insert("$gte", min_price);
    }
    if let Some(max_price) = params.max_price {
        price.insert("$lte", max_price);
    }
    if !price.is_empty() {
        filter.insert("price", price);
    }

    if let Some(year) = params.year {
        filter.insert("year", year);
    }

    filter
}

#[async_trait]
impl ArtworkStore for MongoArtworkStore {
    async fn count_all(&self) -> Result<u64, DbError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn list(&self, params: &ArtworkListParams) -> Result<Vec<Artwork>, DbError> {
        let filter = build_filter(params);
        tracing::debug!(?filter, "Listing artworks");
        let cursor = self.collection.find(filter).await?;
        let artworks: Vec<Artwork> = cursor.try_collect().await?;
        Ok(artworks)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Artwork>, DbError> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn insert(&self, artwork: &Artwork) -> Result<(), DbError> {
        self.collection.insert_one(artwork).await?;
        Ok(())
    }

    async fn insert_many(&self, artworks: &[Artwork]) -> Result<usize, DbError> {
        if artworks.is_empty() {
            return Ok(0);
        }
        let result = self.collection.insert_many(artworks).await?;
        Ok(result.inserted_ids.len())
    }

    async fn update(
        &self,
        id: &str,
        changes: &UpdateArtwork,
    ) -> Result<Option<Artwork>, DbError> {
        let set = mongodb::bson::to_document(changes)?;
        Ok(self
            .collection
            .find_one_and_update(doc! { "id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete(&self, id: &str) -> Result<Option<Artwork>, DbError> {
        Ok(self.collection.find_one_and_delete(doc! { "id": id }).await?)
    }

    async fn distinct_types(&self) -> Result<Vec<String>, DbError> {
        let values = self.collection.distinct("types", doc! {}).await?;
        let labels: Vec<String> = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(label) => Some(label),
                _ => None,
            })
            .collect();
        Ok(distinct_type_labels([labels.as_slice()]))
    }

    async fn health_check(&self) -> Result<(), DbError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_params_builds_empty_filter() {
        assert_eq!(build_filter(&ArtworkListParams::default()), doc! {});
    }

    #[test]
    fn type_filter_is_anchored_escaped_and_case_insensitive() {
        let params = ArtworkListParams {
            type_label: Some("mixed.media+".into()),
            ..Default::default()
        };

        assert_eq!(
            build_filter(&params),
            doc! { "types": { "$regex": r"\Amixed\.media\+\z", "$options": "i" } }
        );
    }

    #[test]
    fn type_filter_anchors_exclude_trailing_newline() {
        let params = ArtworkListParams {
            type_label: Some("oil".into()),
            ..Default::default()
        };

        let filter = build_filter(&params);
        let pattern = filter
            .get_document("types")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert!(pattern.starts_with(r"\A"));
        assert!(pattern.ends_with(r"\z"));
        assert!(!pattern.contains('$'));
    }

    #[test]
    fn price_bounds_share_one_clause() {
        let params = ArtworkListParams {
            min_price: Some(100.0),
            max_price: Some(500.0),
            ..Default::default()
        };

        assert_eq!(
            build_filter(&params),
            doc! { "price": { "$gte": 100.0, "$lte": 500.0 } }
        );
    }

    #[test]
    fn equality_filters() {
        let params = ArtworkListParams {
            available: Some(false),
            year: Some(2019),
            ..Default::default()
        };

        assert_eq!(
            build_filter(&params),
            doc! { "available": false, "year": 2019 }
        );
    }
}
