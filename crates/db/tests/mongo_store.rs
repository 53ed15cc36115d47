//! Tests for [`MongoArtworkStore`] against a live MongoDB server.
//!
//! Ignored by default. Run with a reachable server:
//!
//! ```text
//! MONGODB_URI=mongodb://localhost:27017 cargo test -p artworks-db -- --ignored
//! ```
//!
//! Each test uses its own uniquely-named collection and drops it afterwards.

use artworks_core::artwork::generate_artwork_id;
use artworks_db::models::artwork::{Artwork, ArtworkListParams, UpdateArtwork};
use artworks_db::{ArtworkStore, MongoArtworkStore};

const TEST_DATABASE: &str = "artworks_test";

async fn test_store() -> (MongoArtworkStore, mongodb::Collection<Artwork>) {
    let uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
    let client = mongodb::Client::with_uri_str(&uri).await.unwrap();
    let database = client.database(TEST_DATABASE);
    let name = format!("artworks_{}", generate_artwork_id());

    let store = MongoArtworkStore::new(database.clone(), &name);
    store.ensure_indexes().await.unwrap();
    (store, database.collection(&name))
}

fn artwork(id: &str, types: &[&str], price: f64, year: i32) -> Artwork {
    Artwork {
        id: id.to_string(),
        title: format!("Artwork {id}"),
        description: "test piece".to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        price,
        dimensions: "20x30cm".to_string(),
        year,
        available: true,
        image_url: String::new(),
    }
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn filters_match_in_memory_semantics() {
    let (store, collection) = test_store().await;
    store
        .insert_many(&[
            artwork("m1", &["Watercolor"], 100.0, 2020),
            artwork("m2", &["watercolors"], 200.0, 2021),
            artwork("m3", &["oil"], 300.0, 2021),
            artwork("m4", &["featured\n"], 400.0, 2022),
        ])
        .await
        .unwrap();

    let by_type = ArtworkListParams {
        type_label: Some("watercolor".into()),
        ..Default::default()
    };
    let result = store.list(&by_type).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "m1");

    // A stored label with a trailing newline is a different label.
    let by_featured = ArtworkListParams {
        type_label: Some("featured".into()),
        ..Default::default()
    };
    assert!(store.list(&by_featured).await.unwrap().is_empty());

    let by_year_and_price = ArtworkListParams {
        year: Some(2021),
        max_price: Some(250.0),
        ..Default::default()
    };
    let result = store.list(&by_year_and_price).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "m2");

    assert_eq!(
        store.distinct_types().await.unwrap(),
        ["Watercolor", "featured\n", "oil", "watercolors"]
    );

    collection.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn crud_round_trip_and_unique_id() {
    let (store, collection) = test_store().await;
    let original = artwork("c1", &["featured"], 450.0, 2022);

    store.health_check().await.unwrap();
    store.insert(&original).await.unwrap();
    assert_eq!(store.find_by_id("c1").await.unwrap(), Some(original.clone()));

    let duplicate = store.insert(&original).await.unwrap_err();
    assert!(duplicate.is_duplicate_key());

    let changes = UpdateArtwork {
        title: Some("Renamed".into()),
        ..Default::default()
    };
    let updated = store.update("c1", &changes).await.unwrap().unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.price, 450.0);

    let removed = store.delete("c1").await.unwrap().unwrap();
    assert_eq!(removed.title, "Renamed");
    assert!(store.find_by_id("c1").await.unwrap().is_none());
    assert!(store.delete("c1").await.unwrap().is_none());

    collection.drop().await.unwrap();
}
