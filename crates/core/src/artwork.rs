//! Artwork domain rules shared by every store implementation.
//!
//! Covers id generation, type-label matching and price bounds. Kept
//! free of storage concerns so the MongoDB and in-memory stores agree on
//! the same semantics.

use std::collections::BTreeSet;

use crate::types::ArtworkId;

/// Number of hex characters kept from a UUID when minting an artwork id.
pub const ARTWORK_ID_LEN: usize = 8;

/// Entity name used in not-found errors.
pub const ARTWORK_ENTITY: &str = "Artwork";

/// Generate a fresh artwork id: the first [`ARTWORK_ID_LEN`] hex characters
/// of a random UUIDv4.
pub fn generate_artwork_id() -> ArtworkId {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(ARTWORK_ID_LEN);
    id
}

/// Whether `label` equals `wanted` ignoring case. Whole-label match only.
pub fn type_label_matches(label: &str, wanted: &str) -> bool {
    label == wanted || label.to_lowercase() == wanted.to_lowercase()
}

/// Whether any label in `types` matches `wanted`.
pub fn has_type_label(types: &[String], wanted: &str) -> bool {
    types.iter().any(|label| type_label_matches(label, wanted))
}

/// Collect every distinct label across all type lists, sorted ascending.
pub fn distinct_type_labels<'a, I>(type_lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    type_lists
        .into_iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Whether `price` lies within the optional inclusive bounds.
pub fn price_in_range(price: f64, min_price: Option<f64>, max_price: Option<f64>) -> bool {
    min_price.is_none_or(|min| price >= min) && max_price.is_none_or(|max| price <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn generated_ids_are_short_hex() {
        let id = generate_artwork_id();
        assert_eq!(id.len(), ARTWORK_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(generate_artwork_id(), generate_artwork_id());
    }

    #[test]
    fn type_match_ignores_case() {
        assert!(type_label_matches("Watercolor", "watercolor"));
        assert!(type_label_matches("mixed-media", "MIXED-MEDIA"));
    }

    #[test]
    fn type_match_is_whole_label() {
        assert!(!type_label_matches("watercolor", "water"));
        assert!(!type_label_matches("large-canvas", "canvas"));
    }

    #[test]
    fn has_type_label_checks_every_entry() {
        let types = labels(&["featured", "Watercolor"]);
        assert!(has_type_label(&types, "watercolor"));
        assert!(!has_type_label(&types, "oil"));
        assert!(!has_type_label(&[], "oil"));
    }

    #[test]
    fn distinct_labels_are_sorted_and_deduplicated() {
        let a = labels(&["watercolor", "featured"]);
        let b = labels(&["featured", "large-canvas"]);
        let c: Vec<String> = Vec::new();

        let result = distinct_type_labels([a.as_slice(), b.as_slice(), c.as_slice()]);
        assert_eq!(result, labels(&["featured", "large-canvas", "watercolor"]));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        assert!(price_in_range(100.0, Some(100.0), Some(100.0)));
        assert!(price_in_range(50.0, None, None));
        assert!(!price_in_range(99.99, Some(100.0), None));
        assert!(!price_in_range(200.01, None, Some(200.0)));
    }

    #[test]
    fn inverted_bounds_match_nothing() {
        assert!(!price_in_range(150.0, Some(200.0), Some(100.0)));
    }
}
