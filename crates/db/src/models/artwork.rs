//! Artwork document model and request DTOs.

use artworks_core::artwork::{has_type_label, price_in_range};
use artworks_core::types::ArtworkId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity (stored document)
// ---------------------------------------------------------------------------

/// An artwork listing as stored in the `artworks` collection.
///
/// The storage engine's `_id` is never part of this struct; it is dropped on
/// deserialization so it cannot leak into responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Artwork {
    #[schema(value_type = String, example = "a1b2c3d4")]
    pub id: ArtworkId,
    pub title: String,
    pub description: String,
    pub types: Vec<String>,
    pub price: f64,
    pub dimensions: String,
    pub year: i32,
    pub available: bool,
    pub image_url: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

fn default_available() -> bool {
    true
}

/// DTO for creating an artwork. The id is always generated server-side.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateArtwork {
    pub title: String,
    pub description: String,
    pub types: Vec<String>,
    #[validate(range(min = 0.0))]
    #[schema(minimum = 0.0)]
    pub price: f64,
    pub dimensions: String,
    pub year: i32,
    #[serde(default = "default_available")]
    #[schema(default = true)]
    pub available: bool,
    #[serde(default)]
    pub image_url: String,
}

impl CreateArtwork {
    /// Attach a freshly generated id, producing the document to insert.
    pub fn into_artwork(self, id: ArtworkId) -> Artwork {
        Artwork {
            id,
            title: self.title,
            description: self.description,
            types: self.types,
            price: self.price,
            dimensions: self.dimensions,
            year: self.year,
            available: self.available,
            image_url: self.image_url,
        }
    }
}

/// DTO for a partial update. Absent and `null` fields are both "not given".
///
/// Serializes only the given fields, which is exactly the `$set` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateArtwork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    #[schema(minimum = 0.0)]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl UpdateArtwork {
    /// True when no field was given.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.types.is_none()
            && self.price.is_none()
            && self.dimensions.is_none()
            && self.year.is_none()
            && self.available.is_none()
            && self.image_url.is_none()
    }

    /// Overwrite the given fields on `artwork`, leaving the rest untouched.
    pub fn apply_to(&self, artwork: &mut Artwork) {
        if let Some(title) = &self.title {
            artwork.title = title.clone();
        }
        if let Some(description) = &self.description {
            artwork.description = description.clone();
        }
        if let Some(types) = &self.types {
            artwork.types = types.clone();
        }
        if let Some(price) = self.price {
            artwork.price = price;
        }
        if let Some(dimensions) = &self.dimensions {
            artwork.dimensions = dimensions.clone();
        }
        if let Some(year) = self.year {
            artwork.year = year;
        }
        if let Some(available) = self.available {
            artwork.available = available;
        }
        if let Some(image_url) = &self.image_url {
            artwork.image_url = image_url.clone();
        }
    }
}

/// Query-string spellings accepted for a boolean flag, compared
/// case-insensitively.
const TRUE_FLAGS: [&str; 6] = ["1", "true", "t", "yes", "y", "on"];
const FALSE_FLAGS: [&str; 6] = ["0", "false", "f", "no", "n", "off"];

/// Parse an optional boolean flag from the query string, accepting the
/// spellings in [`TRUE_FLAGS`] and [`FALSE_FLAGS`].
fn deserialize_optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let lowered = raw.trim().to_ascii_lowercase();
    if TRUE_FLAGS.contains(&lowered.as_str()) {
        Ok(Some(true))
    } else if FALSE_FLAGS.contains(&lowered.as_str()) {
        Ok(Some(false))
    } else {
        Err(D::Error::custom(format!(
            "invalid boolean value `{raw}`, expected one of true/false, 1/0, yes/no, on/off"
        )))
    }
}

/// Query parameters for `GET /artworks`. Every filter is optional and they
/// combine with AND.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArtworkListParams {
    /// Type label, matched case-insensitively against each entry of `types`.
    #[serde(rename = "type")]
    pub type_label: Option<String>,
    /// Availability. Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`.
    #[serde(default, deserialize_with = "deserialize_optional_flag")]
    pub available: Option<bool>,
    /// Inclusive lower price bound.
    #[validate(range(min = 0.0))]
    #[param(minimum = 0.0)]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    #[validate(range(min = 0.0))]
    #[param(minimum = 0.0)]
    pub max_price: Option<f64>,
    /// Exact year.
    pub year: Option<i32>,
}

impl ArtworkListParams {
    /// The type filter, if one was given. An empty `type=` is ignored.
    pub fn type_filter(&self) -> Option<&str> {
        self.type_label.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether `artwork` satisfies every given filter.
    pub fn matches(&self, artwork: &Artwork) -> bool {
        self.type_filter()
            .is_none_or(|wanted| has_type_label(&artwork.types, wanted))
            && self.available.is_none_or(|a| artwork.available == a)
            && price_in_range(artwork.price, self.min_price, self.max_price)
            && self.year.is_none_or(|y| artwork.year == y)
    }
}
