//! OpenAPI document for the artwork routes, derived from the handler
//! annotations and DTO schemas.

use artworks_db::models::artwork::{Artwork, CreateArtwork, UpdateArtwork};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers::artworks;
use crate::middleware::api_key::API_KEY_HEADER;
use crate::response::{ArtworksResponse, DeleteResponse, ErrorBody, TypesResponse};

/// Name of the security scheme in `components.securitySchemes`.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Artworks API",
        description = "CRUD API for artwork listings with type, availability, price and year filters."
    ),
    paths(
        artworks::list_artworks,
        artworks::get_artwork,
        artworks::create_artwork,
        artworks::update_artwork,
        artworks::delete_artwork,
        artworks::list_types,
    ),
    components(schemas(
        Artwork,
        CreateArtwork,
        UpdateArtwork,
        ArtworksResponse,
        DeleteResponse,
        TypesResponse,
        ErrorBody,
    )),
    modifiers(&ApiKeyAddon),
    security(("ApiKey" = [])),
    tags((name = "Artworks", description = "Artwork listings"))
)]
pub struct ApiDoc;

/// Registers the `X-API-Key` header scheme referenced by `security`.
struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            API_KEY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
        );
    }
}
