/// Artwork identifiers are short opaque strings, not storage-engine ids.
pub type ArtworkId = String;
