pub mod artworks;
pub mod docs;
pub mod root;
