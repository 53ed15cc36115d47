pub mod artwork;
pub mod error;
pub mod types;
