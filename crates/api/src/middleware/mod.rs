//! Request middleware.
//!
//! - [`api_key::require_api_key`] -- Static `X-API-Key` check.

pub mod api_key;
