//! VALORANT storefront retrieval
//!
//! Given the credentials produced by `vs-auth`, this crate picks the client
//! version to present and fetches the raw storefront document, walking the
//! known endpoint variants until one answers.

pub mod client;
pub mod config;
pub mod errors;
pub mod platform;
pub mod storefront;
pub mod version;

pub use client::StoreClient;
pub use config::{normalize_shard, StoreConfig, DEFAULT_SHARD};
pub use errors::{Result, StoreError};
pub use storefront::{StorefrontMethod, StorefrontVariant, STOREFRONT_VARIANTS};
pub use version::{ClientVersion, VersionSource, FALLBACK_CLIENT_VERSION};
