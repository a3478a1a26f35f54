use thiserror::Error;
use vs_auth::VsAuthError;

/// Storefront error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storefront retrieval failed on every endpoint")]
    StorefrontFailed,

    #[error(transparent)]
    Transport(#[from] VsAuthError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
