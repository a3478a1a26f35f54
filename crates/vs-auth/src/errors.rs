use reqwest::StatusCode;
use thiserror::Error;

/// Riot authentication error types
#[derive(Error, Debug)]
pub enum VsAuthError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not connect through proxy {proxy}: {source}")]
    ProxyUnreachable {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid proxy URL '{proxy}': {source}")]
    InvalidProxy {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Authentication failed (status: {status})")]
    AuthFailed { status: StatusCode },

    #[error("Access token not found in redirect location")]
    AccessTokenNotFound,

    #[error("HTTP error {status} from {endpoint}: {body_snippet}")]
    Http {
        endpoint: &'static str,
        status: StatusCode,
        body_snippet: String,
    },

    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse {
        endpoint: &'static str,
        reason: String,
    },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, VsAuthError>;
