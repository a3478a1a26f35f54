use std::fmt;

use thiserror::Error;
use vs_auth::VsAuthError;
use vs_config::ConfigError;
use vs_store::StoreError;

/// Anything that ends a run without a storefront
#[derive(Debug, Error)]
pub enum Failure {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] VsAuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Configuration,
    Handshake,
    Downstream,
    Proxy,
    Network,
    StorefrontExhausted,
}

impl FailureClass {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Configuration => 2,
            Self::Handshake => 3,
            Self::Downstream => 4,
            Self::Proxy => 5,
            Self::Network => 6,
            Self::StorefrontExhausted => 7,
        }
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Configuration => "configuration error",
            Self::Handshake => "authentication failed",
            Self::Downstream => "account lookup failed",
            Self::Proxy => "proxy connection failed, check the PROXY setting",
            Self::Network => "network error",
            Self::StorefrontExhausted => "storefront unavailable",
        })
    }
}

fn classify_auth(error: &VsAuthError) -> FailureClass {
    match error {
        VsAuthError::AuthFailed { .. } | VsAuthError::AccessTokenNotFound => FailureClass::Handshake,
        VsAuthError::Http { .. } | VsAuthError::InvalidResponse { .. } => FailureClass::Downstream,
        VsAuthError::ProxyUnreachable { .. } => FailureClass::Proxy,
        VsAuthError::InvalidProxy { .. } | VsAuthError::UrlParse(_) => FailureClass::Configuration,
        VsAuthError::Network(_) => FailureClass::Network,
    }
}

impl Failure {
    pub fn class(&self) -> FailureClass {
        match self {
            Self::Config(_) => FailureClass::Configuration,
            Self::Auth(e) | Self::Store(StoreError::Transport(e)) => classify_auth(e),
            Self::Store(StoreError::StorefrontFailed) => FailureClass::StorefrontExhausted,
        }
    }

    /// Single-line description for the terminal
    pub fn message(&self) -> String {
        let detail = self.to_string().replace(['\r', '\n'], " ");
        format!("{}: {}", self.class(), detail)
    }

    pub fn exit_code(&self) -> i32 {
        self.class().exit_code()
    }
}
