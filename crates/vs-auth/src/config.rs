use std::time::Duration;

/// Riot authentication endpoints
pub mod endpoints {
    pub const AUTHORIZATION: &str = "https://auth.riotgames.com/api/v1/authorization";
    pub const AUTHORIZE: &str = "https://auth.riotgames.com/authorize";
    pub const ENTITLEMENTS: &str = "https://entitlements.auth.riotgames.com/api/token/v1";
    pub const USERINFO: &str = "https://auth.riotgames.com/userinfo";
}

/// Parameters of the web client used for the cookie reauthorization
pub mod web_client {
    pub const CLIENT_ID: &str = "play-valorant-web-prod";
    pub const NONCE: &str = "1";
    pub const REDIRECT_URI: &str = "https://playvalorant.com/opt_in";
    pub const RESPONSE_TYPE: &str = "token id_token";
    pub const SCOPE: &str = "account openid";
}

/// Name of the session cookie that substitutes for an interactive login
pub const SSID_COOKIE: &str = "ssid";

/// User agent of the desktop Riot Client
pub const RIOT_CLIENT_USER_AGENT: &str =
    "RiotClient/70.0.0.4888690.4873386 rso-auth (Windows;10;;Professional, x64)";

/// Endpoint set used by [`crate::VsAuthClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub authorization: String,
    pub authorize: String,
    pub entitlements: String,
    pub userinfo: String,
}

impl Endpoints {
    /// Production Riot endpoints
    pub fn riot() -> Self {
        Self {
            authorization: endpoints::AUTHORIZATION.to_string(),
            authorize: endpoints::AUTHORIZE.to_string(),
            entitlements: endpoints::ENTITLEMENTS.to_string(),
            userinfo: endpoints::USERINFO.to_string(),
        }
    }

    /// Point every endpoint at the same base URL, keeping the production paths.
    ///
    /// Used against local mock servers.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            authorization: format!("{base}/api/v1/authorization"),
            authorize: format!("{base}/authorize"),
            entitlements: format!("{base}/api/token/v1"),
            userinfo: format!("{base}/userinfo"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::riot()
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(15),
            request: Duration::from_secs(30),
        }
    }
}

/// Configuration for VsAuthClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VsAuthConfig {
    pub endpoints: Endpoints,

    /// HTTP client timeouts
    pub http_timeouts: HttpTimeouts,

    /// Identifying user agent sent with every request
    pub user_agent: String,

    /// Forwarding proxy for both HTTP and HTTPS traffic
    pub proxy: Option<String>,
}

impl VsAuthConfig {
    /// Production endpoints, Riot Client user agent, no proxy
    pub fn riot() -> Self {
        Self {
            endpoints: Endpoints::riot(),
            http_timeouts: HttpTimeouts::default(),
            user_agent: RIOT_CLIENT_USER_AGENT.to_string(),
            proxy: None,
        }
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeouts(mut self, http_timeouts: HttpTimeouts) -> Self {
        self.http_timeouts = http_timeouts;
        self
    }
}

impl Default for VsAuthConfig {
    fn default() -> Self {
        Self::riot()
    }
}
