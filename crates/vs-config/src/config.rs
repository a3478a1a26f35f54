use serde::Deserialize;
use vs_auth::SessionCookie;

/// Contents of `config.toml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub ssid: Option<SessionCookie>,
    pub proxy: Option<String>,
    pub client_version: Option<String>,
    pub shard: Option<String>,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}
