use std::time::Duration;

/// Shard used when none is configured
pub const DEFAULT_SHARD: &str = "ap";

/// Public version lookup (valorant-api.com)
pub const VERSION_URL: &str = "https://valorant-api.com/v1/version";

/// Upper bound for the best-effort version lookup
pub const VERSION_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Reduce a shard or cluster name to the shard prefix
///
/// "ap1" -> "ap", "NA1" -> "na", "eu3" -> "eu", "kr" -> "kr"
pub fn normalize_shard(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .to_ascii_lowercase()
}

/// Configuration for StoreClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base of the player data service, e.g. `https://pd.ap.a.pvp.net`
    pub storefront_base: String,

    pub version_url: String,

    pub version_timeout: Duration,
}

impl StoreConfig {
    /// Production endpoints for a shard
    pub fn riot(shard: &str) -> Self {
        let shard = match normalize_shard(shard) {
            s if s.is_empty() => DEFAULT_SHARD.to_string(),
            s => s,
        };
        Self {
            storefront_base: format!("https://pd.{}.a.pvp.net", shard),
            version_url: VERSION_URL.to_string(),
            version_timeout: VERSION_LOOKUP_TIMEOUT,
        }
    }

    /// Point both services at the same base URL, keeping the production paths.
    ///
    /// Used against local mock servers.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            storefront_base: base.to_string(),
            version_url: format!("{}/v1/version", base),
            version_timeout: VERSION_LOOKUP_TIMEOUT,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::riot(DEFAULT_SHARD)
    }
}
