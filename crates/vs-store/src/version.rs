use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use vs_auth::Transport;

/// Last client version known to be accepted by the storefront
pub const FALLBACK_CLIENT_VERSION: &str = "release-12.02-shipping-9-4226954";

/// Where a [`ClientVersion`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Override,
    Live,
    Fallback,
}

/// Value of the `X-Riot-ClientVersion` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientVersion {
    pub value: String,
    pub source: VersionSource,
}

impl ClientVersion {
    pub fn new(value: impl Into<String>, source: VersionSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_CLIENT_VERSION, VersionSource::Fallback)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Deserialize)]
struct VersionApiResponse {
    data: Option<VersionData>,
}

#[derive(Deserialize)]
struct VersionData {
    #[serde(rename = "riotClientVersion")]
    riot_client_version: Option<String>,
}

/// Pick the client version: override, then live lookup, then the fallback.
///
/// Never fails. Anything that goes wrong during the lookup only lands in the
/// log and yields [`FALLBACK_CLIENT_VERSION`].
#[instrument(skip(transport))]
pub async fn resolve_client_version(
    transport: &Transport,
    version_url: &str,
    timeout: Duration,
    override_version: Option<&str>,
) -> ClientVersion {
    if let Some(version) = override_version.map(str::trim).filter(|v| !v.is_empty()) {
        debug!("Using client version override {}", version);
        return ClientVersion::new(version, VersionSource::Override);
    }

    match fetch_live_version(transport, version_url, timeout).await {
        Some(version) => {
            debug!("Using live client version {}", version);
            ClientVersion::new(version, VersionSource::Live)
        }
        None => {
            warn!(
                "Client version lookup unavailable, falling back to {}",
                FALLBACK_CLIENT_VERSION
            );
            ClientVersion::fallback()
        }
    }
}

async fn fetch_live_version(
    transport: &Transport,
    version_url: &str,
    timeout: Duration,
) -> Option<String> {
    let response = match transport.http().get(version_url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            debug!("Version lookup request failed: {}", e);
            return None;
        }
    };

    if response.status() != StatusCode::OK {
        debug!("Version lookup answered {}", response.status());
        return None;
    }

    let body: VersionApiResponse = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            debug!("Version lookup returned an unreadable body: {}", e);
            return None;
        }
    };

    body.data
        .and_then(|data| data.riot_client_version)
        .filter(|version| !version.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vs_auth::VsAuthConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> Transport {
        Transport::new(&VsAuthConfig::riot()).unwrap()
    }

    async fn mount_version(server: &MockServer, response: ResponseTemplate, hits: u64) {
        Mock::given(method("GET"))
            .and(path("/v1/version"))
            .respond_with(response)
            .expect(hits)
            .mount(server)
            .await;
    }

    fn version_url(server: &MockServer) -> String {
        format!("{}/v1/version", server.uri())
    }

    #[tokio::test]
    async fn test_override_skips_lookup() {
        let server = MockServer::start().await;
        mount_version(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"riotClientVersion": "release-live"}})),
            0,
        )
        .await;

        let version = resolve_client_version(
            &transport(),
            &version_url(&server),
            Duration::from_secs(5),
            Some("custom-version"),
        )
        .await;
        assert_eq!(version, ClientVersion::new("custom-version", VersionSource::Override));
    }

    #[tokio::test]
    async fn test_blank_override_is_ignored() {
        let server = MockServer::start().await;
        mount_version(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": 200, "data": {"riotClientVersion": "release-live"}})),
            1,
        )
        .await;

        let version = resolve_client_version(
            &transport(),
            &version_url(&server),
            Duration::from_secs(5),
            Some("   "),
        )
        .await;
        assert_eq!(version, ClientVersion::new("release-live", VersionSource::Live));
    }

    #[tokio::test]
    async fn test_non_200_falls_back() {
        let server = MockServer::start().await;
        mount_version(&server, ResponseTemplate::new(503), 1).await;

        let version =
            resolve_client_version(&transport(), &version_url(&server), Duration::from_secs(5), None)
                .await;
        assert_eq!(version, ClientVersion::fallback());
    }

    #[tokio::test]
    async fn test_missing_or_empty_field_falls_back() {
        for body in [
            json!({"data": {}}),
            json!({"data": {"riotClientVersion": ""}}),
            json!({"status": 404}),
        ] {
            let server = MockServer::start().await;
            mount_version(&server, ResponseTemplate::new(200).set_body_json(body), 1).await;

            let version = resolve_client_version(
                &transport(),
                &version_url(&server),
                Duration::from_secs(5),
                None,
            )
            .await;
            assert_eq!(version.source, VersionSource::Fallback);
            assert_eq!(version.as_str(), FALLBACK_CLIENT_VERSION);
        }
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let server = MockServer::start().await;
        mount_version(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"riotClientVersion": "too-late"}}))
                .set_delay(Duration::from_secs(2)),
            1,
        )
        .await;

        let version = resolve_client_version(
            &transport(),
            &version_url(&server),
            Duration::from_millis(100),
            None,
        )
        .await;
        assert_eq!(version, ClientVersion::fallback());
    }

    #[tokio::test]
    async fn test_unreachable_host_falls_back() {
        let version = resolve_client_version(
            &transport(),
            "http://127.0.0.1:9/v1/version",
            Duration::from_secs(1),
            None,
        )
        .await;
        assert_eq!(version, ClientVersion::fallback());
    }
}
