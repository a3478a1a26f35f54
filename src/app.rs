use serde_json::Value;
use tracing::{info, instrument};
use vs_auth::{Endpoints, VsAuthClient, VsAuthConfig};
use vs_config::Settings;
use vs_store::{StoreClient, StoreConfig, DEFAULT_SHARD};

use crate::failure::Failure;

/// Hosts a run talks to
#[derive(Debug, Clone)]
pub struct Targets {
    pub auth: Endpoints,
    pub store: StoreConfig,
}

impl Targets {
    pub fn riot(shard: Option<&str>) -> Self {
        Self {
            auth: Endpoints::riot(),
            store: StoreConfig::riot(shard.unwrap_or(DEFAULT_SHARD)),
        }
    }
}

/// One acquisition-and-fetch sequence; every step depends on the previous one
#[instrument(skip_all)]
pub async fn run(settings: &Settings, targets: Targets) -> Result<Value, Failure> {
    let cookie = settings.credential()?;

    let config = VsAuthConfig::riot()
        .with_endpoints(targets.auth)
        .with_proxy(settings.proxy.clone())
        .with_timeouts(settings.http.clone());
    let auth = VsAuthClient::new(config)?;
    if let Some(proxy) = auth.transport().proxy() {
        info!("Routing traffic through {}", proxy);
    }
    let session = auth.login(cookie).await?;

    let store = StoreClient::new(targets.store, auth.transport().clone());
    let version = store.client_version(settings.client_version.as_deref()).await;
    info!("Using client version {} ({:?})", version, version.source);

    Ok(store.storefront(&session, &version).await?)
}

/// Pretty-print with two-space indentation; non-ASCII is kept as is
pub fn render_document(document: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FailureClass;
    use serde_json::json;
    use vs_config::{FileConfig, Overrides};
    use wiremock::matchers::{any, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn targets(server: &MockServer) -> Targets {
        Targets {
            auth: Endpoints::with_base(&server.uri()),
            store: StoreConfig::with_base(&server.uri()),
        }
    }

    fn settings(ssid: Option<&str>, overrides: Overrides) -> Settings {
        let ssid = ssid.map(str::to_string);
        Settings::resolve(
            FileConfig::default(),
            move |key| if key == "SSID" { ssid.clone() } else { None },
            overrides,
        )
    }

    fn with_version(version: &str) -> Overrides {
        Overrides {
            client_version: Some(version.to_string()),
            ..Overrides::default()
        }
    }

    async fn mount_login(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/v1/authorization"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/authorize"))
            .respond_with(ResponseTemplate::new(303).insert_header(
                "location",
                "https://playvalorant.com/opt_in#access_token=T1&id_token=x&state=y",
            ))
            .expect(1)
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/token/v1"))
            .and(header("authorization", "Bearer T1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"entitlements_token": "E1"})),
            )
            .expect(1)
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .and(header("authorization", "Bearer T1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sub": "P1"})))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_end_to_end() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(method("GET"))
            .and(path("/v1/version"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/store/v2/storefront/P1"))
            .and(header("authorization", "Bearer T1"))
            .and(header("x-riot-entitlements-jwt", "E1"))
            .and(header("x-riot-clientversion", "V1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"SkinsPanelLayout": {}})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/store/v3/storefront/P1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/store/v1/storefront/P1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let document = run(&settings(Some("ssid"), with_version("V1")), targets(&server))
            .await
            .unwrap();
        assert_eq!(
            render_document(&document).unwrap(),
            "{\n  \"SkinsPanelLayout\": {}\n}"
        );
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_calls() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let failure = run(&settings(None, Overrides::default()), targets(&server))
            .await
            .unwrap_err();
        assert_eq!(failure.class(), FailureClass::Configuration);
    }

    #[tokio::test]
    async fn test_handshake_failure_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/authorization"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/authorize"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;
        Mock::given(path("/api/token/v1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let failure = run(&settings(Some("ssid"), Overrides::default()), targets(&server))
            .await
            .unwrap_err();
        assert_eq!(failure.class(), FailureClass::Handshake);
        assert!(failure.message().contains("400"));
    }

    #[tokio::test]
    async fn test_storefront_exhaustion() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        Mock::given(path("/store/v2/storefront/P1"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path("/store/v3/storefront/P1"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path("/store/v1/storefront/P1"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let failure = run(&settings(Some("ssid"), with_version("V1")), targets(&server))
            .await
            .unwrap_err();
        assert_eq!(failure.class(), FailureClass::StorefrontExhausted);
    }

    #[tokio::test]
    async fn test_unreachable_proxy_is_reported_as_proxy_failure() {
        let server = MockServer::start().await;
        let overrides = Overrides {
            proxy: Some("http://127.0.0.1:9".to_string()),
            ..Overrides::default()
        };

        let failure = run(&settings(Some("ssid"), overrides), targets(&server))
            .await
            .unwrap_err();
        assert_eq!(failure.class(), FailureClass::Proxy);
        assert!(failure.message().starts_with("proxy connection failed"));
    }

    #[test]
    fn test_render_keeps_non_ascii() {
        let rendered = render_document(&json!({"name": "ナイトマーケット"})).unwrap();
        assert_eq!(rendered, "{\n  \"name\": \"ナイトマーケット\"\n}");
    }
}
