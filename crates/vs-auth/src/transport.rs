use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder, Proxy, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::VsAuthConfig;
use crate::errors::{Result, VsAuthError};

/// HTTP transport shared by every step of a run
///
/// Two clients sit over one cookie jar: `http` follows redirects as usual,
/// `no_redirect` hands back 3xx responses untouched so their `Location`
/// header can be inspected. Both carry the same user agent and proxy.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    no_redirect: Client,
    jar: Arc<Jar>,
    proxy: Option<String>,
}

impl Transport {
    pub fn new(config: &VsAuthConfig) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let http = Self::builder(config, &jar)?.build()?;
        let no_redirect = Self::builder(config, &jar)?
            .redirect(Policy::none())
            .build()?;

        let proxy = config.proxy.as_deref().map(redact_proxy);
        match &proxy {
            Some(p) => debug!("Transport routes through proxy {}", p),
            None => debug!("Transport uses direct connections"),
        }

        Ok(Self {
            http,
            no_redirect,
            jar,
            proxy,
        })
    }

    fn builder(config: &VsAuthConfig, jar: &Arc<Jar>) -> Result<ClientBuilder> {
        let builder = Client::builder()
            .connect_timeout(config.http_timeouts.connect)
            .timeout(config.http_timeouts.request)
            .user_agent(config.user_agent.as_str())
            .cookie_provider(Arc::clone(jar));

        match &config.proxy {
            Some(raw) => {
                let proxy = Proxy::all(raw.as_str()).map_err(|source| VsAuthError::InvalidProxy {
                    proxy: redact_proxy(raw),
                    source,
                })?;
                Ok(builder.proxy(proxy))
            }
            None => Ok(builder.no_proxy()),
        }
    }

    /// Client that follows redirects
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Client that never follows redirects
    pub fn no_redirect(&self) -> &Client {
        &self.no_redirect
    }

    /// Configured proxy with any password masked
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Store a cookie for the host of `url`
    pub fn add_cookie(&self, name: &str, value: &str, url: &Url) {
        debug!(
            "Injecting cookie '{}' ({} chars) for {}",
            name,
            value.len(),
            url.host_str().unwrap_or_default()
        );
        self.jar.add_cookie_str(&format!("{}={}; Path=/", name, value), url);
    }

    /// Send a request, classifying transport failures
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| self.classify(e))
    }

    /// Connection failures while a proxy is configured are reported as proxy failures
    pub fn classify(&self, error: reqwest::Error) -> VsAuthError {
        match &self.proxy {
            Some(proxy) if error.is_connect() => {
                warn!("Connection through proxy {} failed: {}", proxy, error);
                VsAuthError::ProxyUnreachable {
                    proxy: proxy.clone(),
                    source: error,
                }
            }
            _ => VsAuthError::Network(error),
        }
    }

    /// Decode a JSON body, failing on any non-success status
    pub async fn read_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        response: Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VsAuthError::Http {
                endpoint,
                status,
                body_snippet: body.chars().take(200).collect(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        serde_json::from_slice(&body).map_err(|e| VsAuthError::InvalidResponse {
            endpoint,
            reason: e.to_string(),
        })
    }
}

fn redact_proxy(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.password().is_some() => {
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        _ => raw.to_string(),
    }
}
