use serde_json::Value;
use vs_auth::{AuthSession, Transport};

use crate::config::StoreConfig;
use crate::errors::Result;
use crate::storefront::fetch_storefront;
use crate::version::{resolve_client_version, ClientVersion};

/// Storefront client over the transport of an authenticated run
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: StoreConfig,
    transport: Transport,
}

impl StoreClient {
    pub fn new(config: StoreConfig, transport: Transport) -> Self {
        Self { config, transport }
    }

    /// Resolve the version header; infallible
    pub async fn client_version(&self, override_version: Option<&str>) -> ClientVersion {
        resolve_client_version(
            &self.transport,
            &self.config.version_url,
            self.config.version_timeout,
            override_version,
        )
        .await
    }

    pub async fn storefront(
        &self,
        session: &AuthSession,
        client_version: &ClientVersion,
    ) -> Result<Value> {
        fetch_storefront(
            &self.transport,
            &self.config.storefront_base,
            session,
            client_version,
        )
        .await
    }
}
