use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};
use vs_auth::{AccountId, AuthSession, Transport};

use crate::errors::{Result, StoreError};
use crate::platform::client_platform;
use crate::version::ClientVersion;

pub const ENTITLEMENTS_HEADER: &str = "X-Riot-Entitlements-JWT";
pub const CLIENT_PLATFORM_HEADER: &str = "X-Riot-ClientPlatform";
pub const CLIENT_VERSION_HEADER: &str = "X-Riot-ClientVersion";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorefrontMethod {
    Get,
    /// Sent with an empty JSON object as body
    Post,
}

/// One way of asking for the same storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorefrontVariant {
    pub method: StorefrontMethod,
    pub version: &'static str,
}

impl StorefrontVariant {
    pub fn url(&self, base: &str, account_id: &AccountId) -> String {
        format!(
            "{}/store/{}/storefront/{}",
            base.trim_end_matches('/'),
            self.version,
            account_id
        )
    }
}

/// Attempt order; the first 200 wins
pub const STOREFRONT_VARIANTS: [StorefrontVariant; 3] = [
    StorefrontVariant {
        method: StorefrontMethod::Get,
        version: "v2",
    },
    StorefrontVariant {
        method: StorefrontMethod::Post,
        version: "v3",
    },
    StorefrontVariant {
        method: StorefrontMethod::Get,
        version: "v1",
    },
];

/// Fetch the raw storefront document
///
/// Non-200 answers move on to the next variant. Transport failures abort.
#[instrument(skip(transport, session, client_version), fields(account = %session.account_id))]
pub async fn fetch_storefront(
    transport: &Transport,
    storefront_base: &str,
    session: &AuthSession,
    client_version: &ClientVersion,
) -> Result<Value> {
    let platform = client_platform();

    for variant in STOREFRONT_VARIANTS {
        let url = variant.url(storefront_base, &session.account_id);
        let request = match variant.method {
            StorefrontMethod::Get => transport.http().get(&url),
            StorefrontMethod::Post => transport.http().post(&url).json(&json!({})),
        };
        let request = request
            .bearer_auth(session.access_token.as_str())
            .header(ENTITLEMENTS_HEADER, session.entitlement_token.as_str())
            .header(CLIENT_PLATFORM_HEADER, platform.as_str())
            .header(CLIENT_VERSION_HEADER, client_version.as_str());

        debug!("Trying {:?} storefront {}", variant.method, variant.version);
        let response = transport.send(request).await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("Storefront {} answered {}", variant.version, status);
            continue;
        }

        match response.json::<Value>().await {
            Ok(document) => {
                info!("Storefront retrieved via {}", variant.version);
                return Ok(document);
            }
            Err(e) => warn!("Storefront {} returned unreadable JSON: {}", variant.version, e),
        }
    }

    Err(StoreError::StorefrontFailed)
}
