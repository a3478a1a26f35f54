use serde::{Deserialize, Serialize};

use crate::config::web_client;

/// Authorization parameters, sent as the JSON body of the seeding request
/// and as the query string of the reauthorization request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub client_id: &'static str,
    pub nonce: &'static str,
    pub redirect_uri: &'static str,
    pub response_type: &'static str,
    pub scope: &'static str,
}

impl Default for AuthorizationRequest {
    fn default() -> Self {
        Self {
            client_id: web_client::CLIENT_ID,
            nonce: web_client::NONCE,
            redirect_uri: web_client::REDIRECT_URI,
            response_type: web_client::RESPONSE_TYPE,
            scope: web_client::SCOPE,
        }
    }
}

/// Entitlements token response
#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementsResponse {
    pub entitlements_token: String,
}

/// `/userinfo` response; only the subject is used
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfoResponse {
    pub sub: String,
}
