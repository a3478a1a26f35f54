use reqwest::header::LOCATION;
use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::{VsAuthConfig, SSID_COOKIE};
use crate::errors::{Result, VsAuthError};
use crate::models::{AuthorizationRequest, EntitlementsResponse, UserInfoResponse};
use crate::secret::SessionCookie;
use crate::session::{AccessToken, AccountId, AuthSession, EntitlementToken};
use crate::transport::Transport;

/// Main client for Riot cookie authentication
#[derive(Debug, Clone)]
pub struct VsAuthClient {
    config: VsAuthConfig,
    transport: Transport,
}

impl VsAuthClient {
    /// Create a new authentication client
    pub fn new(config: VsAuthConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Transport shared with the storefront requests of the same run
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Exchange the session cookie for an access token
    ///
    /// The token arrives in the fragment of the redirect issued by
    /// `/authorize`, so that request is sent with redirects disabled.
    #[instrument(skip(self, cookie))]
    pub async fn authenticate(&self, cookie: &SessionCookie) -> Result<AccessToken> {
        let params = AuthorizationRequest::default();

        debug!("Seeding authorization state");
        self.transport
            .send(
                self.transport
                    .http()
                    .post(&self.config.endpoints.authorization)
                    .json(&params),
            )
            .await?;

        let authorize_url = Url::parse(&self.config.endpoints.authorize)?;
        self.transport
            .add_cookie(SSID_COOKIE, cookie.expose(), &authorize_url);

        debug!("Re-authorizing with session cookie");
        let response = self
            .transport
            .send(self.transport.no_redirect().get(authorize_url).query(&params))
            .await?;

        let status = response.status();
        if status != StatusCode::MOVED_PERMANENTLY && status != StatusCode::SEE_OTHER {
            warn!("Reauthorization answered {} instead of a redirect", status);
            return Err(VsAuthError::AuthFailed { status });
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        let token = extract_access_token(location).ok_or(VsAuthError::AccessTokenNotFound)?;
        debug!("Obtained access token ({} chars)", token.len());
        Ok(AccessToken::new(token))
    }

    /// Exchange the access token for an entitlements token
    #[instrument(skip(self, access_token))]
    pub async fn entitlements_token(&self, access_token: &AccessToken) -> Result<EntitlementToken> {
        debug!("Requesting entitlements token");
        let response = self
            .transport
            .send(
                self.transport
                    .http()
                    .post(&self.config.endpoints.entitlements)
                    .bearer_auth(access_token.as_str())
                    .json(&serde_json::json!({})),
            )
            .await?;

        let body: EntitlementsResponse = self.transport.read_json("entitlements", response).await?;
        Ok(EntitlementToken::new(body.entitlements_token))
    }

    /// Resolve the account PUUID
    #[instrument(skip(self, access_token))]
    pub async fn account_id(&self, access_token: &AccessToken) -> Result<AccountId> {
        debug!("Fetching user info");
        let response = self
            .transport
            .send(
                self.transport
                    .http()
                    .get(&self.config.endpoints.userinfo)
                    .bearer_auth(access_token.as_str()),
            )
            .await?;

        let body: UserInfoResponse = self.transport.read_json("userinfo", response).await?;
        Ok(AccountId::new(body.sub))
    }

    /// Run the complete flow from session cookie to storefront credentials
    #[instrument(skip(self, cookie))]
    pub async fn login(&self, cookie: &SessionCookie) -> Result<AuthSession> {
        // Step 1: Cookie reauthorization
        let access_token = self.authenticate(cookie).await?;

        // Step 2: Entitlements
        let entitlement_token = self.entitlements_token(&access_token).await?;

        // Step 3: Account identity
        let account_id = self.account_id(&access_token).await?;

        info!("Authenticated account {}", account_id);
        Ok(AuthSession {
            access_token,
            entitlement_token,
            account_id,
        })
    }
}

/// Pull the access token out of a redirect target
///
/// The token runs from `access_token=` up to the next `&` or the end of the
/// string. An empty value counts as missing.
pub fn extract_access_token(location: &str) -> Option<String> {
    const KEY: &str = "access_token=";
    let start = location.find(KEY)? + KEY.len();
    let rest = &location[start..];
    let token = rest.split('&').next().unwrap_or_default();
    (!token.is_empty()).then(|| token.to_string())
}
