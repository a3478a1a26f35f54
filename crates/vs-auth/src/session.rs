use std::fmt;

/// Short-lived bearer token from the reauthorization redirect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken([REDACTED; {} chars])", self.0.len())
    }
}

/// Entitlements JWT required by the `pd.*` backend services
#[derive(Clone, PartialEq, Eq)]
pub struct EntitlementToken(String);

impl EntitlementToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for EntitlementToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntitlementToken([REDACTED; {} chars])", self.0.len())
    }
}

/// Account PUUID (`sub` claim of `/userinfo`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the storefront needs from the authentication flow
///
/// Lives for a single run; nothing here is persisted or refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: AccessToken,
    pub entitlement_token: EntitlementToken,
    pub account_id: AccountId,
}
