use serde::{Deserialize, Deserializer};
use zeroize::Zeroizing;

/// The long-lived `ssid` cookie value
///
/// Wiped from memory on drop; `Debug` never prints the value.
#[derive(Clone)]
pub struct SessionCookie {
    value: Zeroizing<String>,
}

impl SessionCookie {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Zeroizing::new(value.into()),
        }
    }

    /// Trimmed cookie, or `None` when nothing but whitespace was supplied
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self::new(trimmed))
    }

    /// Raw value, only for putting on the wire
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionCookie([REDACTED])")
    }
}

impl PartialEq for SessionCookie {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for SessionCookie {}

impl<'de> Deserialize<'de> for SessionCookie {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
