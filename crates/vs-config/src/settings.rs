use std::time::Duration;

use vs_auth::{HttpTimeouts, SessionCookie};

use crate::config::FileConfig;
use crate::loader::ConfigError;

pub const ENV_SSID: &str = "SSID";
pub const ENV_PROXY: &str = "PROXY";
pub const ENV_CLIENT_VERSION: &str = "CLIENT_VERSION";
pub const ENV_SHARD: &str = "SHARD";

/// Values given on the command line; they win over every other source
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub proxy: Option<String>,
    pub client_version: Option<String>,
    pub shard: Option<String>,
}

/// Effective configuration of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ssid: Option<SessionCookie>,
    pub proxy: Option<String>,
    pub client_version: Option<String>,
    pub shard: Option<String>,
    pub http: HttpTimeouts,
}

impl Settings {
    /// Layer the sources: command line over environment over config file.
    ///
    /// Values are trimmed and blank values count as unset at every layer,
    /// so a blank environment variable does not hide the file's value.
    pub fn resolve<F>(file: FileConfig, env: F, overrides: Overrides) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ssid = env(ENV_SSID)
            .as_deref()
            .and_then(SessionCookie::parse)
            .or_else(|| file.ssid.as_ref().and_then(|s| SessionCookie::parse(s.expose())));

        let pick = |cli: Option<String>, key: &str, file_value: Option<String>| {
            non_blank(cli)
                .or_else(|| non_blank(env(key)))
                .or_else(|| non_blank(file_value))
        };

        let defaults = HttpTimeouts::default();
        let http = HttpTimeouts {
            connect: file
                .http
                .connect_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect),
            request: file
                .http
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request),
        };

        Self {
            ssid,
            proxy: pick(overrides.proxy, ENV_PROXY, file.proxy),
            client_version: pick(overrides.client_version, ENV_CLIENT_VERSION, file.client_version),
            shard: pick(overrides.shard, ENV_SHARD, file.shard),
            http,
        }
    }

    /// The session cookie, which every run requires
    pub fn credential(&self) -> Result<&SessionCookie, ConfigError> {
        self.ssid.as_ref().ok_or(ConfigError::MissingCredential)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
