//! Riot session-cookie authentication for the VALORANT storefront
//!
//! This crate turns a long-lived `ssid` session cookie into the short-lived
//! credentials the VALORANT backend expects, without any interactive login.
//!
//! # Authentication Flow
//!
//! The flow consists of several steps:
//!
//! 1. Seed authorization state (`POST /api/v1/authorization`)
//! 2. Inject the `ssid` cookie into the shared cookie jar
//! 3. Re-authorize (`GET /authorize`) without following the redirect
//! 4. Pull the access token out of the redirect `Location` fragment
//! 5. Exchange the access token for an entitlements token
//! 6. Resolve the account PUUID from `/userinfo`
//!
//! # Example
//!
//! ```no_run
//! use vs_auth::{SessionCookie, VsAuthClient, VsAuthConfig};
//!
//! #[tokio::main]
//! async fn main() -> vs_auth::Result<()> {
//!     let config = VsAuthConfig::riot().with_proxy(Some("http://127.0.0.1:8080".into()));
//!     let client = VsAuthClient::new(config)?;
//!
//!     let cookie = SessionCookie::new("eyJraWQiOiJz...");
//!     let session = client.login(&cookie).await?;
//!     println!("Logged in as: {}", session.account_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Important Notes
//!
//! - Access tokens live for about an hour and are never refreshed here
//! - Tokens and the session cookie are never logged
//! - All requests share one cookie jar; the reauthorization request uses a
//!   second client over the same jar with redirects disabled

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod secret;
pub mod session;
pub mod transport;

pub use client::{extract_access_token, VsAuthClient};
pub use config::{Endpoints, HttpTimeouts, VsAuthConfig};
pub use errors::{Result, VsAuthError};
pub use secret::SessionCookie;
pub use session::{AccessToken, AccountId, AuthSession, EntitlementToken};
pub use transport::Transport;

pub use reqwest::StatusCode;
