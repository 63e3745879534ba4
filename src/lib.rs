//! Client SDK for the Plotchain real-estate tokenization marketplace.
//!
//! The crate wraps the backend REST API behind an authenticated client:
//! every request carries the stored bearer token, and a 401 triggers a
//! transparent refresh-token exchange followed by exactly one replay of
//! the failed request. When the exchange itself fails the session is
//! over: both credentials are cleared and the expiry is published on the
//! session channel for the embedding app to react to.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use plotchain_client::{ApiClient, ApiConfig, KeyringTokenStore};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ApiConfig::from_env()?;
//! let client = ApiClient::new(config, Arc::new(KeyringTokenStore))?;
//!
//! let properties = client.properties().list(&Default::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod services;

pub use api::{ApiClient, ApiError, RequestDescriptor};
pub use auth::{KeyringTokenStore, MemoryTokenStore, SessionState, TokenStore};
pub use config::ApiConfig;
