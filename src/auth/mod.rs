//! Authentication support: credential storage and session lifecycle.
//!
//! This module provides:
//! - `TokenStore`: injected storage for the access/refresh token pair,
//!   with keyring-backed and in-memory implementations
//! - `SessionEvents` / `SessionState`: observable session transitions,
//!   including forced logout on terminal refresh failure

pub mod session;
pub mod store;

pub use session::{SessionEvents, SessionState};
pub use store::{KeyringTokenStore, MemoryTokenStore, TokenStore};
