//! Session credential storage.
//!
//! Tokens live behind the `TokenStore` trait so the client never touches
//! ambient global state: the keyring-backed store persists across runs in
//! the OS keychain, while `MemoryTokenStore` backs tests and short-lived
//! tools.

use std::sync::RwLock;

use anyhow::{Context, Result};
use keyring::Entry;

/// Keychain service name for persistent token entries
const SERVICE_NAME: &str = "plotchain";

/// Fixed entry name for the short-lived access token
const ACCESS_TOKEN_KEY: &str = "access_token";

/// Fixed entry name for the long-lived refresh token
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Storage for the session credential pair.
///
/// Reads return `None` both when no token is stored and when the backing
/// store is unavailable; the client treats either as "unauthenticated".
/// Writes report failure so a refresh never completes without its new
/// access token being persisted.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn set_access_token(&self, token: &str) -> Result<()>;
    fn set_tokens(&self, access: &str, refresh: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Token store backed by the OS keychain.
pub struct KeyringTokenStore;

impl KeyringTokenStore {
    fn entry(key: &str) -> Result<Entry> {
        Entry::new(SERVICE_NAME, key).context("Failed to create keyring entry")
    }

    fn get(key: &str) -> Option<String> {
        Self::entry(key).ok()?.get_password().ok()
    }

    fn set(key: &str, value: &str) -> Result<()> {
        Self::entry(key)?
            .set_password(value)
            .with_context(|| format!("Failed to store {} in keychain", key))
    }

    fn delete(key: &str) -> Result<()> {
        match Self::entry(key)?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {} from keychain", key)),
        }
    }
}

impl TokenStore for KeyringTokenStore {
    fn access_token(&self) -> Option<String> {
        Self::get(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        Self::get(REFRESH_TOKEN_KEY)
    }

    fn set_access_token(&self, token: &str) -> Result<()> {
        Self::set(ACCESS_TOKEN_KEY, token)
    }

    fn set_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        Self::set(ACCESS_TOKEN_KEY, access)?;
        Self::set(REFRESH_TOKEN_KEY, refresh)
    }

    fn clear(&self) -> Result<()> {
        Self::delete(ACCESS_TOKEN_KEY)?;
        Self::delete(REFRESH_TOKEN_KEY)
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<TokenPairState>,
}

#[derive(Default)]
struct TokenPairState {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a store pre-loaded with a credential pair.
    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        Self {
            tokens: RwLock::new(TokenPairState {
                access: Some(access.to_string()),
                refresh: Some(refresh.to_string()),
            }),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens.read().ok()?.access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.read().ok()?.refresh.clone()
    }

    fn set_access_token(&self, token: &str) -> Result<()> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| anyhow::anyhow!("Token store lock poisoned"))?;
        tokens.access = Some(token.to_string());
        Ok(())
    }

    fn set_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| anyhow::anyhow!("Token store lock poisoned"))?;
        tokens.access = Some(access.to_string());
        tokens.refresh = Some(refresh.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| anyhow::anyhow!("Token store lock poisoned"))?;
        tokens.access = None;
        tokens.refresh = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());

        store.set_tokens("A1", "R1").unwrap();
        assert_eq!(store.access_token().as_deref(), Some("A1"));
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));

        store.set_access_token("A2").unwrap();
        assert_eq!(store.access_token().as_deref(), Some("A2"));
        // Refresh token untouched by an access-only update
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));
    }

    #[test]
    fn test_memory_store_clear_removes_both() {
        let store = MemoryTokenStore::with_tokens("A1", "R1");
        store.clear().unwrap();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
