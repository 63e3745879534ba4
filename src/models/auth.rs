use serde::{Deserialize, Serialize};

/// Server-issued nonce the wallet signs to prove address ownership.
#[derive(Debug, Clone, Deserialize)]
pub struct NonceResponse {
    pub nonce: String,
    pub wallet_address: Option<String>,
}

/// Wallet-signature login request.
#[derive(Debug, Clone, Serialize)]
pub struct WalletConnectRequest {
    pub wallet_address: String,
    pub signature: String,
    pub nonce: String,
}

/// Credential pair issued on successful wallet authentication.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Profile snapshot some backends attach to the login response;
    /// passed through untouched.
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}
