//! Wallet authentication flow.
//!
//! Login is a nonce-sign-connect exchange: fetch a nonce for the wallet
//! address, have the wallet sign it, and trade the signature for a token
//! pair. The pair lands in the client's token store so every later request
//! picks it up.

use tracing::debug;

use crate::api::{ApiClient, ApiError};
use crate::auth::SessionState;
use crate::models::auth::{
    NonceResponse, RefreshRequest, RefreshResponse, TokenPair, WalletConnectRequest,
};

pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the signing nonce for a wallet address.
    pub async fn get_nonce(&self, wallet_address: &str) -> Result<NonceResponse, ApiError> {
        self.client
            .get_with_query(
                "/auth/nonce",
                vec![("wallet_address".to_string(), wallet_address.to_string())],
            )
            .await
    }

    /// Exchange a signed nonce for a session. The returned credential pair
    /// is persisted before this returns, so the session is live immediately.
    pub async fn connect_wallet(
        &self,
        request: &WalletConnectRequest,
    ) -> Result<TokenPair, ApiError> {
        let pair: TokenPair = self.client.post("/auth/wallet/connect", request).await?;

        self.client
            .token_store()
            .set_tokens(&pair.access_token, &pair.refresh_token)
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        self.client.publish_session_state(SessionState::Authenticated);
        debug!(wallet = %request.wallet_address, "Wallet session established");

        Ok(pair)
    }

    /// End the session. Local credentials are destroyed even if the backend
    /// call fails; a dead token on the server is preferable to a live one on
    /// a logged-out client.
    pub async fn disconnect_wallet(&self) -> Result<(), ApiError> {
        let result: Result<(), ApiError> = self.client.post_empty("/auth/wallet/disconnect").await;

        self.client
            .token_store()
            .clear()
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        self.client.publish_session_state(SessionState::Unauthenticated);
        debug!("Wallet session cleared");

        result
    }

    /// Explicit refresh-token exchange. The client performs this internally
    /// on 401; the method exists for apps that refresh proactively.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError> {
        self.client
            .post(
                "/auth/refresh",
                &RefreshRequest {
                    refresh_token: refresh_token.to_string(),
                },
            )
            .await
    }
}
