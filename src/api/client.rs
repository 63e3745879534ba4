//! API client for the Plotchain marketplace backend.
//!
//! Every request goes through the same send path: attach the stored bearer
//! token if one exists, dispatch, and on a 401 exchange the refresh token
//! for a new access token and replay the request exactly once. A failed
//! exchange is terminal for the session: both tokens are cleared and the
//! expiry is published on the session channel.

use std::sync::Arc;

use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::auth::{SessionEvents, SessionState, TokenStore};
use crate::config::ApiConfig;
use crate::models::auth::{RefreshRequest, RefreshResponse};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// An outbound request, captured before the first send so the recovery path
/// can replay it verbatim. Immutable once built.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to serialize body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Send-path state. The 401 recovery is a small state machine rather than
/// nested control flow so the single-retry invariant is structural: the only
/// route back to a dispatch after a 401 is through `AwaitingRefresh`, and
/// `Retrying` terminates unconditionally.
enum SendState {
    /// First dispatch with whatever token is currently stored.
    Sending,
    /// Got a 401; exchange the refresh token, remembering which access token
    /// the failed attempt used so concurrent refreshes coalesce.
    AwaitingRefresh { stale: Option<String> },
    /// Exactly one replay with the refreshed token.
    Retrying,
}

/// API client for the Plotchain backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    endpoint: String,
    store: Arc<dyn TokenStore>,
    session: Arc<SessionEvents>,
    refresh_gate: Arc<Mutex<()>>,
}

impl ApiClient {
    /// Create a new API client over the given config and token store.
    pub fn new(config: ApiConfig, store: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let initial = if store.access_token().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        };

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            store,
            session: Arc::new(SessionEvents::new(initial)),
            refresh_gate: Arc::new(Mutex::new(())),
        })
    }

    /// Subscribe to session lifecycle transitions (forced logout included).
    pub fn session_events(&self) -> tokio::sync::watch::Receiver<SessionState> {
        self.session.subscribe()
    }

    pub(crate) fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub(crate) fn publish_session_state(&self, state: SessionState) {
        self.session.publish(state);
    }

    /// Dispatch a descriptor once, attaching the given bearer token if any.
    /// Requests without a token still transmit, just without the header.
    async fn dispatch(
        &self,
        desc: &RequestDescriptor,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.endpoint, desc.path);
        debug!(method = %desc.method, url = %url, authenticated = token.is_some(), "Dispatching request");

        let mut request = self.http.request(desc.method.clone(), &url);
        if !desc.query.is_empty() {
            request = request.query(&desc.query);
        }
        if let Some(ref body) = desc.body {
            request = request.json(body);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        Ok(request.send().await?)
    }

    /// Run a descriptor through the full send path, including 401 recovery.
    ///
    /// Returns the raw response for any status except the intercepted first
    /// 401; transport failures and non-401 statuses are the caller's to
    /// interpret.
    pub async fn execute(&self, desc: &RequestDescriptor) -> Result<Response, ApiError> {
        let mut state = SendState::Sending;

        loop {
            state = match state {
                SendState::Sending => {
                    let token = self.store.access_token();
                    let response = self.dispatch(desc, token.as_deref()).await?;
                    if response.status() == StatusCode::UNAUTHORIZED {
                        warn!(path = %desc.path, "Request rejected with 401, attempting token refresh");
                        SendState::AwaitingRefresh { stale: token }
                    } else {
                        return Ok(response);
                    }
                }
                SendState::AwaitingRefresh { stale } => {
                    self.refresh_access_token(stale.as_deref()).await?;
                    SendState::Retrying
                }
                SendState::Retrying => {
                    let token = self.store.access_token();
                    let response = self.dispatch(desc, token.as_deref()).await?;
                    if response.status() == StatusCode::UNAUTHORIZED {
                        // Second 401: the refreshed token was rejected too.
                        warn!(path = %desc.path, "Retried request rejected with 401, giving up");
                        return Err(ApiError::Unauthorized);
                    }
                    return Ok(response);
                }
            };
        }
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Concurrent callers serialize on the refresh gate; a caller that waited
    /// out another task's refresh sees a changed access token and skips its
    /// own exchange. Any failure here clears both tokens and publishes
    /// session expiry.
    async fn refresh_access_token(&self, stale: Option<&str>) -> Result<(), ApiError> {
        let _gate = self.refresh_gate.lock().await;

        // Another in-flight request may have refreshed while we waited.
        let current = self.store.access_token();
        if current.is_some() && current.as_deref() != stale {
            debug!("Access token already refreshed by a concurrent request");
            return Ok(());
        }

        let Some(refresh_token) = self.store.refresh_token() else {
            warn!("No refresh token stored, forcing logout");
            self.force_logout();
            return Err(ApiError::SessionExpired);
        };

        let url = format!("{}/auth/refresh", self.endpoint);
        let result = self
            .http
            .post(&url)
            .json(&RefreshRequest { refresh_token })
            .send()
            .await;

        let response = match result {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!(status = %response.status(), "Refresh endpoint rejected the exchange, forcing logout");
                self.force_logout();
                return Err(ApiError::SessionExpired);
            }
            Err(e) => {
                warn!(error = %e, "Refresh request failed, forcing logout");
                self.force_logout();
                return Err(ApiError::SessionExpired);
            }
        };

        let tokens: RefreshResponse = match response.json().await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(error = %e, "Failed to parse refresh response, forcing logout");
                self.force_logout();
                return Err(ApiError::SessionExpired);
            }
        };

        self.store
            .set_access_token(&tokens.access_token)
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        debug!("Access token refreshed");
        Ok(())
    }

    /// Clear both tokens and publish session expiry. The store clear is
    /// best-effort: the expiry signal must go out even if the keychain
    /// write fails.
    fn force_logout(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear token store during forced logout");
        }
        self.session.publish(SessionState::Expired);
    }

    /// Decode a response body, mapping non-success statuses onto `ApiError`.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        // 204 and genuinely empty bodies decode as null so unit-returning
        // operations (disconnect, delete) work without a phantom payload.
        let bytes = response.bytes().await?;
        if status == StatusCode::NO_CONTENT || bytes.is_empty() {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::InvalidResponse(format!(
                    "Empty response ({}), but a payload was expected",
                    status.as_u16()
                ))
            });
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    // ===== Typed request helpers used by the service groups =====

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let desc = RequestDescriptor::new(Method::GET, path);
        Self::decode(self.execute(&desc).await?).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        let desc = RequestDescriptor::new(Method::GET, path).with_query(query);
        Self::decode(self.execute(&desc).await?).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let desc = RequestDescriptor::new(Method::POST, path).with_body(body)?;
        Self::decode(self.execute(&desc).await?).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let desc = RequestDescriptor::new(Method::POST, path);
        Self::decode(self.execute(&desc).await?).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let desc = RequestDescriptor::new(Method::PUT, path).with_body(body)?;
        Self::decode(self.execute(&desc).await?).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let desc = RequestDescriptor::new(Method::DELETE, path);
        Self::decode(self.execute(&desc).await?).await
    }
}
