//! Property tokenization operations.

use crate::api::{ApiClient, ApiError};
use crate::models::tokenization::{TokenMetadata, TokenizationJob, TokenizationRequest};

pub struct TokenizationService {
    client: ApiClient,
}

impl TokenizationService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Kick off token minting for a property.
    pub async fn create(&self, request: &TokenizationRequest) -> Result<TokenizationJob, ApiError> {
        self.client.post("/tokenization/create", request).await
    }

    pub async fn metadata(&self, property_id: &str) -> Result<TokenMetadata, ApiError> {
        self.client
            .get(&format!("/tokenization/{}/metadata", property_id))
            .await
    }
}
