//! AI assistant endpoints: chat, recommendations, valuations.
//!
//! These are plain pass-through calls; all conversational state lives
//! server-side.

use crate::api::{ApiClient, ApiError};
use crate::models::ai::{
    ChatReply, ChatRequest, Recommendation, RecommendationRequest, Valuation, ValuationRequest,
};

pub struct AiService {
    client: ApiClient,
}

impl AiService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.client.post("/ai/chat", request).await
    }

    pub async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, ApiError> {
        self.client.post("/ai/recommendations", request).await
    }

    pub async fn valuation(&self, request: &ValuationRequest) -> Result<Valuation, ApiError> {
        self.client.post("/ai/valuation", request).await
    }
}
