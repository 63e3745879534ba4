use serde::{Deserialize, Serialize};

/// Identity verification kickoff; document payloads vary per provider and
/// are passed through as-is.
#[derive(Debug, Clone, Serialize)]
pub struct KycRequest {
    pub document_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KycStatus {
    pub status: Option<String>,
    pub verification_id: Option<String>,
    /// Provider-specific detail blob, untouched by the client.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
