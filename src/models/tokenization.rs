use serde::{Deserialize, Serialize};

/// Request to mint fractional ownership tokens for a property.
#[derive(Debug, Clone, Serialize)]
pub struct TokenizationRequest {
    pub property_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_supply: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizationJob {
    pub property_id: Option<String>,
    pub status: Option<String>,
    pub contract_address: Option<String>,
    pub tx_hash: Option<String>,
}

/// On-chain token metadata for a tokenized property.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub total_supply: Option<i64>,
    pub contract_address: Option<String>,
    pub token_uri: Option<String>,
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
}
