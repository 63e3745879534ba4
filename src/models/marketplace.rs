// Allow dead code: API response structs have fields for completeness
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub id: Option<String>,
    pub property_id: Option<String>,
    pub seller: Option<String>,
    pub token_amount: Option<f64>,
    pub price_per_token: Option<f64>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for creating a secondary-market listing; sent verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ListingInput {
    pub property_id: String,
    pub token_amount: f64,
    pub price_per_token: f64,
}

/// Filter for `GET /marketplace/listings`; marshaled into query parameters.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub property_id: Option<String>,
    pub status: Option<String>,
    pub page: Option<u32>,
}

impl ListingQuery {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(ref property_id) = self.property_id {
            pairs.push(("property_id".to_string(), property_id.clone()));
        }
        if let Some(ref status) = self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BuyOrder {
    pub listing_id: String,
    pub token_amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuyReceipt {
    pub transaction_id: Option<String>,
    pub tx_hash: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub id: Option<String>,
    pub listing_id: Option<String>,
    pub buyer: Option<String>,
    pub seller: Option<String>,
    pub token_amount: Option<f64>,
    pub total_price: Option<f64>,
    pub tx_hash: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
