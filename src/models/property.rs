// Allow dead code: API response structs have fields for completeness
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub total_tokens: Option<i64>,
    pub available_tokens: Option<i64>,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for property create/update; sent verbatim.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<String>,
}

/// Listing filter for `GET /properties`; marshaled into query parameters.
#[derive(Debug, Clone, Default)]
pub struct PropertyQuery {
    pub status: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PropertyQuery {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(ref status) = self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(ref location) = self.location {
            pairs.push(("location".to_string(), location.clone()));
        }
        if let Some(min_price) = self.min_price {
            pairs.push(("min_price".to_string(), min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("max_price".to_string(), max_price.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        pairs
    }
}

/// Free-text search request for `POST /properties/search`.
#[derive(Debug, Clone, Serialize)]
pub struct PropertySearch {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
}
