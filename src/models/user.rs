// Allow dead code: API response structs have fields for completeness
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Option<String>,
    pub wallet_address: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub kyc_status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial profile update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub user_id: Option<String>,
    #[serde(default)]
    pub holdings: Vec<Holding>,
    pub total_value: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Holding {
    pub property_id: Option<String>,
    pub token_amount: Option<f64>,
    pub current_value: Option<f64>,
}
