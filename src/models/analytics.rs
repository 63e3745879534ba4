use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformMetrics {
    pub total_properties: Option<i64>,
    pub total_users: Option<i64>,
    pub total_volume: Option<f64>,
    pub active_listings: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserAnalytics {
    pub portfolio_value: Option<f64>,
    pub total_invested: Option<f64>,
    pub holdings_count: Option<i64>,
    pub returns: Option<f64>,
}
