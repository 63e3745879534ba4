//! Platform and per-user analytics.

use crate::api::{ApiClient, ApiError};
use crate::models::analytics::{PlatformMetrics, UserAnalytics};

pub struct AnalyticsService {
    client: ApiClient,
}

impl AnalyticsService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn platform(&self) -> Result<PlatformMetrics, ApiError> {
        self.client.get("/analytics/platform").await
    }

    pub async fn user(&self) -> Result<UserAnalytics, ApiError> {
        self.client.get("/analytics/user").await
    }
}
