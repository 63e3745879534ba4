//! Property catalog operations.

use crate::api::{ApiClient, ApiError};
use crate::models::property::{Property, PropertyInput, PropertyQuery, PropertySearch};

pub struct PropertyService {
    client: ApiClient,
}

impl PropertyService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List properties matching the filter.
    pub async fn list(&self, query: &PropertyQuery) -> Result<Vec<Property>, ApiError> {
        self.client
            .get_with_query("/properties", query.query_pairs())
            .await
    }

    pub async fn get(&self, property_id: &str) -> Result<Property, ApiError> {
        self.client
            .get(&format!("/properties/{}", property_id))
            .await
    }

    pub async fn create(&self, property: &PropertyInput) -> Result<Property, ApiError> {
        self.client.post("/properties", property).await
    }

    pub async fn update(
        &self,
        property_id: &str,
        property: &PropertyInput,
    ) -> Result<Property, ApiError> {
        self.client
            .put(&format!("/properties/{}", property_id), property)
            .await
    }

    pub async fn delete(&self, property_id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/properties/{}", property_id))
            .await
    }

    /// Free-text search over the catalog.
    pub async fn search(&self, search: &PropertySearch) -> Result<Vec<Property>, ApiError> {
        self.client.post("/properties/search", search).await
    }
}
