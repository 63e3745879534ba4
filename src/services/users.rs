//! User profile and portfolio operations.

use crate::api::{ApiClient, ApiError};
use crate::models::user::{Portfolio, ProfileUpdate, UserProfile};

pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Profile of the authenticated user.
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/users/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.client.put("/users/profile", update).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.client.get(&format!("/users/{}", user_id)).await
    }

    pub async fn get_portfolio(&self, user_id: &str) -> Result<Portfolio, ApiError> {
        self.client
            .get(&format!("/users/{}/portfolio", user_id))
            .await
    }
}
