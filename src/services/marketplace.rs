//! Secondary-market operations: listings, purchases, transaction history.

use crate::api::{ApiClient, ApiError};
use crate::models::marketplace::{
    BuyOrder, BuyReceipt, Listing, ListingInput, ListingQuery, Transaction,
};

pub struct MarketplaceService {
    client: ApiClient,
}

impl MarketplaceService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn listings(&self, query: &ListingQuery) -> Result<Vec<Listing>, ApiError> {
        self.client
            .get_with_query("/marketplace/listings", query.query_pairs())
            .await
    }

    pub async fn create_listing(&self, listing: &ListingInput) -> Result<Listing, ApiError> {
        self.client.post("/marketplace/listings", listing).await
    }

    pub async fn buy(&self, order: &BuyOrder) -> Result<BuyReceipt, ApiError> {
        self.client.post("/marketplace/buy", order).await
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.client.get("/marketplace/transactions").await
    }
}
