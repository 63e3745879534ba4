//! Identity verification (KYC) operations.

use crate::api::{ApiClient, ApiError};
use crate::models::kyc::{KycRequest, KycStatus};

pub struct KycService {
    client: ApiClient,
}

impl KycService {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn initiate(&self, request: &KycRequest) -> Result<KycStatus, ApiError> {
        self.client.post("/kyc/initiate", request).await
    }

    pub async fn status(&self) -> Result<KycStatus, ApiError> {
        self.client.get("/kyc/status").await
    }
}
