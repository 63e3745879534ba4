//! Service call groups over the shared API client.
//!
//! Each group is a fixed table of named operations mapping 1:1 onto backend
//! endpoints, grouped by domain area. Groups hold a clone of the client
//! (cheap, shared connection pool) and do nothing beyond marshaling
//! parameters into path, query, and body.

pub mod ai;
pub mod analytics;
pub mod auth;
pub mod kyc;
pub mod marketplace;
pub mod properties;
pub mod tokenization;
pub mod users;

pub use ai::AiService;
pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use kyc::KycService;
pub use marketplace::MarketplaceService;
pub use properties::PropertyService;
pub use tokenization::TokenizationService;
pub use users::UserService;

use crate::api::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.clone())
    }

    pub fn kyc(&self) -> KycService {
        KycService::new(self.clone())
    }

    pub fn properties(&self) -> PropertyService {
        PropertyService::new(self.clone())
    }

    pub fn tokenization(&self) -> TokenizationService {
        TokenizationService::new(self.clone())
    }

    pub fn marketplace(&self) -> MarketplaceService {
        MarketplaceService::new(self.clone())
    }

    pub fn ai(&self) -> AiService {
        AiService::new(self.clone())
    }

    pub fn analytics(&self) -> AnalyticsService {
        AnalyticsService::new(self.clone())
    }
}
