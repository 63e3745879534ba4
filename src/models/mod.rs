//! Data models for Plotchain API payloads.
//!
//! This module contains the wire types exchanged with the backend:
//!
//! - Auth types: `NonceResponse`, `WalletConnectRequest`, `TokenPair`
//! - `UserProfile`, `Portfolio`: account and holdings data
//! - `Property`, `PropertyQuery`: listings and their filters
//! - Tokenization types: `TokenizationRequest`, `TokenMetadata`
//! - Marketplace types: `Listing`, `BuyOrder`, `Transaction`
//! - AI types: `ChatRequest`, `Recommendation`, `Valuation`
//! - Analytics types: `PlatformMetrics`, `UserAnalytics`
//!
//! Response types are deliberately lenient (optional fields, defaults) so
//! payloads pass through as the backend delivers them.

pub mod ai;
pub mod analytics;
pub mod auth;
pub mod kyc;
pub mod marketplace;
pub mod property;
pub mod tokenization;
pub mod user;

pub use ai::{
    ChatReply, ChatRequest, Recommendation, RecommendationRequest, Valuation, ValuationRequest,
};
pub use analytics::{PlatformMetrics, UserAnalytics};
pub use auth::{NonceResponse, RefreshRequest, RefreshResponse, TokenPair, WalletConnectRequest};
pub use kyc::{KycRequest, KycStatus};
pub use marketplace::{
    BuyOrder, BuyReceipt, Listing, ListingInput, ListingQuery, Transaction,
};
pub use property::{Property, PropertyInput, PropertyQuery, PropertySearch};
pub use tokenization::{TokenMetadata, TokenizationJob, TokenizationRequest};
pub use user::{Holding, Portfolio, ProfileUpdate, UserProfile};
