//! REST API client module for the Plotchain backend.
//!
//! This module provides the `ApiClient` used by every service call group.
//! The client attaches the stored bearer token to outbound requests and
//! transparently recovers from access-token expiry: on a 401 it exchanges
//! the refresh token via `POST /auth/refresh` and replays the original
//! request exactly once.

pub mod client;
pub mod error;

pub use client::{ApiClient, RequestDescriptor};
pub use error::ApiError;
