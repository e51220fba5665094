//! Core data-access layer for the zoco marketplace client: configuration,
//! the authenticated HTTP client, typed domain services, and token
//! persistence. UI state lives in `zoco-ui`; orchestration in `zoco-app`.

pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod token_store;

pub use client::ApiClient;
pub use config::Config;
pub use error::ApiError;
pub use token_store::TokenStore;
