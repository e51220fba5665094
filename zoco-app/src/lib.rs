//! Application layer: wires zoco-core services to the zoco-ui stores.

pub mod app_service;
pub mod convert;

pub use app_service::{AppService, Credentials};
