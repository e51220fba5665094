//! Typed domain services over the marketplace REST API.
//!
//! Each function builds the request, sends it through the `ApiClient`, and
//! normalizes every failure into the uniform `ApiError` contract.

pub mod adverts;
pub mod auth;
pub mod tags;

pub use adverts::{
    create_advert, delete_advert_by_id, get_advert_by_id, get_adverts, Advert, AdvertQuery,
    NewAdvert, PhotoUpload,
};
pub use auth::{login, LoginResponse};
pub use tags::get_available_tags;
