//! State stores. Each holds the data one slice of the UI renders against,
//! with transition methods for everything the app layer can do to it.

pub mod adverts;
pub mod session;
pub mod tags;

pub use adverts::AdvertsState;
pub use session::SessionState;
pub use tags::TagsState;
