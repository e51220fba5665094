//! UI state layer for the zoco marketplace client.
//!
//! These stores hold the state a front end renders against. They are plain
//! data plus transition methods — no UI framework, no I/O — so the same
//! state layer can back a native app, a wasm app, or a headless harness.
//! Async flows feed results in through ticketed transitions; stale results
//! are discarded so the latest user intent always wins.

pub mod display_types;
pub mod selectors;
pub mod status;
pub mod stores;

pub use display_types::*;
pub use status::{AsyncOp, AsyncStatus, OpTicket};
pub use stores::{AdvertsState, SessionState, TagsState};
