//! Per-candidate session state and the handlers that mutate it.

pub mod handlers;
pub mod profile;
pub mod store;
