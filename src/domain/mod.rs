//! Domain aggregates exposed by the client engine.

pub mod client;
pub mod listing;
pub mod types;
