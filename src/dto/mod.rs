//! DTO modules that bridge services with the presentation layer.

pub mod client;
