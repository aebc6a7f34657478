//! Client management engine for chartered accountants.
//!
//! The engine keeps a session-scoped client collection and answers the
//! client list screen's queries: substring search with pagination, GST
//! category filters, sort orders, and validated client onboarding.

use crate::models::config::EngineConfig;
use crate::repository::InMemoryRepository;
use crate::repository::errors::RepositoryResult;

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod services;

/// Builds the session store described by `config`.
pub fn build_repository(config: &EngineConfig) -> RepositoryResult<InMemoryRepository> {
    let repo = if config.seed_reference_data {
        InMemoryRepository::seeded()?
    } else {
        InMemoryRepository::new()
    };
    Ok(repo.with_latency(config.simulated_latency()))
}
