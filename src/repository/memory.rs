//! Session-scoped client store kept entirely in memory.

use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Duration;

use chrono::Utc;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::query::search_clients;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};

const REFERENCE_CLIENTS: &str = include_str!("reference_clients.json");

/// The six sample clients the mobile app ships with.
pub fn reference_clients() -> RepositoryResult<Vec<Client>> {
    serde_json::from_str(REFERENCE_CLIENTS)
        .map_err(|e| RepositoryError::ValidationError(format!("invalid reference data: {e}")))
}

/// Authoritative client collection for one session.
///
/// Clones share the same collection. Reads run concurrently; inserts take the
/// write lock so identifier allocation and append happen atomically.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    clients: Arc<RwLock<Vec<Client>>>,
    latency: Duration,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clients(clients: Vec<Client>) -> Self {
        Self {
            clients: Arc::new(RwLock::new(clients)),
            latency: Duration::ZERO,
        }
    }

    /// Store pre-populated with [`reference_clients`].
    pub fn seeded() -> RepositoryResult<Self> {
        Ok(Self::with_clients(reference_clients()?))
    }

    /// Delay applied before every call to mimic a network round trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

impl ClientReader for InMemoryRepository {
    fn get_client_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>> {
        self.simulate_round_trip();
        let clients = self.clients.read()?;
        Ok(clients.iter().find(|client| &client.id == id).cloned())
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        self.simulate_round_trip();
        let clients = self.clients.read()?;
        let matched = search_clients(&clients, query.search.as_deref().unwrap_or_default());
        let total = matched.len();

        let page = match query.pagination {
            Some(pagination) => pagination.slice(&matched),
            None => &matched[..],
        };

        Ok((total, page.iter().map(|client| (*client).clone()).collect()))
    }

    fn all_clients(&self) -> RepositoryResult<Vec<Client>> {
        self.simulate_round_trip();
        Ok(self.clients.read()?.clone())
    }
}

impl ClientWriter for InMemoryRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        self.simulate_round_trip();
        let mut clients = self.clients.write().map_err(|err| {
            log::error!("Client store is unavailable: {err}");
            RepositoryError::from(err)
        })?;

        let mut id = ClientId::generate();
        while clients.iter().any(|client| client.id == id) {
            id = ClientId::generate();
        }

        let client = Client::from_new(id, new_client.clone(), Utc::now().naive_utc());
        clients.push(client.clone());
        log::info!("Added client {} ({})", client.id, client.name);

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::client::{AccountStatus, GstType};
    use crate::domain::types::{Amount, ClientEmail, ClientName, PhoneNumber};

    fn new_client(name: &str) -> NewClient {
        NewClient::new(
            ClientName::new(name).unwrap(),
            ClientEmail::new("owner@newco.in").unwrap(),
            PhoneNumber::new("9123456780").unwrap(),
        )
    }

    #[test]
    fn reference_data_has_two_clients_per_gst_type() {
        let clients = reference_clients().unwrap();
        assert_eq!(clients.len(), 6);
        for gst_type in GstType::ALL {
            assert_eq!(clients.iter().filter(|c| c.gst_type == gst_type).count(), 2);
        }
    }

    #[test]
    fn list_searches_then_paginates() {
        let repo = InMemoryRepository::seeded().unwrap();

        let (total, items) = repo
            .list_clients(ClientListQuery::new().search("xyz").paginate(1, 50))
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(items[0].name.as_str(), "XYZ Traders");

        let (total, items) = repo
            .list_clients(ClientListQuery::new().paginate(2, 4))
            .unwrap();
        assert_eq!(total, 6);
        let ids: Vec<&str> = items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6"]);

        let (total, items) = repo
            .list_clients(ClientListQuery::new().paginate(3, 4))
            .unwrap();
        assert_eq!(total, 6);
        assert!(items.is_empty());
    }

    #[test]
    fn list_without_pagination_returns_every_match() {
        let repo = InMemoryRepository::seeded().unwrap();
        let (total, items) = repo
            .list_clients(ClientListQuery::new().search("traders"))
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn create_appends_zeroed_active_client() {
        let repo = InMemoryRepository::seeded().unwrap();
        let created = repo.create_client(&new_client("New Co")).unwrap();

        assert_eq!(created.total_outstanding, Amount::ZERO);
        assert_eq!(created.total_paid, Amount::ZERO);
        assert_eq!(created.pending_files, 0);
        assert_eq!(created.account_status, AccountStatus::Active);
        assert!(created.created_at.is_some());

        let all = repo.all_clients().unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all.last().unwrap().id, created.id);
        assert_eq!(repo.get_client_by_id(&created.id).unwrap(), Some(created));
    }

    #[test]
    fn clones_share_the_collection() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.create_client(&new_client("Shared")).unwrap();
        assert_eq!(other.all_clients().unwrap().len(), 1);
    }

    #[test]
    fn concurrent_inserts_get_unique_ids() {
        let repo = InMemoryRepository::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        repo.create_client(&new_client(&format!("Client {i}-{j}")))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let all = repo.all_clients().unwrap();
        let ids: HashSet<_> = all.iter().map(|c| c.id.clone()).collect();
        assert_eq!(all.len(), 200);
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn missing_client_is_none() {
        let repo = InMemoryRepository::seeded().unwrap();
        let id = ClientId::new("missing").unwrap();
        assert_eq!(repo.get_client_by_id(&id).unwrap(), None);
    }
}
