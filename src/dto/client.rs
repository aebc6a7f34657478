//! DTOs shaped for the client list and dashboard screens.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, ClientStatus};
use crate::domain::listing::{FilterKey, SortKey};
use crate::domain::types::Amount;

/// Client as rendered in a list, with its status computed at read time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientListItem {
    #[serde(flatten)]
    pub client: Client,
    pub status: ClientStatus,
}

impl From<Client> for ClientListItem {
    fn from(client: Client) -> Self {
        let status = client.status();
        Self { client, status }
    }
}

/// Query parameters accepted by the client list screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientViewQuery {
    pub search: String,
    pub filter: FilterKey,
    pub sort: SortKey,
    pub page: usize,
    pub limit: Option<usize>,
}

impl Default for ClientViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: FilterKey::default(),
            sort: SortKey::default(),
            page: 1,
            limit: None,
        }
    }
}

/// Ordered, filtered page of clients together with the active selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientView {
    pub items: Vec<ClientListItem>,
    /// Number of clients matching the search before the category filter.
    pub total: usize,
    pub filter: FilterKey,
    pub sort: SortKey,
    /// `Regular GST • Pending Files` style summary, present when the
    /// selection differs from the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_selection: Option<String>,
}

/// Aggregates shown on the accountant's home screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: usize,
    pub total_outstanding: Amount,
    pub total_paid: Amount,
    pub pending_files: u64,
    pub clients_by_status: BTreeMap<String, usize>,
    pub clients_by_gst_type: BTreeMap<String, usize>,
}
