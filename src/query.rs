//! Pure search, filter and sort rules over a client collection.
//!
//! Nothing here touches the store: every function takes a snapshot and
//! returns a new list, so the same inputs always produce the same output.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};

use crate::domain::client::Client;
use crate::domain::listing::{FilterKey, SortKey};

/// Case-insensitive substring match against the client name or email.
///
/// An empty search matches every client.
pub fn matches_search(client: &Client, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    client.name.to_lowercase().contains(&needle) || client.email.to_lowercase().contains(&needle)
}

/// Clients matching `search`, in collection order.
pub fn search_clients<'a>(clients: &'a [Client], search: &str) -> Vec<&'a Client> {
    clients
        .iter()
        .filter(|client| matches_search(client, search))
        .collect()
}

static NAME_COLLATOR: LazyLock<CollatorBorrowed<'static>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(Default::default(), options).expect("root collation data is compiled in")
});

/// Collation used for name ordering: root locale, tertiary strength.
///
/// Accents and case only break ties between otherwise equal names, and the
/// lowercase spelling sorts first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.compare(a, b)
}

fn compare(sort: SortKey, a: &Client, b: &Client) -> Ordering {
    match sort {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::NameDesc => compare_names(&b.name, &a.name),
        SortKey::Status => a.status().as_str().cmp(b.status().as_str()),
        SortKey::Pending => b.pending_files.cmp(&a.pending_files),
        SortKey::Outstanding => b.total_outstanding.total_cmp(&a.total_outstanding),
    }
}

/// Restricts `clients` to `filter` and orders the result by `sort`.
///
/// The sort is stable, so clients with equal keys keep their input order.
/// The input slice is left untouched.
pub fn apply_filter_and_sort(clients: &[Client], filter: FilterKey, sort: SortKey) -> Vec<Client> {
    let mut filtered: Vec<Client> = clients
        .iter()
        .filter(|client| filter.matches(client.gst_type))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| compare(sort, a, b));
    filtered
}
