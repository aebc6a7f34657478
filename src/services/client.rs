use std::collections::BTreeMap;

use crate::domain::client::{Client, ClientStatus, GstType, NewClient};
use crate::domain::listing::{FilterKey, SortKey};
use crate::domain::types::ClientId;
use crate::dto::client::{ClientListItem, ClientView, ClientViewQuery, DashboardStats};
use crate::forms::FormError;
use crate::pagination::{Paginated, Pagination};
use crate::query;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of clients whose name or email contains `search`.
///
/// Matches keep collection order. `page` and `limit` of zero are treated as 1.
pub fn list_clients<R>(
    repo: &R,
    page: usize,
    limit: usize,
    search: &str,
) -> ServiceResult<Paginated<Client>>
where
    R: ClientReader + ?Sized,
{
    let pagination = Pagination::new(page, limit);
    let query = ClientListQuery::new()
        .search(search)
        .paginate(pagination.page, pagination.per_page);

    let (total, clients) = repo.list_clients(query).map_err(|err| {
        log::error!("Failed to fetch clients: {err}");
        err.or_default_message("Failed to fetch clients")
    })?;

    Ok(Paginated::new(clients, total, pagination))
}

/// Keeps the clients selected by `filter` and orders them by `sort`.
pub fn apply_filter_and_sort(clients: &[Client], filter: FilterKey, sort: SortKey) -> Vec<Client> {
    query::apply_filter_and_sort(clients, filter, sort)
}

/// Fetches a page, then filters and sorts it the way the client list shows it.
pub fn load_client_view<R>(
    repo: &R,
    query: ClientViewQuery,
    default_limit: usize,
) -> ServiceResult<ClientView>
where
    R: ClientReader + ?Sized,
{
    let limit = query.limit.unwrap_or(default_limit);
    let page = list_clients(repo, query.page, limit, &query.search)?;

    let items = apply_filter_and_sort(&page.items, query.filter, query.sort)
        .into_iter()
        .map(ClientListItem::from)
        .collect();

    let active_selection = (query.filter != FilterKey::default()
        || query.sort != SortKey::default())
    .then(|| format!("{} • {}", query.filter.label(), query.sort.label()));

    Ok(ClientView {
        items,
        total: page.total,
        filter: query.filter,
        sort: query.sort,
        active_selection,
    })
}

/// Looks up a single client.
pub fn get_client<R>(repo: &R, client_id: &str) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let client_id = ClientId::new(client_id)?;

    repo.get_client_by_id(&client_id)
        .map_err(|err| {
            log::error!("Failed to fetch client {client_id}: {err}");
            ServiceError::from(err.or_default_message("Failed to fetch client details"))
        })?
        .ok_or(ServiceError::NotFound)
}

/// Validates the submitted form and appends the new client to the store.
///
/// The caller is responsible for re-running any list query afterwards.
pub fn add_client<R, F>(repo: &R, form: F) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
    NewClient: TryFrom<F, Error = FormError>,
{
    let new_client = NewClient::try_from(form).map_err(|err| {
        log::error!("Failed to validate form field `{}`: {err}", err.field());
        err
    })?;

    let client = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        err.or_default_message("Failed to add client")
    })?;

    Ok(client)
}

/// Aggregates the collection into the home screen counters.
pub fn dashboard_stats<R>(repo: &R) -> ServiceResult<DashboardStats>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.all_clients().map_err(|err| {
        log::error!("Failed to fetch dashboard stats: {err}");
        err.or_default_message("Failed to fetch dashboard stats")
    })?;

    let mut clients_by_status: BTreeMap<String, usize> = ClientStatus::ALL
        .iter()
        .map(|status| (status.to_string(), 0))
        .collect();
    let mut clients_by_gst_type: BTreeMap<String, usize> = GstType::ALL
        .iter()
        .map(|gst_type| (gst_type.to_string(), 0))
        .collect();

    for client in &clients {
        *clients_by_status
            .entry(client.status().to_string())
            .or_default() += 1;
        *clients_by_gst_type
            .entry(client.gst_type.to_string())
            .or_default() += 1;
    }

    Ok(DashboardStats {
        total_clients: clients.len(),
        total_outstanding: clients.iter().map(|c| c.total_outstanding).sum(),
        total_paid: clients.iter().map(|c| c.total_paid).sum(),
        pending_files: clients.iter().map(|c| u64::from(c.pending_files)).sum(),
        clients_by_status,
        clients_by_gst_type,
    })
}


#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::forms::client::CaAddClientForm;
    use crate::repository::errors::RepositoryError;
    use crate::repository::memory::reference_clients;
    use crate::repository::mock::MockRepository;

    /// Ensures the search text and clamped pagination reach the data source.
    #[test]
    fn list_forwards_search_and_pagination() {
        let mut repo = MockRepository::new();
        let clients = reference_clients().unwrap();

        repo.expect_list_clients()
            .times(1)
            .withf(|query| {
                query.search.as_deref() == Some("traders")
                    && query
                        .pagination
                        .is_some_and(|p| p.page == 1 && p.per_page == 1)
            })
            .returning(move |_| Ok((2, vec![clients[1].clone()])));

        let page = list_clients(&repo, 0, 1, "traders").unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].name.as_str(), "XYZ Traders");
    }

    /// Ensures stats surface the source failure as is.
    #[test]
    fn stats_surface_source_failure() {
        let mut repo = MockRepository::new();
        repo.expect_all_clients()
            .times(1)
            .returning(|| Err(RepositoryError::OperationFailed("backend down".to_string())));

        let err = dashboard_stats(&repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Repository(RepositoryError::OperationFailed("backend down".to_string()))
        );
    }

    /// Ensures a valid onboarding form is trimmed before it is stored.
    #[test]
    fn add_sends_trimmed_client() {
        let mut repo = MockRepository::new();
        let stored = reference_clients().unwrap().remove(0);

        repo.expect_create_client()
            .times(1)
            .withf(|new_client| {
                new_client.name.as_str() == "Iyer Associates"
                    && new_client.gst_type == GstType::Iff
                    && new_client.phone_number.as_str() == "9000000001"
                    && new_client.gst_number == "33AAAFI1234B1Z2"
            })
            .returning(move |_| Ok(stored.clone()));

        let form = CaAddClientForm {
            business_name: "Iyer Associates".to_string(),
            gst_number: " 33AAAFI1234B1Z2 ".to_string(),
            phone_number: "90000 00001".to_string(),
            email: "iyer@associates.in".to_string(),
            user_id: "iyer".to_string(),
            password: "pw".to_string(),
            client_type: Some("IFF".to_string()),
        };
        assert!(add_client(&repo, form).is_ok());
    }

    /// Ensures an empty form is rejected without touching the source.
    #[test]
    fn empty_form_is_rejected_before_source() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().times(0);

        let err = add_client(&repo, CaAddClientForm::default()).unwrap_err();
        assert!(matches!(err, ServiceError::Form(FormError::MissingField(_))));
    }
}
