use serde_json::Value;
use tracing::{debug, info, warn};
use crate::models::VirtualMachine;
use crate::upstream::{endpoints, UpstreamApi};
use super::data_items;

/// Retrieve every record of a paginated endpoint.
///
/// Pages of `page_size` are requested until `offset + page_size` reaches the
/// declared `meta.pagingInfo.total`. A failed request or an empty page ends the
/// walk and whatever was gathered so far is returned. Records are not
/// de-duplicated. A page size of 0 is treated as 1.
pub async fn collect_all(api: &dyn UpstreamApi, endpoint: &str, page_size: usize) -> Vec<Value> {
    let page_size = page_size.max(1);
    let mut records = Vec::new();
    let mut offset = 0usize;

    loop {
        let path = endpoints::paged(endpoint, offset, page_size);
        let body = match api.fetch(&path).await {
            Ok(body) => body,
            Err(e) => {
                warn!(endpoint, offset, error = %e, collected = records.len(), "Stopping pagination after upstream error");
                break;
            }
        };

        let Some(items) = data_items(&body) else {
            debug!(endpoint, offset, "Empty page, pagination complete");
            break;
        };
        records.extend(items.iter().cloned());

        let total = declared_total(&body);
        if offset + page_size >= total {
            break;
        }
        offset += page_size;
    }

    info!(endpoint, records = records.len(), "Collected records");
    records
}

fn declared_total(body: &Value) -> usize {
    body["meta"]["pagingInfo"]["total"]
        .as_u64()
        .map(|t| usize::try_from(t).unwrap_or(usize::MAX))
        .unwrap_or(0)
}

pub async fn collect_virtual_machines(api: &dyn UpstreamApi, page_size: usize) -> Vec<VirtualMachine> {
    collect_all(api, endpoints::VIRTUAL_MACHINES, page_size)
        .await
        .iter()
        .map(VirtualMachine::from_json)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::upstream::testing::FakeUpstream;
    use crate::errors::FetchError;

    const EP: &str = "/items";

    fn page(ids: std::ops::Range<u64>, total: u64) -> Value {
        let data: Vec<Value> = ids.map(|i| json!({"id": i})).collect();
        json!({"data": data, "meta": {"pagingInfo": {"total": total}}})
    }

    fn ids(records: &[Value]) -> Vec<u64> {
        records.iter().map(|r| r["id"].as_u64().unwrap()).collect()
    }

    #[tokio::test]
    async fn test_collects_all_pages_in_order() {
        let api = FakeUpstream::default()
            .with("/items?offset=0&take=2", Ok(page(0..2, 5)))
            .with("/items?offset=2&take=2", Ok(page(2..4, 5)))
            .with("/items?offset=4&take=2", Ok(page(4..5, 5)));

        let records = collect_all(&api, EP, 2).await;
        assert_eq!(ids(&records), vec![0, 1, 2, 3, 4]);
        assert_eq!(api.request_count(), 3);
    }

    #[tokio::test]
    async fn test_stops_exactly_at_total() {
        let api = FakeUpstream::default()
            .with("/items?offset=0&take=2", Ok(page(0..2, 4)))
            .with("/items?offset=2&take=2", Ok(page(2..4, 4)));

        let records = collect_all(&api, EP, 2).await;
        assert_eq!(records.len(), 4);
        assert_eq!(api.request_count(), 2);
    }

    #[tokio::test]
    async fn test_zero_page_size_still_advances() {
        let api = FakeUpstream::default()
            .with("/items?offset=0&take=1", Ok(page(0..1, 2)))
            .with("/items?offset=1&take=1", Ok(page(1..2, 2)));

        let records = collect_all(&api, EP, 0).await;
        assert_eq!(ids(&records), vec![0, 1]);
        assert_eq!(api.request_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_first_page_returns_nothing() {
        let api = FakeUpstream::default()
            .with("/items?offset=0&take=2", Ok(json!({"data": [], "meta": {"pagingInfo": {"total": 10}}})));
        assert!(collect_all(&api, EP, 2).await.is_empty());
        assert_eq!(api.request_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_total_stops_after_first_page() {
        let api = FakeUpstream::default()
            .with("/items?offset=0&take=2", Ok(json!({"data": [{"id": 0}, {"id": 1}]})));
        let records = collect_all(&api, EP, 2).await;
        assert_eq!(records.len(), 2);
        assert_eq!(api.request_count(), 1);
    }

    #[tokio::test]
    async fn test_error_mid_walk_keeps_partial_results() {
        let api = FakeUpstream::default()
            .with("/items?offset=0&take=2", Ok(page(0..2, 6)))
            .with("/items?offset=2&take=2", Err(FetchError::Transport("timed out".into())));

        let records = collect_all(&api, EP, 2).await;
        assert_eq!(ids(&records), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_error_on_first_page_returns_nothing() {
        let api = FakeUpstream::default()
            .with("/items?offset=0&take=2", Err(FetchError::Status(500)));
        assert!(collect_all(&api, EP, 2).await.is_empty());
    }

    #[tokio::test]
    async fn test_collect_virtual_machines_parses_records() {
        let api = FakeUpstream::default().with(
            "/v3/protectedWorkloads/virtualMachines?offset=0&take=100",
            Ok(json!({
                "data": [{"organizationUid": "org1", "usedSourceSize": 1073741824u64}],
                "meta": {"pagingInfo": {"total": 1}}
            })),
        );
        let vms = collect_virtual_machines(&api, 100).await;
        assert_eq!(vms.len(), 1);
        assert_eq!(vms[0].organization_uid.as_deref(), Some("org1"));
        assert_eq!(vms[0].used_source_size, Some(1073741824));
    }
}
