use std::collections::HashMap;
use serde_json::Value;
use tracing::{info, warn};
use crate::upstream::{endpoints, UpstreamApi};
use super::data_items;

/// Display name used when a company record has no name.
const UNNAMED_COMPANY: &str = "Unknown";

/// Load the organization directory as a map from instance id to company name.
/// Any upstream failure yields an empty map.
pub async fn load_companies(api: &dyn UpstreamApi) -> HashMap<String, String> {
    let body = match api.fetch(endpoints::COMPANIES).await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "Company directory unavailable, names will show as Unknown");
            return HashMap::new();
        }
    };

    let Some(items) = data_items(&body) else {
        return HashMap::new();
    };

    let companies: HashMap<String, String> = items
        .iter()
        .filter_map(|item| {
            let id = item.get("instanceUid").and_then(Value::as_str)?;
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(UNNAMED_COMPANY);
            Some((id.to_string(), name.to_string()))
        })
        .collect();

    info!(companies = companies.len(), "Loaded company directory");
    companies
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::upstream::testing::FakeUpstream;
    use crate::errors::FetchError;

    #[tokio::test]
    async fn test_load_companies() {
        let api = FakeUpstream::default().with(
            endpoints::COMPANIES,
            Ok(json!({"data": [
                {"instanceUid": "org1", "name": "Acme"},
                {"instanceUid": "org2", "name": "Beta"},
            ]})),
        );
        let companies = load_companies(&api).await;
        assert_eq!(companies.len(), 2);
        assert_eq!(companies["org1"], "Acme");
        assert_eq!(companies["org2"], "Beta");
    }

    #[tokio::test]
    async fn test_records_without_id_are_skipped() {
        let api = FakeUpstream::default().with(
            endpoints::COMPANIES,
            Ok(json!({"data": [
                {"name": "Orphan"},
                {"instanceUid": 42, "name": "NumericId"},
                {"instanceUid": "org3"},
            ]})),
        );
        let companies = load_companies(&api).await;
        assert_eq!(companies.len(), 1);
        assert_eq!(companies["org3"], "Unknown");
    }

    #[tokio::test]
    async fn test_error_yields_empty_directory() {
        let api = FakeUpstream::default()
            .with(endpoints::COMPANIES, Err(FetchError::Status(401)));
        assert!(load_companies(&api).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_data_yields_empty_directory() {
        let api = FakeUpstream::default().with(endpoints::COMPANIES, Ok(json!({"meta": {}})));
        assert!(load_companies(&api).await.is_empty());
    }
}
