//! In-memory upstream used by unit and integration tests.

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use serde_json::{json, Value};
use crate::errors::FetchError;
use super::{endpoints, FetchResult, UpstreamApi};

/// Canned responses keyed by request path. Unknown paths answer 404.
#[derive(Default)]
pub struct FakeUpstream {
    responses: HashMap<String, FetchResult>,
    requests: Mutex<Vec<String>>,
}

impl FakeUpstream {
    pub fn with(mut self, path: &str, response: FetchResult) -> Self {
        self.responses.insert(path.to_string(), response);
        self
    }

    pub fn failing(self, path: &str, error: FetchError) -> Self {
        self.with(path, Err(error))
    }

    pub fn companies(self, companies: &[(&str, &str)]) -> Self {
        let data: Vec<Value> = companies
            .iter()
            .map(|(id, name)| json!({"instanceUid": id, "name": name}))
            .collect();
        self.with(endpoints::COMPANIES, Ok(json!({"data": data})))
    }

    /// Serve `vms` as pages of `page_size` with an accurate declared total.
    pub fn vm_pages(mut self, vms: Vec<Value>, page_size: usize) -> Self {
        let total = vms.len();
        for (i, chunk) in vms.chunks(page_size.max(1)).enumerate() {
            let path = endpoints::paged(endpoints::VIRTUAL_MACHINES, i * page_size, page_size);
            let body = json!({"data": chunk, "meta": {"pagingInfo": {"total": total}}});
            self.responses.insert(path, Ok(body));
        }
        self
    }

    pub fn workstation_jobs(self, jobs: Vec<Value>) -> Self {
        self.with(endpoints::WORKSTATION_JOBS, Ok(json!({"data": jobs})))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait]
impl UpstreamApi for FakeUpstream {
    async fn fetch(&self, path: &str) -> FetchResult {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path.to_string());
        }
        self.responses
            .get(path)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}
