pub mod client;
pub mod endpoints;
#[doc(hidden)]
pub mod testing;

use async_trait::async_trait;
use serde_json::Value;
use crate::errors::FetchError;

pub use client::UpstreamClient;

/// Outcome of one upstream GET: the decoded JSON body or a failure marker.
pub type FetchResult = Result<Value, FetchError>;

/// Read-only access to the backup-management API.
///
/// `path` is relative to the configured base URL and may carry a query string.
/// Implementations must not panic; every failure is reported as a `FetchError`.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    async fn fetch(&self, path: &str) -> FetchResult;
}
