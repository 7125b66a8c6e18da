use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://localhost:1280/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_SEPARATOR: &str = " - ";
/// Deployments disagree between 10 and 15 characters; 15 matches the
/// reference dashboard.
pub const DEFAULT_FALLBACK_PREFIX_LEN: usize = 15;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub upstream: UpstreamConfig,
    pub grouping: GroupingConfig,
    pub summary: SummaryConfig,
    pub workstations: WorkstationConfig,
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub page_size: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}

/// How workstation jobs are bucketed when computing the per-tenant summary.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupingConfig {
    pub separator: String,
    pub fallback_prefix_len: usize,
    pub prefer_organization_id: bool,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            fallback_prefix_len: DEFAULT_FALLBACK_PREFIX_LEN,
            prefer_organization_id: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub vm_filter_non_positive: bool,
    pub workstation_filter_non_positive: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            vm_filter_non_positive: true,
            workstation_filter_non_positive: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WorkstationConfig {
    pub paginate: bool,
}
