use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Total size in gigabytes for one grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationEntry {
    pub key: String,
    pub total_gb: f64,
}

impl AggregationEntry {
    pub fn new(key: impl Into<String>, total_gb: f64) -> Self {
        Self { key: key.into(), total_gb }
    }
}

/// Everything the renderers need for one dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub vm_summary: Vec<AggregationEntry>,
    pub workstation_summary: Vec<AggregationEntry>,
    pub vm_count: usize,
    pub workstation_job_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl ReportData {
    pub fn vm_total_gb(&self) -> f64 {
        self.vm_summary.iter().map(|e| e.total_gb).sum()
    }

    pub fn workstation_total_gb(&self) -> f64 {
        self.workstation_summary.iter().map(|e| e.total_gb).sum()
    }
}
