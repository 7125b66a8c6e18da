use askama::Template;
use crate::errors::DashboardError;
use crate::models::{AggregationEntry, ReportData};
use super::formatter::format_gb;

/// One table row with the total already formatted for display.
pub struct SummaryRow {
    pub key: String,
    pub total_gb: String,
}

impl From<&AggregationEntry> for SummaryRow {
    fn from(entry: &AggregationEntry) -> Self {
        Self {
            key: entry.key.clone(),
            total_gb: format_gb(entry.total_gb),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub vm_summary: Vec<SummaryRow>,
    pub workstation_summary: Vec<SummaryRow>,
    pub vm_count: usize,
    pub workstation_job_count: usize,
    pub generated: String,
}

impl From<&ReportData> for DashboardTemplate {
    fn from(report: &ReportData) -> Self {
        Self {
            vm_summary: report.vm_summary.iter().map(SummaryRow::from).collect(),
            workstation_summary: report.workstation_summary.iter().map(SummaryRow::from).collect(),
            vm_count: report.vm_count,
            workstation_job_count: report.workstation_job_count,
            generated: report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// Render the complete two-panel dashboard page.
pub fn render_dashboard(report: &ReportData) -> Result<String, DashboardError> {
    Ok(DashboardTemplate::from(report).render()?)
}
