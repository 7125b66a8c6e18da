use std::time::Instant;
use chrono::Utc;
use tracing::info;
use crate::aggregate::{summarize_virtual_machines, summarize_workstations};
use crate::collector::{collect_virtual_machines, collect_workstation_jobs, load_companies};
use crate::config::DashboardConfig;
use crate::models::ReportData;
use crate::upstream::UpstreamApi;

/// Fetch everything from upstream and aggregate it into one report.
///
/// The company directory and both workload listings are retrieved
/// concurrently. Upstream failures never surface here: affected sections are
/// simply empty or labelled "Unknown".
pub async fn build_report(api: &dyn UpstreamApi, config: &DashboardConfig) -> ReportData {
    let started = Instant::now();

    let (companies, vms, jobs) = tokio::join!(
        load_companies(api),
        collect_virtual_machines(api, config.upstream.page_size),
        collect_workstation_jobs(api, config),
    );

    let vm_summary = summarize_virtual_machines(&vms, &companies, &config.summary);
    let workstation_summary =
        summarize_workstations(&jobs, &companies, &config.grouping, &config.summary);

    info!(
        companies = companies.len(),
        vms = vms.len(),
        workstation_jobs = jobs.len(),
        vm_rows = vm_summary.len(),
        workstation_rows = workstation_summary.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Report built"
    );

    ReportData {
        vm_summary,
        workstation_summary,
        vm_count: vms.len(),
        workstation_job_count: jobs.len(),
        generated_at: Utc::now(),
    }
}
