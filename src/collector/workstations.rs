use tracing::{info, warn};
use crate::config::DashboardConfig;
use crate::models::WorkstationJob;
use crate::upstream::{endpoints, UpstreamApi};
use super::{collect_all, data_items};

/// Retrieve workstation backup jobs. The listing is fetched in one request
/// unless `workstations.paginate` is set.
pub async fn collect_workstation_jobs(api: &dyn UpstreamApi, config: &DashboardConfig) -> Vec<WorkstationJob> {
    if config.workstations.paginate {
        return collect_all(api, endpoints::WORKSTATION_JOBS, config.upstream.page_size)
            .await
            .iter()
            .map(WorkstationJob::from_json)
            .collect();
    }

    let body = match api.fetch(endpoints::WORKSTATION_JOBS).await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "Workstation job listing unavailable");
            return Vec::new();
        }
    };

    let jobs: Vec<WorkstationJob> = data_items(&body)
        .map(|items| items.iter().map(WorkstationJob::from_json).collect())
        .unwrap_or_default();

    info!(jobs = jobs.len(), "Collected workstation jobs");
    jobs
}
