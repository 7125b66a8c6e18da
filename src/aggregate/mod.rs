pub mod aggregator;
pub mod grouping;

pub use aggregator::{aggregate, bytes_to_gb, finalize, round2, sum_by_key};
pub use grouping::{display_key, vm_key, workstation_key, UNKNOWN_COMPANY};

use std::collections::HashMap;
use crate::config::{GroupingConfig, SummaryConfig};
use crate::models::{AggregationEntry, VirtualMachine, WorkstationJob};

/// Per-company VM totals.
pub fn summarize_virtual_machines(
    vms: &[VirtualMachine],
    companies: &HashMap<String, String>,
    summary: &SummaryConfig,
) -> Vec<AggregationEntry> {
    aggregate(
        vms,
        |vm| vm_key(vm, companies),
        |vm| vm.used_source_size,
        summary.vm_filter_non_positive,
    )
}

/// Per-tenant workstation totals. Jobs are summed by raw key (organization id
/// or name prefix) and only then relabelled with company names, so two ids of
/// the same company stay separate rows.
pub fn summarize_workstations(
    jobs: &[WorkstationJob],
    companies: &HashMap<String, String>,
    grouping: &GroupingConfig,
    summary: &SummaryConfig,
) -> Vec<AggregationEntry> {
    let entries = sum_by_key(jobs, |job| workstation_key(job, grouping), |job| job.source_size)
        .into_iter()
        .map(|e| AggregationEntry::new(display_key(&e.key, companies), e.total_gb))
        .collect();
    finalize(entries, summary.workstation_filter_non_positive)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1 << 30;

    fn vm(org: Option<&str>, size: Option<u64>) -> VirtualMachine {
        VirtualMachine { organization_uid: org.map(str::to_string), used_source_size: size }
    }

    fn job(org: Option<&str>, name: &str, size: Option<u64>) -> WorkstationJob {
        WorkstationJob {
            organization_uid: org.map(str::to_string),
            job_name: name.to_string(),
            source_size: size,
        }
    }

    #[test]
    fn test_vm_summary_acme_and_unknown() {
        let companies = HashMap::from([("org1".to_string(), "Acme".to_string())]);
        let vms = vec![vm(Some("org1"), Some(2 * GIB)), vm(Some("org2"), Some(GIB))];
        let summary = summarize_virtual_machines(&vms, &companies, &SummaryConfig::default());
        assert_eq!(
            summary,
            vec![AggregationEntry::new("Acme", 2.0), AggregationEntry::new("Unknown", 1.0)]
        );
    }

    #[test]
    fn test_vm_summary_drops_zero_totals() {
        let companies = HashMap::from([("org1".to_string(), "Acme".to_string())]);
        let vms = vec![vm(Some("org1"), None), vm(None, Some(GIB))];
        let summary = summarize_virtual_machines(&vms, &companies, &SummaryConfig::default());
        assert_eq!(summary, vec![AggregationEntry::new("Unknown", 1.0)]);
    }

    #[test]
    fn test_workstation_summary_prefix_key() {
        let jobs = vec![job(None, "TENANT1 - Backup Job", Some(5 * GIB))];
        let summary = summarize_workstations(
            &jobs,
            &HashMap::new(),
            &GroupingConfig::default(),
            &SummaryConfig::default(),
        );
        assert_eq!(summary, vec![AggregationEntry::new("TENANT1", 5.0)]);
    }

    #[test]
    fn test_workstation_summary_relabels_org_ids() {
        let companies = HashMap::from([("org1".to_string(), "Acme".to_string())]);
        let jobs = vec![
            job(Some("org1"), "Laptop A", Some(GIB)),
            job(Some("org1"), "Laptop B", Some(GIB)),
            job(Some("org7"), "Desk", Some(GIB)),
            job(None, "beta - Desk", Some(GIB)),
        ];
        let summary = summarize_workstations(
            &jobs,
            &companies,
            &GroupingConfig::default(),
            &SummaryConfig::default(),
        );
        assert_eq!(
            summary,
            vec![
                AggregationEntry::new("Acme", 2.0),
                AggregationEntry::new("beta", 1.0),
                AggregationEntry::new("org7", 1.0),
            ]
        );
    }

    #[test]
    fn test_workstation_summary_keeps_zero_totals_by_default() {
        let jobs = vec![job(None, "EMPTY - Job", None)];
        let config = SummaryConfig::default();
        let summary = summarize_workstations(&jobs, &HashMap::new(), &GroupingConfig::default(), &config);
        assert_eq!(summary, vec![AggregationEntry::new("EMPTY", 0.0)]);

        let filtering = SummaryConfig { workstation_filter_non_positive: true, ..config };
        let summary = summarize_workstations(&jobs, &HashMap::new(), &GroupingConfig::default(), &filtering);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_workstation_summary_empty() {
        let summary = summarize_workstations(
            &[],
            &HashMap::new(),
            &GroupingConfig::default(),
            &SummaryConfig::default(),
        );
        assert!(summary.is_empty());
    }
}
