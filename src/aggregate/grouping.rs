use std::collections::HashMap;
use crate::config::GroupingConfig;
use crate::models::{VirtualMachine, WorkstationJob};

/// Key for virtual machines whose organization is not in the directory.
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Company name of the VM's organization, or "Unknown". There is no name-based
/// fallback for virtual machines.
pub fn vm_key(vm: &VirtualMachine, companies: &HashMap<String, String>) -> String {
    vm.organization_uid
        .as_ref()
        .and_then(|uid| companies.get(uid))
        .cloned()
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}

/// Raw grouping key for a workstation job: its organization id when present
/// (and preferred), otherwise a tenant prefix taken from the job name.
pub fn workstation_key(job: &WorkstationJob, grouping: &GroupingConfig) -> String {
    match &job.organization_uid {
        Some(uid) if grouping.prefer_organization_id => uid.clone(),
        _ => name_prefix(&job.job_name, grouping),
    }
}

/// Left side of the first separator, or the first `fallback_prefix_len`
/// characters when the separator does not occur.
pub fn name_prefix(job_name: &str, grouping: &GroupingConfig) -> String {
    match job_name.split_once(grouping.separator.as_str()) {
        Some((prefix, _)) => prefix.to_string(),
        None => job_name.chars().take(grouping.fallback_prefix_len).collect(),
    }
}

/// Label shown for a workstation key: the company name if the key is a known
/// organization id, the key itself otherwise.
pub fn display_key(key: &str, companies: &HashMap<String, String>) -> String {
    companies.get(key).cloned().unwrap_or_else(|| key.to_string())
}
