pub const COMPANIES: &str = "/v3/organizations/companies";
pub const VIRTUAL_MACHINES: &str = "/v3/protectedWorkloads/virtualMachines";
pub const WORKSTATION_JOBS: &str = "/v3/protectedWorkloads/computersManagedByConsole/jobs";

/// Append `offset`/`take` paging parameters to an endpoint path.
pub fn paged(endpoint: &str, offset: usize, take: usize) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}offset={}&take={}", endpoint, sep, offset, take)
}
