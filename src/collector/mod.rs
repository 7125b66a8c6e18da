pub mod companies;
pub mod paginate;
pub mod workstations;

pub use companies::load_companies;
pub use paginate::{collect_all, collect_virtual_machines};
pub use workstations::collect_workstation_jobs;

use serde_json::Value;

/// The `data` array of an upstream envelope, if present and non-empty.
pub(crate) fn data_items(body: &Value) -> Option<&Vec<Value>> {
    body.get("data")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
}
