use serde::Serialize;
use serde_json::Value;

/// Job name used when the upstream record carries none.
pub const UNKNOWN_JOB_NAME: &str = "Unknown";

/// A protected virtual machine as reported by the upstream listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VirtualMachine {
    pub organization_uid: Option<String>,
    pub used_source_size: Option<u64>,
}

impl VirtualMachine {
    pub fn from_json(value: &Value) -> Self {
        Self {
            organization_uid: string_field(value, "organizationUid"),
            used_source_size: size_field(value, "usedSourceSize"),
        }
    }
}

/// A workstation backup job managed by the console.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkstationJob {
    pub organization_uid: Option<String>,
    pub job_name: String,
    pub source_size: Option<u64>,
}

impl WorkstationJob {
    pub fn from_json(value: &Value) -> Self {
        Self {
            organization_uid: string_field(value, "organizationUid"),
            job_name: value
                .get("jobName")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_JOB_NAME)
                .to_string(),
            source_size: size_field(value, "sourceSize"),
        }
    }
}

/// Non-empty string field, anything else counts as absent.
fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Non-negative byte count. Floats are truncated; negatives and other types are absent.
fn size_field(value: &Value, key: &str) -> Option<u64> {
    let field = value.get(key)?;
    field.as_u64().or_else(|| {
        field
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f as u64)
    })
}
