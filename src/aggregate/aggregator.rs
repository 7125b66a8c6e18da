use indexmap::IndexMap;
use crate::models::AggregationEntry;

pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Round to two decimal places, ties to even on the exact binary value.
/// Formatting rounds the exact decimal expansion, which scaling by 100 does not.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Bytes to gigabytes (1024^3), rounded to two places. Absent sizes count as 0.
pub fn bytes_to_gb(bytes: Option<u64>) -> f64 {
    round2(bytes.unwrap_or(0) as f64 / BYTES_PER_GB)
}

/// Sum rounded per-record sizes by key, in first-seen key order.
pub fn sum_by_key<T, K, S>(records: &[T], key_fn: K, size_fn: S) -> Vec<AggregationEntry>
where
    K: Fn(&T) -> String,
    S: Fn(&T) -> Option<u64>,
{
    let mut totals: IndexMap<String, f64> = IndexMap::new();
    for record in records {
        *totals.entry(key_fn(record)).or_insert(0.0) += bytes_to_gb(size_fn(record));
    }
    totals
        .into_iter()
        .map(|(key, total)| AggregationEntry::new(key, round2(total)))
        .collect()
}

/// Optionally drop non-positive totals, then sort by key ignoring case.
/// Entries whose keys differ only in case keep their relative order.
pub fn finalize(mut entries: Vec<AggregationEntry>, filter_non_positive: bool) -> Vec<AggregationEntry> {
    if filter_non_positive {
        entries.retain(|e| e.total_gb > 0.0);
    }
    entries.sort_by_cached_key(|e| e.key.to_lowercase());
    entries
}

pub fn aggregate<T, K, S>(records: &[T], key_fn: K, size_fn: S, filter_non_positive: bool) -> Vec<AggregationEntry>
where
    K: Fn(&T) -> String,
    S: Fn(&T) -> Option<u64>,
{
    finalize(sum_by_key(records, key_fn, size_fn), filter_non_positive)
}
