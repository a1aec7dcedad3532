//! Ceiling lookup over the sorted per-sample timestamps.

/// Index of the first timestamp at or past `query_ms`, clamped to the
/// last sample when the query runs off the end. `None` on an empty
/// slice.
///
/// The slice is sorted (enforced at load time), so a binary search gives
/// the same answer as a forward scan, ties included: a query exactly
/// matching a timestamp lands on that sample, never the next one.
pub fn ceiling_index(times_ms: &[u64], query_ms: f64) -> Option<usize> {
    if times_ms.is_empty() {
        return None;
    }

    let index = times_ms.partition_point(|&t| (t as f64) < query_ms);
    Some(index.min(times_ms.len() - 1))
}
