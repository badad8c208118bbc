use std::cmp::Ordering;

/// Sort `entries` descending by `metric` and keep the first `n`.
///
/// The sort is stable, so ties keep input order and results are
/// deterministic. Truncation happens after the full sort. NaN metrics
/// compare as equal to everything, which leaves such entries where the
/// stable sort finds them.
pub fn top_n_by<T>(mut entries: Vec<T>, n: usize, metric: impl Fn(&T) -> f64) -> Vec<T> {
    entries.sort_by(|a, b| metric(b).partial_cmp(&metric(a)).unwrap_or(Ordering::Equal));
    entries.truncate(n);
    entries
}
