use serde::{Deserialize, Serialize};

/// One calendar-month bucket of the sales/profit timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBucket {
    /// Period key in `YYYY-MM` form (zero-padded, so lexicographic order is
    /// chronological order).
    pub date: String,
    pub sales: f64,
    pub profit: f64,
}

/// Monthly timeline plus period-over-period growth of the two latest buckets.
///
/// Growth policy: fewer than 2 buckets → 0; previous bucket value 0 and
/// latest nonzero → 100. Both are documented simplifications the dashboard
/// relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTimeline {
    /// Buckets sorted ascending by period key.
    pub points: Vec<TimeBucket>,
    /// Sales growth of the latest bucket vs the previous, percent, 2 decimals.
    pub sales_growth: f64,
    /// Profit growth of the latest bucket vs the previous, percent, 2 decimals.
    pub profit_growth: f64,
}
