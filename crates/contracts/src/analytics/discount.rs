use serde::{Deserialize, Serialize};

/// Accumulated figures for one fixed discount range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRangeStats {
    /// Range label, e.g. `"0%"`, `"11-20%"`, `">50%"`.
    pub name: String,
    pub sales: f64,
    pub profit: f64,
    /// Estimated profit lost to discounting: Σ (sales/(1−discount) − sales)
    /// over the range's records, 2 decimals.
    pub lost_profit: f64,
    pub count: usize,
}

/// Discount-impact rollup across the seven fixed ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountImpact {
    /// Only ranges that received at least one record, in range-table order.
    pub ranges: Vec<DiscountRangeStats>,
    /// Sum of the per-range lost-profit figures.
    pub total_lost_profit: f64,
    /// Share of records with a nonzero discount, percent, 1 decimal.
    pub discounted_share: f64,
    /// Label of the range with the most records; `null` on empty input.
    pub most_common_range: Option<String>,
}

/// Aggregate for one exact discount level (whole percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountLevelStats {
    /// Discount as a whole percentage (0..=100).
    pub discount: u32,
    /// Mean profit per record at this level, 2 decimals.
    pub avg_profit: f64,
    pub total_sales: f64,
    pub count: usize,
}

/// Discount-vs-profit scatter data plus headline levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountProfit {
    pub levels: Vec<DiscountLevelStats>,
    /// Nonzero discount level with the highest average profit.
    pub most_profitable: Option<DiscountLevelStats>,
    /// Nonzero discount level applied to the most records.
    pub most_common: Option<DiscountLevelStats>,
}
