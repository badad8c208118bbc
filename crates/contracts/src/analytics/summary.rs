use serde::{Deserialize, Serialize};

/// Whole-dataset scalar rollups for the KPI cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_sales: f64,
    pub total_profit: f64,
    /// Cardinality of distinct order ids.
    pub order_count: usize,
    /// Cardinality of distinct customer ids.
    pub customer_count: usize,
    /// total sales / distinct orders, 2 decimals; 0 when there are no orders.
    pub avg_order_value: f64,
    /// total profit / total sales × 100, 2 decimals; `null` when total sales
    /// is 0.
    pub profit_margin: Option<f64>,
}
