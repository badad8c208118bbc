use serde::{Deserialize, Serialize};

/// One named slice of the sales total (subcategory pie/bar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesShare {
    pub name: String,
    /// Summed sales, rounded to 2 decimals.
    pub value: f64,
}

/// Per-category row: sales plus the profitability figures the category
/// widget renders alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub name: String,
    pub sales: f64,
    pub profit: f64,
    /// profit / sales × 100, 2 decimals; `null` when the category has no
    /// sales.
    pub profit_margin: Option<f64>,
}

/// Per-segment profitability row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentProfit {
    pub name: String,
    pub sales: f64,
    pub profit: f64,
    /// profit / sales × 100, 2 decimals; `null` when the segment has no sales.
    pub profit_margin: Option<f64>,
}

/// Per-region performance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPerformance {
    pub name: String,
    pub sales: f64,
    pub profit: f64,
    pub profit_margin: Option<f64>,
    /// Distinct order count, not row count.
    pub orders: usize,
    /// sales / distinct orders, 2 decimals.
    pub avg_sale: f64,
}

/// Per-state performance row (top-N by sales).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatePerformance {
    pub name: String,
    /// Region of the first record seen for this state.
    pub region: String,
    pub sales: f64,
    pub profit: f64,
    pub profit_margin: Option<f64>,
    pub orders: usize,
    pub avg_order_value: f64,
}

/// Per-customer profitability row (top-N by profit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfit {
    pub id: String,
    pub name: String,
    pub segment: String,
    pub sales: f64,
    pub profit: f64,
    pub order_count: usize,
    /// profit / distinct orders, 2 decimals.
    pub profit_per_order: f64,
}

/// Per-product sales row (top-N by sales).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub id: String,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub sales: f64,
    pub quantity: u64,
    pub profit: f64,
    pub profit_margin: Option<f64>,
}

/// Per-shipping-mode row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingModeStats {
    pub name: String,
    /// Shipment (record) count.
    pub count: usize,
    pub sales: f64,
    pub profit: f64,
    /// Mean of (ship date − order date) in days, 1 decimal.
    pub avg_delivery_days: f64,
}
