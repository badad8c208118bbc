use serde::{Deserialize, Serialize};

/// Leaf of the segment → customer treemap: one customer's summed sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerLeaf {
    pub name: String,
    /// Summed sales, rounded to 2 decimals.
    pub value: f64,
}

/// Top-level treemap node: one customer segment with its top customers.
///
/// Children are sorted descending by value and truncated to 10 per segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentNode {
    pub name: String,
    pub children: Vec<CustomerLeaf>,
}
