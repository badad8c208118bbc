use std::collections::HashSet;

use contracts::analytics::SummaryStats;
use contracts::records::SalesRecord;

use crate::shared::format::{margin_pct, round2};

/// Whole-dataset rollups for the KPI cards, in a single pass.
pub fn summary(records: &[SalesRecord]) -> SummaryStats {
    let mut total_sales = 0.0;
    let mut total_profit = 0.0;
    let mut orders: HashSet<&str> = HashSet::new();
    let mut customers: HashSet<&str> = HashSet::new();

    for r in records {
        total_sales += r.sales;
        total_profit += r.profit;
        orders.insert(&r.order_id);
        customers.insert(&r.customer_id);
    }

    let order_count = orders.len();
    let avg_order_value = if order_count == 0 {
        0.0
    } else {
        round2(total_sales / order_count as f64)
    };

    SummaryStats {
        total_sales: round2(total_sales),
        total_profit: round2(total_profit),
        order_count,
        customer_count: customers.len(),
        avg_order_value,
        profit_margin: margin_pct(total_profit, total_sales),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(order_id: &str, customer_id: &str, sales: f64, profit: f64) -> SalesRecord {
        SalesRecord {
            order_id: order_id.to_string(),
            customer_id: customer_id.to_string(),
            sales,
            profit,
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_rollups() {
        let records = vec![
            record("O-1", "C-1", 100.0, 10.0),
            record("O-1", "C-1", 50.0, 5.0),
            record("O-2", "C-2", 150.0, -15.0),
        ];

        let stats = summary(&records);
        assert_eq!(stats.total_sales, 300.0);
        assert_eq!(stats.total_profit, 0.0);
        assert_eq!(stats.order_count, 2);
        assert_eq!(stats.customer_count, 2);
        assert_eq!(stats.avg_order_value, 150.0);
        assert_eq!(stats.profit_margin, Some(0.0));
    }

    #[test]
    fn test_empty_input_is_zero_valued() {
        let stats = summary(&[]);
        assert_eq!(stats.total_sales, 0.0);
        assert_eq!(stats.total_profit, 0.0);
        assert_eq!(stats.order_count, 0);
        assert_eq!(stats.customer_count, 0);
        assert_eq!(stats.avg_order_value, 0.0);
        assert_eq!(stats.profit_margin, None);
    }
}
