use contracts::analytics::{CustomerLeaf, SegmentNode};
use contracts::records::SalesRecord;

use crate::analytics::group::fold_groups;
use crate::analytics::rank::top_n_by;
use crate::shared::format::round2;

/// Children kept per segment node.
const CHILDREN_PER_SEGMENT: usize = 10;

struct CustomerAgg {
    name: String,
    segment: String,
    sales: f64,
}

/// Two-level segment → customer aggregation for the treemap.
///
/// Phase 1 sums sales per customer id, keeping the first-seen display name
/// and segment for that id (conflicting values are not reconciled). Phase 2
/// regroups the customer entries by segment; each segment's children are
/// rounded, sorted descending by value and truncated to the top 10.
pub fn customer_treemap(records: &[SalesRecord]) -> Vec<SegmentNode> {
    let customers = fold_groups(
        records,
        |r| r.customer_id.clone(),
        |r| CustomerAgg {
            name: r.customer_name.clone(),
            segment: r.segment.clone(),
            sales: 0.0,
        },
        |acc, r| acc.sales += r.sales,
    );

    fold_groups(
        &customers,
        |(_, c)| c.segment.clone(),
        |_| Vec::new(),
        |children: &mut Vec<CustomerLeaf>, (_, c)| {
            children.push(CustomerLeaf {
                name: c.name.clone(),
                value: round2(c.sales),
            });
        },
    )
    .into_iter()
    .map(|(name, children)| SegmentNode {
        name,
        children: top_n_by(children, CHILDREN_PER_SEGMENT, |c| c.value),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customer_id: &str, name: &str, segment: &str, sales: f64) -> SalesRecord {
        SalesRecord {
            customer_id: customer_id.to_string(),
            customer_name: name.to_string(),
            segment: segment.to_string(),
            sales,
            ..Default::default()
        }
    }

    #[test]
    fn test_two_level_grouping() {
        let records = vec![
            record("C-1", "Ana", "Consumer", 100.0),
            record("C-1", "Ana", "Consumer", 50.0),
            record("C-2", "Bo", "Consumer", 300.0),
            record("C-3", "Cy", "Corporate", 75.0),
        ];

        let tree = customer_treemap(&records);
        assert_eq!(tree.len(), 2);

        let consumer = &tree[0];
        assert_eq!(consumer.name, "Consumer");
        assert_eq!(consumer.children.len(), 2);
        // Sorted descending by value.
        assert_eq!(consumer.children[0].name, "Bo");
        assert_eq!(consumer.children[0].value, 300.0);
        assert_eq!(consumer.children[1].value, 150.0);

        assert_eq!(tree[1].name, "Corporate");
        assert_eq!(tree[1].children[0].value, 75.0);
    }

    #[test]
    fn test_leaf_sum_matches_segment_sales() {
        let records = vec![
            record("C-1", "Ana", "Consumer", 10.25),
            record("C-2", "Bo", "Consumer", 20.5),
            record("C-3", "Cy", "Corporate", 5.0),
        ];

        let tree = customer_treemap(&records);
        let consumer_total: f64 = tree[0].children.iter().map(|c| c.value).sum();
        let raw_total: f64 = records
            .iter()
            .filter(|r| r.segment == "Consumer")
            .map(|r| r.sales)
            .sum();
        assert_eq!(consumer_total, raw_total);
    }

    #[test]
    fn test_children_truncated_to_ten() {
        let mut records = Vec::new();
        for i in 0..15 {
            records.push(record(
                &format!("C-{i}"),
                &format!("Customer {i}"),
                "Consumer",
                i as f64,
            ));
        }

        let tree = customer_treemap(&records);
        assert_eq!(tree[0].children.len(), 10);
        // Largest first, smallest five cut off.
        assert_eq!(tree[0].children[0].value, 14.0);
        assert_eq!(tree[0].children[9].value, 5.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(customer_treemap(&[]).is_empty());
    }
}
