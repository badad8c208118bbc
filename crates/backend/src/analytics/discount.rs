use contracts::analytics::{DiscountImpact, DiscountLevelStats, DiscountProfit, DiscountRangeStats};
use contracts::records::SalesRecord;

use crate::analytics::group::fold_groups;
use crate::shared::format::{round1, round2};

/// Fixed discount ranges: label, exclusive lower bound, inclusive upper
/// bound. Together they cover [0, 1] without gaps; 0 is its own singleton
/// bucket and boundary values belong to the lower-numbered range.
const DISCOUNT_RANGES: [(&str, f64, f64); 7] = [
    ("0%", 0.0, 0.0),
    ("1-10%", 0.0, 0.1),
    ("11-20%", 0.1, 0.2),
    ("21-30%", 0.2, 0.3),
    ("31-40%", 0.3, 0.4),
    ("41-50%", 0.4, 0.5),
    (">50%", 0.5, 1.0),
];

/// Index into `DISCOUNT_RANGES` for a discount fraction. Linear scan, first
/// match wins; values above 1 land in the top range.
fn range_index(discount: f64) -> usize {
    if discount <= 0.0 {
        return 0;
    }
    for (i, (_, lower, upper)) in DISCOUNT_RANGES.iter().enumerate().skip(1) {
        if discount > *lower && discount <= *upper {
            return i;
        }
    }
    DISCOUNT_RANGES.len() - 1
}

#[derive(Clone, Copy, Default)]
struct RangeAgg {
    sales: f64,
    profit: f64,
    lost_profit: f64,
    count: usize,
}

/// Per-range discount rollup plus the headline impact figures.
///
/// Lost profit reconstructs the pre-discount price as
/// `sales / (1 − discount)`; a discount of exactly 1 follows IEEE division
/// (infinite loss on positive sales), a documented policy rather than a
/// guarded case.
pub fn discount_impact(records: &[SalesRecord]) -> DiscountImpact {
    let mut ranges = [RangeAgg::default(); DISCOUNT_RANGES.len()];

    for r in records {
        let acc = &mut ranges[range_index(r.discount)];
        acc.sales += r.sales;
        acc.profit += r.profit;
        acc.count += 1;
        if r.discount > 0.0 {
            let original_price = r.sales / (1.0 - r.discount);
            acc.lost_profit += original_price - r.sales;
        }
    }

    let stats: Vec<DiscountRangeStats> = DISCOUNT_RANGES
        .iter()
        .zip(ranges.iter())
        .filter(|(_, acc)| acc.count > 0)
        .map(|((name, _, _), acc)| DiscountRangeStats {
            name: name.to_string(),
            sales: round2(acc.sales),
            profit: round2(acc.profit),
            lost_profit: round2(acc.lost_profit),
            count: acc.count,
        })
        .collect();

    let total_lost_profit = round2(stats.iter().map(|s| s.lost_profit).sum());

    let total_count: usize = stats.iter().map(|s| s.count).sum();
    let discounted_count: usize = stats
        .iter()
        .filter(|s| s.name != "0%")
        .map(|s| s.count)
        .sum();
    let discounted_share = if total_count == 0 {
        0.0
    } else {
        round1(discounted_count as f64 / total_count as f64 * 100.0)
    };

    // First range in table order wins a tie on count.
    let most_common_range = stats
        .iter()
        .fold(None::<&DiscountRangeStats>, |best, s| match best {
            Some(b) if b.count >= s.count => Some(b),
            _ => Some(s),
        })
        .map(|s| s.name.clone());

    DiscountImpact {
        ranges: stats,
        total_lost_profit,
        discounted_share,
        most_common_range,
    }
}

/// Per-discount-level stats (whole percent) for the discount/profit scatter,
/// with the most profitable and most common nonzero levels.
pub fn discount_profit(records: &[SalesRecord]) -> DiscountProfit {
    struct LevelAgg {
        profit: f64,
        sales: f64,
        count: usize,
    }

    let mut levels: Vec<DiscountLevelStats> = fold_groups(
        records,
        |r| (r.discount * 100.0).round() as u32,
        |_| LevelAgg {
            profit: 0.0,
            sales: 0.0,
            count: 0,
        },
        |acc, r| {
            acc.profit += r.profit;
            acc.sales += r.sales;
            acc.count += 1;
        },
    )
    .into_iter()
    .map(|(discount, acc)| DiscountLevelStats {
        discount,
        avg_profit: round2(acc.profit / acc.count as f64),
        total_sales: round2(acc.sales),
        count: acc.count,
    })
    .collect();

    levels.sort_by_key(|l| l.discount);

    let nonzero = || levels.iter().filter(|l| l.discount > 0);
    let most_profitable = nonzero()
        .fold(None::<&DiscountLevelStats>, |best, l| match best {
            Some(b) if b.avg_profit >= l.avg_profit => Some(b),
            _ => Some(l),
        })
        .cloned();
    let most_common = nonzero()
        .fold(None::<&DiscountLevelStats>, |best, l| match best {
            Some(b) if b.count >= l.count => Some(b),
            _ => Some(l),
        })
        .cloned();

    DiscountProfit {
        levels,
        most_profitable,
        most_common,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(discount: f64, sales: f64, profit: f64) -> SalesRecord {
        SalesRecord {
            discount,
            sales,
            profit,
            ..Default::default()
        }
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(DISCOUNT_RANGES[range_index(0.0)].0, "0%");
        assert_eq!(DISCOUNT_RANGES[range_index(0.005)].0, "1-10%");
        assert_eq!(DISCOUNT_RANGES[range_index(0.1)].0, "1-10%");
        assert_eq!(DISCOUNT_RANGES[range_index(0.2)].0, "11-20%");
        assert_eq!(DISCOUNT_RANGES[range_index(0.5)].0, "41-50%");
        assert_eq!(DISCOUNT_RANGES[range_index(0.51)].0, ">50%");
        assert_eq!(DISCOUNT_RANGES[range_index(1.0)].0, ">50%");
    }

    #[test]
    fn test_only_populated_ranges_emitted() {
        let records = vec![
            record(0.0, 100.0, 10.0),
            record(0.2, 80.0, 8.0),
            record(0.2, 80.0, 8.0),
            record(0.6, 40.0, -4.0),
        ];

        let impact = discount_impact(&records);
        let names: Vec<&str> = impact.ranges.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["0%", "11-20%", ">50%"]);
        assert_eq!(impact.ranges[0].count, 1);
        assert_eq!(impact.ranges[1].count, 2);
        assert_eq!(impact.ranges[2].count, 1);
    }

    #[test]
    fn test_lost_profit_reconstruction() {
        // 80 at 20% off: original 100, lost 20. Two records double it.
        let records = vec![record(0.2, 80.0, 8.0), record(0.2, 80.0, 8.0)];
        let impact = discount_impact(&records);
        assert_eq!(impact.ranges[0].lost_profit, 40.0);
        assert_eq!(impact.total_lost_profit, 40.0);
    }

    #[test]
    fn test_discounted_share_and_most_common() {
        let records = vec![
            record(0.0, 10.0, 1.0),
            record(0.2, 10.0, 1.0),
            record(0.2, 10.0, 1.0),
            record(0.6, 10.0, 1.0),
        ];

        let impact = discount_impact(&records);
        assert_eq!(impact.discounted_share, 75.0);
        assert_eq!(impact.most_common_range.as_deref(), Some("11-20%"));
    }

    #[test]
    fn test_most_common_tie_prefers_lower_range() {
        let records = vec![record(0.05, 10.0, 1.0), record(0.25, 10.0, 1.0)];
        let impact = discount_impact(&records);
        assert_eq!(impact.most_common_range.as_deref(), Some("1-10%"));
    }

    #[test]
    fn test_empty_input() {
        let impact = discount_impact(&[]);
        assert!(impact.ranges.is_empty());
        assert_eq!(impact.total_lost_profit, 0.0);
        assert_eq!(impact.discounted_share, 0.0);
        assert_eq!(impact.most_common_range, None);

        let profit = discount_profit(&[]);
        assert!(profit.levels.is_empty());
        assert_eq!(profit.most_profitable, None);
        assert_eq!(profit.most_common, None);
    }

    #[test]
    fn test_discount_profit_levels() {
        let records = vec![
            record(0.0, 100.0, 30.0),
            record(0.2, 50.0, 10.0),
            record(0.2, 50.0, 20.0),
            record(0.4, 50.0, 40.0),
        ];

        let result = discount_profit(&records);
        let discounts: Vec<u32> = result.levels.iter().map(|l| l.discount).collect();
        assert_eq!(discounts, vec![0, 20, 40]);

        let at_20 = &result.levels[1];
        assert_eq!(at_20.count, 2);
        assert_eq!(at_20.avg_profit, 15.0);
        assert_eq!(at_20.total_sales, 100.0);

        assert_eq!(result.most_profitable.as_ref().unwrap().discount, 40);
        assert_eq!(result.most_common.as_ref().unwrap().discount, 20);
    }
}
