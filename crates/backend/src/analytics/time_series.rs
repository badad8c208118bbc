use chrono::Datelike;
use contracts::analytics::{SalesTimeline, TimeBucket};
use contracts::records::SalesRecord;

use crate::analytics::group::fold_groups;
use crate::shared::format::round2;

/// Monthly sales/profit timeline with growth of the latest month over the
/// previous one.
///
/// Buckets are keyed `YYYY-MM` (zero-padded), so the ascending sort is plain
/// lexicographic. Growth is computed from the rounded bucket values the
/// dashboard displays, not the raw sums.
pub fn sales_over_time(records: &[SalesRecord]) -> SalesTimeline {
    let mut points: Vec<TimeBucket> = fold_groups(
        records,
        |r| format!("{:04}-{:02}", r.order_date.year(), r.order_date.month()),
        |_| (0.0f64, 0.0f64),
        |acc, r| {
            acc.0 += r.sales;
            acc.1 += r.profit;
        },
    )
    .into_iter()
    .map(|(date, (sales, profit))| TimeBucket {
        date,
        sales: round2(sales),
        profit: round2(profit),
    })
    .collect();

    points.sort_by(|a, b| a.date.cmp(&b.date));

    let sales_growth = growth(&points, |p| p.sales);
    let profit_growth = growth(&points, |p| p.profit);

    SalesTimeline {
        points,
        sales_growth,
        profit_growth,
    }
}

/// Period-over-period growth of the two most recent buckets, percent.
///
/// Fewer than 2 buckets → 0. Previous bucket at 0 → 100, a fixed convention
/// the dashboard depends on (not a mathematically exact rate).
fn growth(points: &[TimeBucket], metric: impl Fn(&TimeBucket) -> f64) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let last = metric(&points[points.len() - 1]);
    let prev = metric(&points[points.len() - 2]);
    if prev == 0.0 {
        100.0
    } else {
        round2((last - prev) / prev * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: (i32, u32, u32), sales: f64, profit: f64) -> SalesRecord {
        SalesRecord {
            order_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            sales,
            profit,
            ..Default::default()
        }
    }

    #[test]
    fn test_buckets_sorted_ascending() {
        let records = vec![
            record((2024, 3, 10), 50.0, 5.0),
            record((2023, 12, 1), 20.0, 2.0),
            record((2024, 3, 20), 30.0, 3.0),
            record((2024, 1, 5), 10.0, 1.0),
        ];

        let timeline = sales_over_time(&records);
        let keys: Vec<&str> = timeline.points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(keys, vec!["2023-12", "2024-01", "2024-03"]);
        assert_eq!(timeline.points[2].sales, 80.0);
        assert_eq!(timeline.points[2].profit, 8.0);
    }

    #[test]
    fn test_growth_between_last_two_months() {
        let records = vec![
            record((2024, 1, 1), 200.0, 40.0),
            record((2024, 2, 1), 300.0, 30.0),
        ];

        let timeline = sales_over_time(&records);
        assert_eq!(timeline.sales_growth, 50.0);
        assert_eq!(timeline.profit_growth, -25.0);
    }

    #[test]
    fn test_growth_zero_with_single_bucket() {
        let timeline = sales_over_time(&[record((2024, 1, 1), 100.0, 10.0)]);
        assert_eq!(timeline.sales_growth, 0.0);
        assert_eq!(timeline.profit_growth, 0.0);
    }

    #[test]
    fn test_growth_hundred_when_previous_is_zero() {
        let records = vec![
            record((2024, 1, 15), 0.0, 0.0),
            record((2024, 2, 15), 500.0, 50.0),
        ];

        let timeline = sales_over_time(&records);
        assert_eq!(timeline.sales_growth, 100.0);
        assert_eq!(timeline.profit_growth, 100.0);
    }

    #[test]
    fn test_empty_input() {
        let timeline = sales_over_time(&[]);
        assert!(timeline.points.is_empty());
        assert_eq!(timeline.sales_growth, 0.0);
        assert_eq!(timeline.profit_growth, 0.0);
    }
}
