/// Round a currency or percentage value to 2 decimal places for display.
///
/// Aggregators accumulate unrounded and round only at emission, so rounding
/// error never compounds across records.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place (delivery-day averages, share percentages).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Profit margin in percent: profit / sales × 100, rounded to 2 decimals.
///
/// A margin over zero sales is undefined; `None` lets the presentation layer
/// show "not available" instead of a misleading 0.
pub fn margin_pct(profit: f64, sales: f64) -> Option<f64> {
    if sales == 0.0 {
        None
    } else {
        Some(round2(profit / sales * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.166666), 4.17);
        assert_eq!(round2(-12.345), -12.35);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(600.0), 600.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(3.25), 3.3);
        assert_eq!(round1(3.0), 3.0);
    }

    #[test]
    fn test_margin_pct() {
        assert_eq!(margin_pct(25.0, 600.0), Some(4.17));
        assert_eq!(margin_pct(-5.0, 100.0), Some(-5.0));
        assert_eq!(margin_pct(10.0, 0.0), None);
        assert_eq!(margin_pct(0.0, 0.0), None);
    }
}
