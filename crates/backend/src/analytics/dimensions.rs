use std::collections::HashSet;

use contracts::analytics::{
    CategorySales, CustomerProfit, ProductSales, RegionPerformance, SalesShare, SegmentProfit,
    ShippingModeStats, StatePerformance,
};
use contracts::records::SalesRecord;

use crate::analytics::group::fold_groups;
use crate::analytics::rank::top_n_by;
use crate::shared::format::{margin_pct, round1, round2};

// ---------------------------------------------------------------------------
// Internal accumulators
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MoneyAgg {
    sales: f64,
    profit: f64,
}

struct OrdersAgg {
    sales: f64,
    profit: f64,
    orders: HashSet<String>,
}

impl OrdersAgg {
    fn new() -> Self {
        Self {
            sales: 0.0,
            profit: 0.0,
            orders: HashSet::new(),
        }
    }

    fn add(&mut self, r: &SalesRecord) {
        self.sales += r.sales;
        self.profit += r.profit;
        self.orders.insert(r.order_id.clone());
    }
}

// ---------------------------------------------------------------------------
// Dimensional aggregators
// ---------------------------------------------------------------------------

/// Sales, profit and margin per category, in first-seen order.
pub fn sales_by_category(records: &[SalesRecord]) -> Vec<CategorySales> {
    fold_groups(
        records,
        |r| r.category.clone(),
        |_| MoneyAgg::default(),
        |acc, r| {
            acc.sales += r.sales;
            acc.profit += r.profit;
        },
    )
    .into_iter()
    .map(|(name, acc)| CategorySales {
        name,
        sales: round2(acc.sales),
        profit: round2(acc.profit),
        profit_margin: margin_pct(acc.profit, acc.sales),
    })
    .collect()
}

/// Top `n` subcategories by total sales.
pub fn top_subcategories(records: &[SalesRecord], n: usize) -> Vec<SalesShare> {
    let shares: Vec<SalesShare> = fold_groups(
        records,
        |r| r.sub_category.clone(),
        |_| 0.0f64,
        |acc, r| *acc += r.sales,
    )
    .into_iter()
    .map(|(name, total)| SalesShare {
        name,
        value: round2(total),
    })
    .collect();

    top_n_by(shares, n, |s| s.value)
}

/// Sales, profit and margin per customer segment.
pub fn profit_by_segment(records: &[SalesRecord]) -> Vec<SegmentProfit> {
    fold_groups(
        records,
        |r| r.segment.clone(),
        |_| MoneyAgg::default(),
        |acc, r| {
            acc.sales += r.sales;
            acc.profit += r.profit;
        },
    )
    .into_iter()
    .map(|(name, acc)| SegmentProfit {
        name,
        sales: round2(acc.sales),
        profit: round2(acc.profit),
        profit_margin: margin_pct(acc.profit, acc.sales),
    })
    .collect()
}

/// Sales, profit, distinct orders and per-order average by region.
pub fn region_performance(records: &[SalesRecord]) -> Vec<RegionPerformance> {
    fold_groups(
        records,
        |r| r.region.clone(),
        |_| OrdersAgg::new(),
        OrdersAgg::add,
    )
    .into_iter()
    .map(|(name, acc)| {
        let orders = acc.orders.len();
        RegionPerformance {
            name,
            sales: round2(acc.sales),
            profit: round2(acc.profit),
            profit_margin: margin_pct(acc.profit, acc.sales),
            orders,
            avg_sale: round2(acc.sales / orders as f64),
        }
    })
    .collect()
}

/// Top `n` states by total sales. Region is taken from each state's first
/// record; conflicting region values for a state are not reconciled.
pub fn top_states(records: &[SalesRecord], n: usize) -> Vec<StatePerformance> {
    struct StateAgg {
        region: String,
        inner: OrdersAgg,
    }

    let states: Vec<StatePerformance> = fold_groups(
        records,
        |r| r.state.clone(),
        |r| StateAgg {
            region: r.region.clone(),
            inner: OrdersAgg::new(),
        },
        |acc, r| acc.inner.add(r),
    )
    .into_iter()
    .map(|(name, acc)| {
        let orders = acc.inner.orders.len();
        StatePerformance {
            name,
            region: acc.region,
            sales: round2(acc.inner.sales),
            profit: round2(acc.inner.profit),
            profit_margin: margin_pct(acc.inner.profit, acc.inner.sales),
            orders,
            avg_order_value: round2(acc.inner.sales / orders as f64),
        }
    })
    .collect();

    top_n_by(states, n, |s| s.sales)
}

/// Top `n` products by total sales, keyed by product id.
pub fn top_products(records: &[SalesRecord], n: usize) -> Vec<ProductSales> {
    struct ProductAgg {
        name: String,
        category: String,
        sub_category: String,
        sales: f64,
        quantity: u64,
        profit: f64,
    }

    let products: Vec<ProductSales> = fold_groups(
        records,
        |r| r.product_id.clone(),
        |r| ProductAgg {
            name: r.product_name.clone(),
            category: r.category.clone(),
            sub_category: r.sub_category.clone(),
            sales: 0.0,
            quantity: 0,
            profit: 0.0,
        },
        |acc, r| {
            acc.sales += r.sales;
            acc.quantity += u64::from(r.quantity);
            acc.profit += r.profit;
        },
    )
    .into_iter()
    .map(|(id, acc)| ProductSales {
        id,
        name: acc.name,
        category: acc.category,
        sub_category: acc.sub_category,
        sales: round2(acc.sales),
        quantity: acc.quantity,
        profit: round2(acc.profit),
        profit_margin: margin_pct(acc.profit, acc.sales),
    })
    .collect();

    top_n_by(products, n, |p| p.sales)
}

/// Top `n` customers by total profit, keyed by customer id.
pub fn top_customers(records: &[SalesRecord], n: usize) -> Vec<CustomerProfit> {
    struct CustomerAgg {
        name: String,
        segment: String,
        inner: OrdersAgg,
    }

    let customers: Vec<CustomerProfit> = fold_groups(
        records,
        |r| r.customer_id.clone(),
        |r| CustomerAgg {
            name: r.customer_name.clone(),
            segment: r.segment.clone(),
            inner: OrdersAgg::new(),
        },
        |acc, r| acc.inner.add(r),
    )
    .into_iter()
    .map(|(id, acc)| {
        let order_count = acc.inner.orders.len();
        CustomerProfit {
            id,
            name: acc.name,
            segment: acc.segment,
            sales: round2(acc.inner.sales),
            profit: round2(acc.inner.profit),
            order_count,
            profit_per_order: round2(acc.inner.profit / order_count as f64),
        }
    })
    .collect();

    top_n_by(customers, n, |c| c.profit)
}

/// Shipment count, sales, profit and average delivery time per ship mode.
pub fn shipping_modes(records: &[SalesRecord]) -> Vec<ShippingModeStats> {
    struct ShipAgg {
        count: usize,
        sales: f64,
        profit: f64,
        delivery_days: i64,
    }

    fold_groups(
        records,
        |r| r.ship_mode.clone(),
        |_| ShipAgg {
            count: 0,
            sales: 0.0,
            profit: 0.0,
            delivery_days: 0,
        },
        |acc, r| {
            acc.count += 1;
            acc.sales += r.sales;
            acc.profit += r.profit;
            acc.delivery_days += (r.ship_date - r.order_date).num_days();
        },
    )
    .into_iter()
    .map(|(name, acc)| ShippingModeStats {
        name,
        count: acc.count,
        sales: round2(acc.sales),
        profit: round2(acc.profit),
        avg_delivery_days: round1(acc.delivery_days as f64 / acc.count as f64),
    })
    .collect()
}
