//! The aggregation engine: pure, single-pass transformations from a flat
//! `&[SalesRecord]` slice to the grouped, ranked and derived structures the
//! dashboard renders.
//!
//! Every aggregator recomputes from the full record set on each call, holds
//! no state and performs no I/O, so callers may run them concurrently over
//! the same immutable slice.

pub mod dimensions;
pub mod discount;
pub mod group;
pub mod hierarchy;
pub mod rank;
pub mod summary;
pub mod time_series;

pub use dimensions::{
    profit_by_segment, region_performance, sales_by_category, shipping_modes, top_customers,
    top_products, top_states, top_subcategories,
};
pub use discount::{discount_impact, discount_profit};
pub use hierarchy::customer_treemap;
pub use summary::summary;
pub use time_series::sales_over_time;
