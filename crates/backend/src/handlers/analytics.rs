use axum::{extract::Query, Json};
use serde::Deserialize;

use contracts::analytics::*;

use crate::analytics;
use crate::shared::data::store;

/// Default bound for the top-N endpoints.
const DEFAULT_TOP_N: usize = 10;

#[derive(Deserialize)]
pub struct TopParams {
    pub limit: Option<usize>,
}

impl TopParams {
    fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_TOP_N)
    }
}

pub async fn summary() -> Json<SummaryStats> {
    Json(analytics::summary(store::get_dataset()))
}

pub async fn category_sales() -> Json<Vec<CategorySales>> {
    Json(analytics::sales_by_category(store::get_dataset()))
}

pub async fn subcategory_sales(Query(params): Query<TopParams>) -> Json<Vec<SalesShare>> {
    Json(analytics::top_subcategories(store::get_dataset(), params.limit()))
}

pub async fn segment_profit() -> Json<Vec<SegmentProfit>> {
    Json(analytics::profit_by_segment(store::get_dataset()))
}

pub async fn region_performance() -> Json<Vec<RegionPerformance>> {
    Json(analytics::region_performance(store::get_dataset()))
}

pub async fn state_performance(Query(params): Query<TopParams>) -> Json<Vec<StatePerformance>> {
    Json(analytics::top_states(store::get_dataset(), params.limit()))
}

pub async fn top_products(Query(params): Query<TopParams>) -> Json<Vec<ProductSales>> {
    Json(analytics::top_products(store::get_dataset(), params.limit()))
}

pub async fn top_customers(Query(params): Query<TopParams>) -> Json<Vec<CustomerProfit>> {
    Json(analytics::top_customers(store::get_dataset(), params.limit()))
}

pub async fn customer_treemap() -> Json<Vec<SegmentNode>> {
    Json(analytics::customer_treemap(store::get_dataset()))
}

pub async fn shipping_modes() -> Json<Vec<ShippingModeStats>> {
    Json(analytics::shipping_modes(store::get_dataset()))
}

pub async fn sales_over_time() -> Json<SalesTimeline> {
    Json(analytics::sales_over_time(store::get_dataset()))
}

pub async fn discount_impact() -> Json<DiscountImpact> {
    Json(analytics::discount_impact(store::get_dataset()))
}

pub async fn discount_profit() -> Json<DiscountProfit> {
    Json(analytics::discount_profit(store::get_dataset()))
}
