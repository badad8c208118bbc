use axum::{routing::get, Router};

use crate::handlers;

/// All application routes. Every analytics endpoint is a pure read over the
/// in-memory dataset.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Raw records for the data grid
        .route("/api/records", get(handlers::records::list))
        // Aggregates, one per dashboard widget
        .route("/api/analytics/summary", get(handlers::analytics::summary))
        .route(
            "/api/analytics/category-sales",
            get(handlers::analytics::category_sales),
        )
        .route(
            "/api/analytics/subcategory-sales",
            get(handlers::analytics::subcategory_sales),
        )
        .route(
            "/api/analytics/segment-profit",
            get(handlers::analytics::segment_profit),
        )
        .route(
            "/api/analytics/region-performance",
            get(handlers::analytics::region_performance),
        )
        .route(
            "/api/analytics/state-performance",
            get(handlers::analytics::state_performance),
        )
        .route(
            "/api/analytics/top-products",
            get(handlers::analytics::top_products),
        )
        .route(
            "/api/analytics/top-customers",
            get(handlers::analytics::top_customers),
        )
        .route(
            "/api/analytics/customer-treemap",
            get(handlers::analytics::customer_treemap),
        )
        .route(
            "/api/analytics/shipping-modes",
            get(handlers::analytics::shipping_modes),
        )
        .route(
            "/api/analytics/sales-over-time",
            get(handlers::analytics::sales_over_time),
        )
        .route(
            "/api/analytics/discount-impact",
            get(handlers::analytics::discount_impact),
        )
        .route(
            "/api/analytics/discount-profit",
            get(handlers::analytics::discount_profit),
        )
}
