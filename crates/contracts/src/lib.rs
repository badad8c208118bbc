//! Shared contracts between the analytics engine and its consumers.
//!
//! `records` holds the canonical sales-transaction shape; `analytics` holds
//! the JSON DTOs produced by the aggregation engine and rendered by the
//! dashboard frontend.

pub mod analytics;
pub mod records;
