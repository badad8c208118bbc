pub mod analytics;
pub mod records;
