//! DTOs emitted by the aggregation engine.
//!
//! Every type here is a value object recomputed in full on each request.
//! Wire fields are camelCase because the dashboard chart components bind to
//! them directly.

pub mod dimensions;
pub mod discount;
pub mod summary;
pub mod time_series;
pub mod treemap;

pub use dimensions::*;
pub use discount::*;
pub use summary::*;
pub use time_series::*;
pub use treemap::*;
