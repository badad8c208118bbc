pub mod error;
pub mod loader;
pub mod remote;
pub mod store;

pub use error::DataError;
