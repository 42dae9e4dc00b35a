//! Pool data retrieval and query state

pub mod contract;
pub mod query;

pub use contract::*;
pub use query::*;
