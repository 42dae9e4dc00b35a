//! Pool Details - on-chain liquidity pool metadata rendered as an HTML table
//!
//! Reads a pool's name, symbol, vault and supply over JSON-RPC, keeps the
//! latest result in an observable query, and renders a fixed five-row
//! attribute/value table from whatever data is currently available.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod pools;
pub mod render;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{PoolError, PoolResult};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
