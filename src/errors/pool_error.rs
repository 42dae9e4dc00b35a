//! Custom error types for pool data retrieval

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    #[error("Contract interaction failed: {contract} - {message}")]
    Contract {
        contract: Address,
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid pool address {input:?}: {reason}")]
    InvalidAddress {
        input: String,
        reason: String,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type PoolResult<T> = Result<T, PoolError>;

impl PoolError {
    /// Stable label used in logs and snapshot records.
    pub fn kind(&self) -> &'static str {
        match self {
            PoolError::Network { .. } => "network",
            PoolError::Contract { .. } => "contract",
            PoolError::InvalidAddress { .. } => "invalid_address",
            PoolError::DataParsing { .. } => "parse_error",
        }
    }
}
