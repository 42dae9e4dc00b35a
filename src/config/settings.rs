//! Renderer configuration settings and environment variable handling

use std::env;
use crate::types::AddressSize;

// Configuration constants
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10;
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 1;
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_RPC_MAX_ATTEMPTS: u32 = 3;
pub const MAX_RPC_MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    /// Raw pool address text, forwarded to the query unvalidated.
    pub pool_address: String,
    pub block_explorer_url: Option<String>,
    pub address_size: AddressSize,
    pub refresh_interval_secs: u64,
    pub output_dir: String,
    pub rpc_max_attempts: u32,
}

impl Config {
    pub fn load() -> Self {
        Self::load_with(|key| env::var(key).ok())
    }

    pub fn load_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            rpc_url: lookup("RPC_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            pool_address: lookup("POOL_ADDRESS")
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            block_explorer_url: lookup("BLOCK_EXPLORER_URL")
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty()),
            address_size: lookup("ADDRESS_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(AddressSize::Lg),
            refresh_interval_secs: lookup("REFRESH_INTERVAL_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
                .clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS),
            output_dir: lookup("OUTPUT_DIR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            rpc_max_attempts: lookup("RPC_MAX_ATTEMPTS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RPC_MAX_ATTEMPTS)
                .clamp(1, MAX_RPC_MAX_ATTEMPTS),
        }
    }
}
