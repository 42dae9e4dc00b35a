//! Network provider setup

use alloy::{
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use crate::{
    config::Config,
    network::retry::{retry_with_backoff, RetryConfig},
    ConcreteProvider,
};

pub async fn setup_provider(config: &Config) -> Result<Arc<ConcreteProvider>> {
    let rpc_url = config.rpc_url.parse::<Url>()
        .with_context(|| format!("Invalid RPC_URL: {}", config.rpc_url))?;

    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_http(rpc_url)
            .boxed()
    );

    info!("🔗 Testing connection to {}...", config.rpc_url);
    let block = retry_with_backoff(
        || async {
            provider.get_block_number().await
                .context("Failed to get block number")
        },
        &RetryConfig {
            max_attempts: 5,
            initial_delay_ms: 500,
            max_delay_ms: 10000,
            exponential_base: 2.0,
        },
        "RPC connection",
    ).await
    .map_err(|e| {
        warn!("⚠️ Network connection attempt failed: {}", e);
        anyhow::anyhow!("Network connection failed: {}", e)
    })?;

    info!("✅ Connected at block {}", block);
    Ok(provider)
}
