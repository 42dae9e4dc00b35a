//! Pool Details - Main Entry Point
//!
//! Watches one pool and keeps `output/pools/details.html` in sync with it

use pool_details::*;
use anyhow::Result;
use std::path::Path;
use std::time::Duration;
use tokio::time;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = CONFIG.clone();

    // Initialize logging
    let _logging_guard = utils::setup_logging(&config.output_dir)?;
    utils::setup_output_directories(&config.output_dir)?;

    let pool_address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.pool_address.clone());

    info!("🏊 Pool Details v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   RPC: {}", config.rpc_url);
    info!("   Pool: {}", if pool_address.is_empty() { "<none>" } else { pool_address.as_str() });
    info!("   Refresh: {}s", config.refresh_interval_secs);
    info!("   Output: {}", config.output_dir);

    let provider = network::setup_provider(&config).await?;
    let source = pools::RpcPoolSource::new(provider);
    let mut query = pools::PoolQuery::new(
        source,
        network::RetryConfig::with_max_attempts(config.rpc_max_attempts),
    );
    let mut updates = query.subscribe();
    let opts = render::RenderOptions::from_config(&config);
    let output_dir = Path::new(&config.output_dir);

    query.set_address(&pool_address);

    // Setup shutdown handler
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("\n📛 Received shutdown signal (Ctrl+C)...");
        }
        let _ = shutdown_tx.send(());
    });

    let mut interval = time::interval(Duration::from_secs(config.refresh_interval_secs));
    interval.tick().await;

    info!("\n🚀 Watching pool, press Ctrl+C to stop...\n");
    let mut recorder = storage::SnapshotRecorder::new();
    let initial = updates.borrow_and_update().clone();
    publish(&initial, &opts, output_dir, &mut recorder);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                publish(&snapshot, &opts, output_dir, &mut recorder);
            }
            _ = interval.tick() => {
                query.refetch();
            }
            _ = &mut shutdown_rx => {
                info!("Shutdown signal received, exiting watch loop...");
                break;
            }
        }
    }

    info!("👋 Stopped watching {}", pool_address);
    Ok(())
}

/// Render pass: the full table is drawn for every snapshot, pending or not.
fn publish(
    snapshot: &QuerySnapshot,
    opts: &render::RenderOptions,
    output_dir: &Path,
    recorder: &mut storage::SnapshotRecorder,
) {
    let page = render::render_page(snapshot, opts);
    match storage::write_details_page(output_dir, &page) {
        Ok(path) => info!("📝 Rendered {:?} pool details to {}", snapshot.status, path.display()),
        Err(e) => error!("Failed to write details page: {:#}", e),
    }

    if let Err(e) = recorder.record(output_dir, snapshot) {
        error!("Failed to save pool snapshot: {:#}", e);
    }
}
