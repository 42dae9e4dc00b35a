//! Pool snapshot storage

use anyhow::Result;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::types::{PoolData, QuerySnapshot};

pub fn save_pool_snapshot(output_dir: &Path, snapshot: &QuerySnapshot) -> Result<PathBuf> {
    let dir = output_dir.join("snapshots");
    fs::create_dir_all(&dir)?;
    let filename = dir.join(format!("pools_{}.jsonl", Utc::now().format("%Y-%m-%d")));

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    writeln!(file, "{}", serde_json::to_string(snapshot)?)?;

    info!(
        pool = %snapshot.address,
        status = ?snapshot.status,
        symbol = ?snapshot.data.as_ref().and_then(|d| d.symbol.as_deref()),
        "Saved pool snapshot"
    );

    Ok(filename)
}

/// Saves settled snapshots only when their pool data differs from the last
/// one written, so periodic refetches of an unchanged pool add no lines.
#[derive(Debug, Default)]
pub struct SnapshotRecorder {
    last_saved: Option<(String, Option<PoolData>)>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, output_dir: &Path, snapshot: &QuerySnapshot) -> Result<Option<PathBuf>> {
        if !snapshot.is_settled() {
            return Ok(None);
        }

        let key = (snapshot.address.clone(), snapshot.data.clone());
        if self.last_saved.as_ref() == Some(&key) {
            return Ok(None);
        }

        let path = save_pool_snapshot(output_dir, snapshot)?;
        self.last_saved = Some(key);
        Ok(Some(path))
    }
}
