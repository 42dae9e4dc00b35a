//! Rendered page output

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn write_details_page(output_dir: &Path, page: &Markup) -> Result<PathBuf> {
    let dir = output_dir.join("pools");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join("details.html");
    let tmp = dir.join("details.html.tmp");
    fs::write(&tmp, page.0.as_bytes())
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, &path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    debug!(path = %path.display(), bytes = page.0.len(), "Wrote pool details page");
    Ok(path)
}
