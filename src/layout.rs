use anyhow::{Context, Result};
use tracing::info;

use crate::config::BackupConfig;
use crate::util;

/// Create the source directory and backup root if they are missing.
pub fn ensure_dirs(config: &BackupConfig) -> Result<()> {
    for dir in [&config.source_dir, &config.backup_root] {
        util::fs::ensure_dir(dir.as_std_path())
            .with_context(|| format!("creating directory {}", dir))?;
    }
    info!(source = %config.source_dir, backup_root = %config.backup_root, "directories ready");
    Ok(())
}
