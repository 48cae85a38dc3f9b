use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_SOURCE_DIR: &str = "project_files";
pub const DEFAULT_BACKUP_ROOT: &str = "backups";
pub const DEFAULT_LOG_FILE: &str = "backup.log";
pub const DEFAULT_SEED_FILE: &str = "notes.txt";

/// Directory layout for a backup run, optionally loaded from a TOML file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BackupConfig {
    pub source_dir: Utf8PathBuf,
    pub backup_root: Utf8PathBuf,
    /// Relative to `backup_root`.
    pub log_file: Utf8PathBuf,
    /// Relative to `source_dir`.
    pub seed_file: Utf8PathBuf,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            source_dir: DEFAULT_SOURCE_DIR.into(),
            backup_root: DEFAULT_BACKUP_ROOT.into(),
            log_file: DEFAULT_LOG_FILE.into(),
            seed_file: DEFAULT_SEED_FILE.into(),
        }
    }
}

impl BackupConfig {
    pub fn log_path(&self) -> Utf8PathBuf {
        self.backup_root.join(&self.log_file)
    }

    /// Defaults, then `--config`, then the per-directory flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => load_from_path(&utf8(path)?)?,
            None => Self::default(),
        };

        if let Some(source) = &cli.source {
            config.source_dir = utf8(source)?;
        }
        if let Some(root) = &cli.backup_root {
            config.backup_root = utf8(root)?;
        }

        Ok(config)
    }
}

/// Load a configuration file from disk and deserialize it.
pub fn load_from_path(path: &Utf8Path) -> Result<BackupConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path))
}

pub fn format_summary(config: &BackupConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Source directory: {}", config.source_dir);
    let _ = writeln!(out, "Backup root: {}", config.backup_root);
    let _ = writeln!(out, "Log file: {}", config.log_path());
    let _ = writeln!(
        out,
        "Seed file: {}",
        config.source_dir.join(&config.seed_file)
    );
    out
}

fn utf8(path: &Path) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .map_err(|p| anyhow!("path {} is not valid UTF-8", p.display()))
}
