use std::io::{self, Write};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{self, BackupConfig};
use crate::util;
use crate::{layout, ledger, seed, snapshot};

/// Outcome of one backup run.
#[derive(Debug)]
pub struct BackupReport {
    pub dest: Utf8PathBuf,
    pub log_path: Utf8PathBuf,
    pub seeded: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = BackupConfig::resolve(&cli)?;
    debug!("resolved configuration:\n{}", config::format_summary(&config));

    let report = run_with_config(&config, util::time::now)?;
    info!(seeded = report.seeded, "backup run complete");

    print_report(&mut io::stdout().lock(), &report).context("writing run summary")
}

/// The two-line summary shown after a successful run.
fn print_report(out: &mut impl Write, report: &BackupReport) -> io::Result<()> {
    writeln!(out, "Backup created at: {}", report.dest)?;
    writeln!(out, "Log appended to {}", report.log_path)
}

/// Initialize, seed, copy, log. `clock` is read once per step.
pub fn run_with_config(
    config: &BackupConfig,
    clock: impl Fn() -> NaiveDateTime,
) -> Result<BackupReport> {
    layout::ensure_dirs(config)?;
    let seeded = seed::create_sample_file(&config.source_dir, &config.seed_file, clock())?;
    let dest = snapshot::make_backup(&config.source_dir, &config.backup_root, clock())?;
    let log_path = config.log_path();
    ledger::append_log(&log_path, &dest, clock())?;

    Ok(BackupReport {
        dest,
        log_path,
        seeded,
    })
}
