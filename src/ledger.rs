use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};
use camino::Utf8Path;
use chrono::NaiveDateTime;
use tracing::info;

use crate::util;

/// Append `<timestamp> - created backup at <dest>` to the backup log.
///
/// The log is created on first use and only ever appended to. The line goes
/// out in a single write.
pub fn append_log(log_path: &Utf8Path, dest: &Utf8Path, now: NaiveDateTime) -> Result<()> {
    let line = format_entry(dest, now);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("opening log {}", log_path))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("appending to log {}", log_path))?;
    info!(log = %log_path, dest = %dest, "log appended");
    Ok(())
}

fn format_entry(dest: &Utf8Path, now: NaiveDateTime) -> String {
    format!(
        "{} - created backup at {}\n",
        util::time::iso8601(now),
        dest
    )
}
