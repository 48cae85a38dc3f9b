use std::fs;

use anyhow::{Context, Result};
use camino::Utf8Path;
use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::util;

const NOTE_HEADER: &str = "Some random notes about this little project.";
const NOTE_FOOTER: &str = "Scout is the best debugging buddy. 🐶";

/// Write the sample notes file unless it already exists.
///
/// Returns `true` when the file was created. An existing file is never read
/// or rewritten.
pub fn create_sample_file(
    source_dir: &Utf8Path,
    file_name: &Utf8Path,
    now: NaiveDateTime,
) -> Result<bool> {
    let path = source_dir.join(file_name);
    if path.exists() {
        debug!(path = %path, "sample file present, skipping");
        return Ok(false);
    }

    fs::write(&path, render_notes(now)).with_context(|| format!("writing {}", path))?;
    info!(path = %path, "seeded sample file");
    Ok(true)
}

fn render_notes(now: NaiveDateTime) -> String {
    format!(
        "{NOTE_HEADER}\nDate: {}\n{NOTE_FOOTER}\n",
        util::time::iso8601(now)
    )
}
