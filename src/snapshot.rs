use std::fs;

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDateTime;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::util;

const SNAPSHOT_PREFIX: &str = "backup_";

/// `<backup_root>/backup_<YYYYMMDD_HHMMSS>`.
pub fn snapshot_path(backup_root: &Utf8Path, now: NaiveDateTime) -> Utf8PathBuf {
    backup_root.join(format!("{SNAPSHOT_PREFIX}{}", util::time::compact(now)))
}

/// Copy `source_dir` recursively into a fresh snapshot directory.
///
/// Fails with `io::ErrorKind::AlreadyExists` when a snapshot for the same
/// second is already present; the existing snapshot is not touched. A copy
/// that fails midway leaves the partial snapshot behind.
pub fn make_backup(
    source_dir: &Utf8Path,
    backup_root: &Utf8Path,
    now: NaiveDateTime,
) -> Result<Utf8PathBuf> {
    let dest = snapshot_path(backup_root, now);

    let meta = fs::metadata(source_dir)
        .with_context(|| format!("reading source directory {}", source_dir))?;
    if !meta.is_dir() {
        bail!("source {} is not a directory", source_dir);
    }

    fs::create_dir_all(backup_root)
        .with_context(|| format!("creating directory {}", backup_root))?;
    fs::create_dir(&dest).with_context(|| format!("creating snapshot {}", dest))?;

    let files = copy_tree(source_dir, &dest)?;
    info!(dest = %dest, files, "snapshot created");
    Ok(dest)
}

/// Mirror every entry below `source` into `dest`, which must already exist.
/// Symlinks are followed and copied as their targets.
fn copy_tree(source: &Utf8Path, dest: &Utf8Path) -> Result<usize> {
    let mut files = 0;
    for entry in WalkDir::new(source)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("walking {}", source))?;
        let relative = entry
            .path()
            .strip_prefix(source.as_std_path())
            .with_context(|| format!("{} escaped {}", entry.path().display(), source))?;
        let target = dest.as_std_path().join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir(&target)
                .with_context(|| format!("creating directory {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "copying {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
            debug!(file = %relative.display(), "copied");
            files += 1;
        }
    }
    Ok(files)
}
