/// Shared filesystem helpers.
pub mod fs {
    use std::fs;
    use std::io;
    use std::path::Path;

    /// Ensure a directory exists, creating it recursively if needed.
    ///
    /// An existing non-directory at `path` is an error rather than a no-op.
    pub fn ensure_dir(path: &Path) -> io::Result<()> {
        if !path.exists() {
            return fs::create_dir_all(path);
        }
        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} exists but is not a directory", path.display()),
            ));
        }
        Ok(())
    }
}

/// Wall-clock formatting shared by the seed file, snapshot names and the log.
pub mod time {
    use chrono::NaiveDateTime;

    /// Local time with microseconds, e.g. `2024-05-01T09:30:00.123456`.
    pub fn iso8601(now: NaiveDateTime) -> String {
        now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }

    /// Second-resolution stamp used in snapshot directory names.
    pub fn compact(now: NaiveDateTime) -> String {
        now.format("%Y%m%d_%H%M%S").to_string()
    }

    pub fn now() -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io;
    use tempfile::TempDir;

    #[test]
    fn ensure_dir_creates_nested_and_is_repeatable() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        fs::ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        fs::ensure_dir(&nested).unwrap();
    }

    #[test]
    fn ensure_dir_rejects_regular_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("occupied");
        std::fs::write(&file, "x").unwrap();
        let err = fs::ensure_dir(&file).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
    }

    #[test]
    fn timestamps_format() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(9, 3, 7, 42)
            .unwrap();
        assert_eq!(time::iso8601(now), "2024-05-01T09:03:07.000042");
        assert_eq!(time::compact(now), "20240501_090307");
    }
}
