//! Report writer module
//!
//! Persists a filled report at `<root>/<YYYY-MM>/weekly-report-<WW>.md`.
//! An existing report is never overwritten.
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::DateInfo;

/// Result of writing a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A new report file was written
    Created(PathBuf),
    /// A report for this week already existed and was left untouched
    AlreadyExists(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Created(path) | WriteOutcome::AlreadyExists(path) => path,
        }
    }
}

/// Location of the report for a week under the reports root
pub fn report_path(root: &Path, dates: &DateInfo) -> PathBuf {
    root.join(&dates.month)
        .join(format!("weekly-report-{}.md", dates.week))
}

/// Write `content` as the report for the given week
///
/// The month directory is created on demand, but the reports root itself must exist.
pub fn write(root: &Path, dates: &DateInfo, content: &str) -> Result<WriteOutcome> {
    let month_dir = root.join(&dates.month);
    if !month_dir.exists() {
        fs::create_dir(&month_dir)?;
        info!("Created month directory {}", month_dir.display());
    }

    let path = report_path(root, dates);
    if path.exists() {
        debug!("Report {} already exists, leaving it untouched", path.display());
        return Ok(WriteOutcome::AlreadyExists(path));
    }

    fs::write(&path, content)?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(WriteOutcome::Created(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GoweekError;
    use tempfile::TempDir;

    fn sample_info() -> DateInfo {
        DateInfo {
            week: "07".to_string(),
            week_start: "2024/02/12".to_string(),
            week_end: "2024/02/16".to_string(),
            month: "2024-02".to_string(),
        }
    }

    #[test]
    fn test_report_path_layout() {
        let path = report_path(Path::new("/reports"), &sample_info());
        assert_eq!(path, PathBuf::from("/reports/2024-02/weekly-report-07.md"));
    }

    #[test]
    fn test_write_creates_month_dir_and_file() {
        let temp = TempDir::new().unwrap();
        let outcome = write(temp.path(), &sample_info(), "# Week 07\n").unwrap();

        let expected = temp.path().join("2024-02").join("weekly-report-07.md");
        assert_eq!(outcome, WriteOutcome::Created(expected.clone()));
        assert_eq!(fs::read_to_string(expected).unwrap(), "# Week 07\n");
    }

    #[test]
    fn test_write_reuses_existing_month_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2024-02")).unwrap();

        let outcome = write(temp.path(), &sample_info(), "content").unwrap();
        assert!(matches!(outcome, WriteOutcome::Created(_)));
    }

    #[test]
    fn test_write_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let first = write(temp.path(), &sample_info(), "first").unwrap();
        let second = write(temp.path(), &sample_info(), "second").unwrap();

        assert!(matches!(first, WriteOutcome::Created(_)));
        assert!(matches!(second, WriteOutcome::AlreadyExists(_)));
        assert_eq!(first.path(), second.path());
        assert_eq!(fs::read_to_string(second.path()).unwrap(), "first");
    }

    #[test]
    fn test_write_requires_existing_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("missing");

        let result = write(&root, &sample_info(), "content");
        assert!(matches!(result, Err(GoweekError::Io(_))));
        assert!(!root.exists());
    }
}
