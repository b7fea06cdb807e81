//! Version record loading

use crate::{Error, Result};
use record::{VersionRecord, source_for_path};
use std::path::Path;

/// Load the version record stored at `path`
///
/// Any failure (missing file, unreadable file, missing or malformed fields)
/// is reported as [`Error::SourceUnavailable`].
pub fn load_version_record(path: &Path) -> Result<VersionRecord> {
    let source = source_for_path(path);
    tracing::debug!("Loading {}", source.describe());

    let record = source.load().map_err(|reason| Error::SourceUnavailable {
        path: path.to_path_buf(),
        reason,
    })?;

    tracing::info!(
        "Loaded version {} (status: {:?}) from {}",
        record,
        record.status(),
        path.display()
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use record::RecordError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_module() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.py");
        fs::write(&path, "major = 4\nminor = 3\npatch = 0\nstatus = \"stable\"\n").unwrap();

        let record = load_version_record(&path).unwrap();
        assert_eq!(record.format(), "4.3");
        assert_eq!(record.status(), "stable");
    }

    #[test]
    fn test_missing_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.py");

        let err = load_version_record(&path).unwrap_err();
        match err {
            Error::SourceUnavailable { path: p, reason } => {
                assert_eq!(p, path);
                assert!(matches!(reason, RecordError::Io { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.py");
        fs::write(&path, "major = \"four\"\nminor = 3\n").unwrap();

        let err = load_version_record(&path).unwrap_err();
        assert!(err.to_string().contains("Version source unavailable"));
        assert!(err.to_string().contains("'major'"));
    }
}
