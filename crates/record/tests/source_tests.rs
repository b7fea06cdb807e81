//! Integration tests for version sources
//!
//! Tests loading version records from files on disk, including:
//! - Engine version modules with and without a patch component
//! - TOML version files
//! - Missing and malformed sources

use record::{
    ModuleFileSource, RecordError, TomlFileSource, VersionRecord, VersionSource, source_for_path,
};
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod module_files {
    use super::*;

    const STABLE_MODULE: &str = r#"short_name = "godot"
name = "Godot Engine"
major = 4
minor = 3
patch = 0
status = "stable"
module_config = ""
website = "https://godotengine.org"
docs = "4.3"
"#;

    #[test]
    fn test_load_stable_module() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "version.py", STABLE_MODULE);

        let record = ModuleFileSource::new(&path).load().unwrap();
        assert_eq!(
            record,
            VersionRecord::new(4, 3).with_patch(0).with_status("stable")
        );
        assert_eq!(record.format(), "4.3");
        assert!(record.matches("4.3"));
        assert!(!record.matches("4.3.0"));
    }

    #[test]
    fn test_load_patch_release() {
        let dir = TempDir::new().unwrap();
        let content = STABLE_MODULE.replace("patch = 0", "patch = 1");
        let path = write_file(&dir, "version.py", &content);

        let record = source_for_path(&path).load().unwrap();
        assert_eq!(record.format(), "4.3.1");
        assert!(!record.matches("4.3"));
    }

    #[test]
    fn test_load_module_without_patch() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "version.py",
            "short_name = \"godot\"\nmajor = 3\nminor = 2\nstatus = \"beta\"\n",
        );

        let record = ModuleFileSource::new(&path).load().unwrap();
        assert_eq!(record.patch(), None);
        assert_eq!(record.format(), "3.2");
        assert_eq!(record.status(), "beta");
    }

    #[test]
    fn test_load_module_crlf_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "version.py", "major = 4\r\nminor = 1\r\nstatus = \"dev\"\r\n");

        let record = ModuleFileSource::new(&path).load().unwrap();
        assert_eq!(record.format(), "4.1");
        assert_eq!(record.status(), "dev");
    }

    #[test]
    fn test_load_module_missing_minor() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "version.py", "major = 4\n");

        let err = ModuleFileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, RecordError::MissingField { field: "minor" }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = ModuleFileSource::new(dir.path().join("version.py"));

        let err = source.load().unwrap_err();
        assert!(matches!(err, RecordError::Io { .. }));
        assert!(err.to_string().contains("version.py"));
    }
}

mod toml_files {
    use super::*;

    #[test]
    fn test_load_toml_source() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "version.toml",
            "major = 4\nminor = 3\npatch = 2\nstatus = \"rc\"\n",
        );

        let record = TomlFileSource::new(&path).load().unwrap();
        assert_eq!(record.format(), "4.3.2");
        assert_eq!(record.status(), "rc");
    }

    #[test]
    fn test_load_toml_optional_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "version.toml", "major = 1\nminor = 0\n");

        let record = source_for_path(&path).load().unwrap();
        assert_eq!(record, VersionRecord::new(1, 0));
    }

    #[test]
    fn test_load_toml_non_string_status() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "version.toml", "major = 4\nminor = 3\nstatus = 3\n");

        let record = TomlFileSource::new(&path).load().unwrap();
        assert_eq!(record.status(), "3");

        let path = write_file(&dir, "flag.toml", "major = 4\nminor = 3\nstatus = true\n");
        assert_eq!(TomlFileSource::new(&path).load().unwrap().status(), "true");

        let path = write_file(&dir, "list.toml", "major = 4\nminor = 3\nstatus = [\"rc\"]\n");
        let err = TomlFileSource::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("status must be a scalar"));
    }

    #[test]
    fn test_load_toml_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "version.toml", "major = -1\nminor = 0\n");

        let err = TomlFileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, RecordError::Toml(_)));

        let path = write_file(&dir, "no_minor.toml", "major = 1\n");
        assert!(TomlFileSource::new(&path).load().is_err());
    }
}
