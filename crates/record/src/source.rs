//! Version sources
//!
//! The normalizer never reads files itself; a [`VersionSource`] hands it a
//! fully resolved [`VersionRecord`].

use crate::error::{RecordError, Result};
use crate::module::ModuleAssignments;
use crate::version::VersionRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can supply a version record
pub trait VersionSource {
    fn load(&self) -> Result<VersionRecord>;

    /// Human-readable description for diagnostics
    fn describe(&self) -> String;
}

/// In-memory record
#[derive(Debug, Clone)]
pub struct StaticSource(pub VersionRecord);

impl VersionSource for StaticSource {
    fn load(&self) -> Result<VersionRecord> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("static record {}", self.0)
    }
}

/// Version module file (`version.py` at the root of an engine checkout)
#[derive(Debug, Clone)]
pub struct ModuleFileSource {
    path: PathBuf,
}

impl ModuleFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VersionSource for ModuleFileSource {
    fn load(&self) -> Result<VersionRecord> {
        let content = read_source(&self.path)?;
        let module = ModuleAssignments::parse(&content);
        tracing::debug!(
            "Parsed {} assignments from {}",
            module.len(),
            self.path.display()
        );
        module.to_record()
    }

    fn describe(&self) -> String {
        format!("version module {}", self.path.display())
    }
}

/// TOML file with `major`, `minor`, `patch` and `status` keys
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VersionSource for TomlFileSource {
    fn load(&self) -> Result<VersionRecord> {
        let content = read_source(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn describe(&self) -> String {
        format!("TOML version file {}", self.path.display())
    }
}

/// Pick a source for `path` by extension: `.toml` or a version module
pub fn source_for_path(path: &Path) -> Box<dyn VersionSource> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        Box::new(TomlFileSource::new(path))
    } else {
        Box::new(ModuleFileSource::new(path))
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })
}
