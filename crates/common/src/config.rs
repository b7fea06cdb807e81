//! Tool configuration management

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Where the version record is read from
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub tool: ToolSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// Engine checkout directory, relative paths resolve against the working directory
    #[serde(default = "SourceSettings::default_dir")]
    pub dir: PathBuf,
    /// Version file inside `dir` (`.toml` files are read as TOML)
    #[serde(default = "SourceSettings::default_module")]
    pub module: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            module: Self::default_module(),
        }
    }
}

impl SourceSettings {
    fn default_dir() -> PathBuf {
        PathBuf::from("git")
    }

    fn default_module() -> String {
        "version.py".to_string()
    }

    /// Full path of the version file, with `~` expanded
    pub fn path(&self) -> PathBuf {
        let dir = self.dir.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&dir).as_ref()).join(&self.module)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    #[serde(default = "ToolSettings::default_log_level")]
    pub log_level: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
        }
    }
}

impl ToolSettings {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl ToolConfig {
    /// Load configuration from the specified path, or from the first standard location
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).as_ref()),
            None => Self::locate().ok_or_else(|| anyhow!("No configuration file found"))?,
        };

        let config = Self::from_file(&config_path)?;
        tracing::debug!("Loaded configuration from: {}", config_path.display());
        Ok(config)
    }

    /// Load configuration from a standard location, or defaults if there is none
    ///
    /// A file that exists but cannot be read, parsed or validated is an error.
    pub fn load_or_default() -> Result<Self> {
        match Self::locate() {
            Some(path) => Self::load(Some(path)),
            None => Ok(Self::default()),
        }
    }

    /// First existing file among the standard configuration locations
    pub fn locate() -> Option<PathBuf> {
        let candidates = [
            Self::default_path(),
            PathBuf::from("/etc/engine-version/tools.toml"),
        ];

        candidates.into_iter().find(|p| p.exists())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ToolConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("engine-version").join("tools.toml")
        } else {
            PathBuf::from(".config/engine-version/tools.toml")
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&self.tool.log_level.as_str()) {
            return Err(anyhow!(
                "Invalid log level '{}', must be one of: {}",
                self.tool.log_level,
                valid_levels.join(", ")
            ));
        }

        let module = self.source.module.trim();
        if module.is_empty() {
            return Err(anyhow!("Empty version module name in [source]"));
        }
        if Path::new(module).components().count() != 1 {
            return Err(anyhow!(
                "Version module '{}' must be a file name, not a path",
                module
            ));
        }

        Ok(())
    }
}
