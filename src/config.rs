//! Configuration for rangekv
//!
//! Centralized configuration with sensible defaults.

use std::ffi::OsString;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{KvError, Result};

/// Main configuration for a rangekv database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Base name of the database file. The file itself is `{path}.db`.
    pub path: PathBuf,

    /// Permission bits applied when the file is created (Unix only)
    pub file_mode: u32,

    // -------------------------------------------------------------------------
    // Engine Configuration
    // -------------------------------------------------------------------------
    /// Page cache size in bytes; `None` keeps the engine default
    pub cache_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./rangekv"),
            file_mode: Self::DEFAULT_FILE_MODE,
            cache_size: None,
        }
    }
}

impl Config {
    /// Owner read/write only
    pub const DEFAULT_FILE_MODE: u32 = 0o600;

    /// Extension appended to the base name
    pub const FILE_EXTENSION: &'static str = "db";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the database file: `{path}.db`
    ///
    /// The extension is appended rather than substituted, so `data.v2`
    /// becomes `data.v2.db`.
    pub fn db_file(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".");
        name.push(Self::FILE_EXTENSION);
        PathBuf::from(name)
    }

    fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(KvError::Config("database path must not be empty".to_string()));
        }
        if self.file_mode & !0o777 != 0 {
            return Err(KvError::Config(format!(
                "file mode {:o} has bits outside 0o777",
                self.file_mode
            )));
        }
        if self.cache_size == Some(0) {
            return Err(KvError::Config("cache size must be greater than zero".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the base name of the database file
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the permission bits used when creating the file
    pub fn file_mode(mut self, mode: u32) -> Self {
        self.config.file_mode = mode;
        self
    }

    /// Set the engine page cache size (in bytes)
    pub fn cache_size(mut self, bytes: usize) -> Self {
        self.config.cache_size = Some(bytes);
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
