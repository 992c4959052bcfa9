//! Scanner configuration
//!
//! Limits and batching settings, loaded from a TOML file at:
//! - Linux: ~/.config/repomind/scanner.toml
//! - macOS: ~/Library/Application Support/repomind/scanner.toml
//! - Windows: %APPDATA%\repomind\scanner.toml
//!
//! Missing files and missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};

const MIB: u64 = 1024 * 1024;

/// Scanner limits and concurrency settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Files larger than this (bytes) are skipped
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Repositories larger than this (bytes, all files) are rejected
    #[serde(default = "default_max_repo_size")]
    pub max_repo_size: u64,

    /// Files per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Worker threads; 0 lets rayon decide
    #[serde(default)]
    pub parallelism: usize,

    /// Optional cap on the number of files in one repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_files: Option<usize>,
}

fn default_max_file_size() -> u64 {
    10 * MIB
}

fn default_max_repo_size() -> u64 {
    100 * MIB
}

fn default_batch_size() -> usize {
    10
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            max_repo_size: default_max_repo_size(),
            batch_size: default_batch_size(),
            parallelism: 0,
            max_files: None,
        }
    }
}

impl ScannerConfig {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("repomind").join("scanner.toml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| ScanError::Config {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ScanError::Config {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    /// Reject settings the scanner cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(ScanError::Config {
                message: "batch_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
