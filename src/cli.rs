//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ScannerConfig;
use crate::error::{Result, ScanError};

/// Multi-language repository scanner
#[derive(Parser, Debug)]
#[command(name = "repomind-scan")]
#[command(about = "Detects languages and extracts functions and documentation from source trees")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan every text file under a directory
    Scan(ScanArgs),

    /// Print the detected language of one file
    Detect(DetectArgs),
}

/// Output format for scan results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON document with records and metrics
    Json,
}

// ============================================
// Scan Subcommand
// ============================================

/// Arguments for the scan command
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Repository root to scan
    #[arg(value_name = "DIR")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Files per batch
    #[arg(long, env = "REPOMIND_BATCH_SIZE")]
    pub batch_size: Option<usize>,

    /// Skip files larger than this many bytes
    #[arg(long, env = "REPOMIND_MAX_FILE_SIZE")]
    pub max_file_size: Option<u64>,

    /// Reject repositories larger than this many bytes
    #[arg(long, env = "REPOMIND_MAX_REPO_SIZE")]
    pub max_repo_size: Option<u64>,

    /// Reject repositories with more files than this
    #[arg(long, env = "REPOMIND_MAX_FILES")]
    pub max_files: Option<usize>,

    /// Worker threads (0 = one per core)
    #[arg(short, long, env = "REPOMIND_JOBS")]
    pub jobs: Option<usize>,

    /// Config file (defaults to the platform config dir)
    #[arg(long, env = "REPOMIND_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print only the repository metrics
    #[arg(long)]
    pub summary_only: bool,
}

impl ScanArgs {
    /// Resolve the effective configuration: file, then flag overrides
    pub fn resolve_config(&self) -> Result<ScannerConfig> {
        let base = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ScanError::FileNotFound {
                    path: path.display().to_string(),
                })
            }
            Some(path) => ScannerConfig::load_from(path)?,
            None => ScannerConfig::load()?,
        };

        let config = self.apply_overrides(base);
        config.validate()?;
        Ok(config)
    }

    /// Overlay command-line values on a loaded configuration
    pub fn apply_overrides(&self, mut config: ScannerConfig) -> ScannerConfig {
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(max_file_size) = self.max_file_size {
            config.max_file_size = max_file_size;
        }
        if let Some(max_repo_size) = self.max_repo_size {
            config.max_repo_size = max_repo_size;
        }
        if let Some(max_files) = self.max_files {
            config.max_files = Some(max_files);
        }
        if let Some(jobs) = self.jobs {
            config.parallelism = jobs;
        }
        config
    }
}

// ============================================
// Detect Subcommand
// ============================================

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// File to inspect
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}
