//! Error types and exit codes for repomind-scanner

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for scanner operations
///
/// Per-file extraction problems never surface here; they are absorbed into
/// the affected `FileRecord`. These variants cover the batch gates, the CLI
/// and configuration loading.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Repository too large: {total_bytes} bytes exceeds limit of {limit} bytes")]
    RepositoryTooLarge { total_bytes: u64, limit: u64 },

    #[error("Repository has too many files: {count} exceeds limit of {limit}")]
    TooManyFiles { count: usize, limit: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Configuration error
    /// - 3: Repository rejected by size or file-count ceiling
    /// - 4: Output serialization failure
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Raw status byte behind `exit_code`
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::FileNotFound { .. } => 1,
            Self::Io(_) => 1,
            Self::Config { .. } => 2,
            Self::RepositoryTooLarge { .. } => 3,
            Self::TooManyFiles { .. } => 3,
            Self::Serialization { .. } => 4,
        }
    }
}

/// Failure of a language-specific function handler
///
/// The dispatcher never propagates these: it logs them and re-runs the
/// generic handler on the same content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{language} syntax error: {message}")]
    Syntax { language: String, message: String },

    #[error("Parser unavailable: {message}")]
    Parser { message: String },
}

/// Result type alias for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;
