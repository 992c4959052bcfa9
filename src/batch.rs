//! Parallel batch scanning
//!
//! Files are split into fixed-size batches; batches run concurrently on a
//! rayon pool and results come back in input order. An optional
//! [`ScanSink`] sees each finished batch, which lets callers persist or
//! report progress without waiting for the whole repository.

use rayon::prelude::*;

use crate::config::ScannerConfig;
use crate::error::{Result, ScanError};
use crate::extract::scan_file;
use crate::schema::FileRecord;

/// Raw file handed to [`BatchScanner::scan_sources`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Repository-relative path
    pub path: String,
    /// Undecoded file bytes
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
        }
    }
}

/// Receiver for completed batches
///
/// Called from worker threads, possibly out of order; `batch_index` is the
/// batch's position in the input.
pub trait ScanSink: Send + Sync {
    fn accept(&self, batch_index: usize, records: &[FileRecord]);
}

/// Batch scanner with its own worker pool
pub struct BatchScanner {
    config: ScannerConfig,
    pool: rayon::ThreadPool,
}

impl BatchScanner {
    /// Create a scanner; `parallelism = 0` uses rayon's default thread count
    pub fn new(config: ScannerConfig) -> Result<Self> {
        config.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.parallelism)
            .thread_name(|i| format!("repomind-scan-{}", i))
            .build()
            .map_err(|e| ScanError::Config {
                message: format!("Failed to build worker pool: {}", e),
            })?;

        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Scan `(path, content)` pairs, preserving order
    pub fn scan_batch<P, C>(&self, entries: &[(P, C)]) -> Vec<FileRecord>
    where
        P: AsRef<str> + Sync,
        C: AsRef<str> + Sync,
    {
        self.scan_batch_with_sink(entries, None)
    }

    /// Scan `(path, content)` pairs, reporting each finished batch to `sink`
    pub fn scan_batch_with_sink<P, C>(
        &self,
        entries: &[(P, C)],
        sink: Option<&dyn ScanSink>,
    ) -> Vec<FileRecord>
    where
        P: AsRef<str> + Sync,
        C: AsRef<str> + Sync,
    {
        let batch_size = self.config.batch_size;
        self.pool
            .install(|| scan_in_batches(entries, batch_size, sink))
    }

    /// Gate, decode and scan raw repository files
    pub fn scan_sources(&self, sources: Vec<SourceFile>) -> Result<Vec<FileRecord>> {
        self.scan_sources_with_sink(sources, None)
    }

    /// Gate, decode and scan raw repository files, reporting batches to `sink`
    ///
    /// The whole repository is rejected when it holds more than `max_files`
    /// files or more than `max_repo_size` bytes. Individual files above
    /// `max_file_size` or not valid UTF-8 are skipped with a warning.
    pub fn scan_sources_with_sink(
        &self,
        sources: Vec<SourceFile>,
        sink: Option<&dyn ScanSink>,
    ) -> Result<Vec<FileRecord>> {
        if let Some(limit) = self.config.max_files {
            if sources.len() > limit {
                return Err(ScanError::TooManyFiles {
                    count: sources.len(),
                    limit,
                });
            }
        }

        let total_bytes: u64 = sources.iter().map(|s| s.bytes.len() as u64).sum();
        if total_bytes > self.config.max_repo_size {
            return Err(ScanError::RepositoryTooLarge {
                total_bytes,
                limit: self.config.max_repo_size,
            });
        }

        let mut entries: Vec<(String, String)> = Vec::with_capacity(sources.len());
        for source in sources {
            if source.bytes.len() as u64 > self.config.max_file_size {
                tracing::warn!(
                    "Skipping {}: {} bytes exceeds max_file_size {}",
                    source.path,
                    source.bytes.len(),
                    self.config.max_file_size
                );
                continue;
            }
            match String::from_utf8(source.bytes) {
                Ok(content) => entries.push((source.path, content)),
                Err(e) => {
                    tracing::warn!("Skipping {}: not valid UTF-8 ({})", source.path, e);
                }
            }
        }

        tracing::info!(
            "Scanning {} files ({} bytes) in batches of {}",
            entries.len(),
            total_bytes,
            self.config.batch_size
        );

        Ok(self.scan_batch_with_sink(&entries, sink))
    }
}

/// Scan `(path, content)` pairs on the global rayon pool with default batching
pub fn scan_batch<P, C>(entries: &[(P, C)]) -> Vec<FileRecord>
where
    P: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    scan_in_batches(entries, ScannerConfig::default().batch_size, None)
}

fn scan_in_batches<P, C>(
    entries: &[(P, C)],
    batch_size: usize,
    sink: Option<&dyn ScanSink>,
) -> Vec<FileRecord>
where
    P: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    let batches: Vec<Vec<FileRecord>> = entries
        .par_chunks(batch_size.max(1))
        .enumerate()
        .map(|(batch_index, chunk)| {
            let records: Vec<FileRecord> = chunk
                .iter()
                .map(|(path, content)| scan_file(path.as_ref(), content.as_ref()))
                .collect();
            tracing::debug!("Batch {} done ({} files)", batch_index, records.len());
            if let Some(sink) = sink {
                sink.accept(batch_index, &records);
            }
            records
        })
        .collect();

    batches.into_iter().flatten().collect()
}
