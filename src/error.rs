//! Error type shared by the benchmark driver and the CLI.

/// Failures that stop a benchmark run.
///
/// Generating subsets cannot fail; these cover configuration that makes no
/// sense and problems writing the report.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Writing a report line failed (closed pipe, full disk, ...)
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Threshold must be a finite, non-negative number of seconds
    #[error("invalid threshold: {0} (expected a finite, non-negative number of seconds)")]
    InvalidThreshold(f64),
}
