use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Terminal failures of a scan.
///
/// Every variant is an expected operational outcome and is returned as a
/// value; an unknown scan mode is deliberately absent since it degrades to a
/// local scan instead of failing.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The request was rejected before any process was spawned.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("scan timeout after {0:?}: operation took too long")]
    Timeout(Duration),

    /// The probe could not be run or its output could not be collected.
    #[error("probe execution failed: {0}")]
    ExecutionFailure(String),

    /// The trust list exists but could not be read.
    #[error("failed to read trust list {}: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
