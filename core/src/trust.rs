//! Reader for the allowlist of trusted IP addresses.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use trustscan_common::{Result, ScanError};

/// Immutable set of trusted IPs, taken once per scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustSnapshot {
    ips: HashSet<String>,
}

impl TrustSnapshot {
    pub fn contains(&self, ip: &str) -> bool {
        self.ips.contains(ip)
    }

    pub fn len(&self) -> usize {
        self.ips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }

    /// Parses the line-oriented allowlist format.
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TrustSnapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ips: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// File-backed allowlist.
///
/// Holds no state besides its path: every [`TrustStore::load`] reads the file
/// again, so edits apply to the next scan.
#[derive(Debug, Clone)]
pub struct TrustStore {
    path: PathBuf,
}

impl TrustStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the allowlist. A missing file means nothing is trusted yet.
    pub async fn load(&self) -> Result<TrustSnapshot> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let snapshot = TrustSnapshot::parse(&content);
                debug!(path = %self.path.display(), entries = snapshot.len(), "loaded trust list");
                Ok(snapshot)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no trust list, trusting nothing");
                Ok(TrustSnapshot::default())
            }
            Err(source) => Err(ScanError::IoFailure {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
