//! # Scan Mode Model
//!
//! Defines the strategies a survey scan can use.
//!
//! Callers describe a scan with a mode keyword and a loose set of optional
//! parameters ([`ScanParams`]). [`ScanRequest::new`] folds both into a
//! [`ScanMode`], in which every variant carries exactly the parameters it
//! uses, so a retry count can never reach an interface scan.
//!
//! Unknown keywords are not an error: they resolve to [`ScanMode::Local`].

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_INTERFACE: &str = "eth0";
pub const DEFAULT_SUBNET: &str = "192.168.1.0/24";
pub const DEFAULT_RETRY_COUNT: i64 = 3;
pub const DEFAULT_BANDWIDTH: i64 = 256;

/// A concrete scan strategy.
///
/// Numeric parameters are passed to the probe verbatim. Their ranges are the
/// probe's business, so negative values are representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Scan the segment of the default interface.
    Local,
    /// Restrict the scan to one network interface.
    Interface { name: String },
    /// Scan an explicit range instead of the local segment.
    Subnet { cidr: String },
    /// Resend every probe `count` times.
    Retry { count: i64 },
    /// Cap the probe rate in packets per second.
    Bandwidth { packets_per_sec: i64 },
    /// Report IPs answered by more than one hardware address.
    Duplicates,
    /// Probe from a randomized source hardware address.
    RandomMac,
    /// Ask the probe for per-packet diagnostics.
    Verbose,
}

/// The keyword part of a mode, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Local,
    Interface,
    Subnet,
    Retry,
    Bandwidth,
    Duplicates,
    RandomMac,
    Verbose,
}

impl ModeKind {
    pub const ALL: [ModeKind; 8] = [
        ModeKind::Local,
        ModeKind::Interface,
        ModeKind::Subnet,
        ModeKind::Retry,
        ModeKind::Bandwidth,
        ModeKind::Duplicates,
        ModeKind::RandomMac,
        ModeKind::Verbose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModeKind::Local => "local",
            ModeKind::Interface => "interface",
            ModeKind::Subnet => "subnet",
            ModeKind::Retry => "retry",
            ModeKind::Bandwidth => "bandwidth",
            ModeKind::Duplicates => "duplicates",
            ModeKind::RandomMac => "random_mac",
            ModeKind::Verbose => "verbose",
        }
    }

    /// Resolves a keyword, treating anything unrecognized as `local`.
    ///
    /// Keywords match exactly, so `"RANDOM_MAC"` or `" verbose "` are unknown.
    pub fn from_keyword(s: &str) -> Self {
        s.parse().unwrap_or(ModeKind::Local)
    }
}

impl FromStr for ModeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown scan mode: {s}"))
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional parameters as they arrive from a caller.
///
/// Parameters that do not belong to the selected mode are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanParams {
    pub interface: Option<String>,
    pub subnet: Option<String>,
    pub retry: Option<i64>,
    pub bandwidth: Option<i64>,
}

impl ScanMode {
    /// Builds the mode for `kind`, filling absent parameters with defaults.
    pub fn resolve(kind: ModeKind, params: ScanParams) -> Self {
        match kind {
            ModeKind::Local => ScanMode::Local,
            ModeKind::Interface => ScanMode::Interface {
                name: params
                    .interface
                    .unwrap_or_else(|| DEFAULT_INTERFACE.to_string()),
            },
            ModeKind::Subnet => ScanMode::Subnet {
                cidr: params.subnet.unwrap_or_else(|| DEFAULT_SUBNET.to_string()),
            },
            ModeKind::Retry => ScanMode::Retry {
                count: params.retry.unwrap_or(DEFAULT_RETRY_COUNT),
            },
            ModeKind::Bandwidth => ScanMode::Bandwidth {
                packets_per_sec: params.bandwidth.unwrap_or(DEFAULT_BANDWIDTH),
            },
            ModeKind::Duplicates => ScanMode::Duplicates,
            ModeKind::RandomMac => ScanMode::RandomMac,
            ModeKind::Verbose => ScanMode::Verbose,
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            ScanMode::Local => ModeKind::Local,
            ScanMode::Interface { .. } => ModeKind::Interface,
            ScanMode::Subnet { .. } => ModeKind::Subnet,
            ScanMode::Retry { .. } => ModeKind::Retry,
            ScanMode::Bandwidth { .. } => ModeKind::Bandwidth,
            ScanMode::Duplicates => ModeKind::Duplicates,
            ScanMode::RandomMac => ModeKind::RandomMac,
            ScanMode::Verbose => ModeKind::Verbose,
        }
    }
}

/// A survey scan as requested by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Mode keyword exactly as the caller sent it, echoed in the report.
    pub requested_mode: String,
    pub mode: ScanMode,
}

impl ScanRequest {
    pub fn new(requested_mode: impl Into<String>, params: ScanParams) -> Self {
        let requested_mode = requested_mode.into();
        let mode = ScanMode::resolve(ModeKind::from_keyword(&requested_mode), params);
        Self {
            requested_mode,
            mode,
        }
    }
}

impl From<ScanMode> for ScanRequest {
    fn from(mode: ScanMode) -> Self {
        Self {
            requested_mode: mode.kind().as_str().to_string(),
            mode,
        }
    }
}

impl Default for ScanRequest {
    fn default() -> Self {
        ScanRequest::from(ScanMode::Local)
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
