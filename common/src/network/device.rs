//! # Device Model
//!
//! A discovered host as reported by the probe, plus the aggregate returned
//! by a survey scan.

use std::fmt;

use serde::Serialize;

use crate::error::ScanError;

/// Whether a device's IP is on the allowlist.
///
/// Always derived from the trust snapshot of the scan that produced the
/// record and never stored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustStatus {
    Trusted,
    Untrusted,
}

impl TrustStatus {
    pub fn is_trusted(self) -> bool {
        matches!(self, TrustStatus::Trusted)
    }
}

impl fmt::Display for TrustStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustStatus::Trusted => write!(f, "Trusted"),
            TrustStatus::Untrusted => write!(f, "Untrusted"),
        }
    }
}

/// One host line of probe output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    pub ip: String,
    pub mac: String,
    /// Vendor label exactly as printed by the probe. May be empty.
    pub vendor: String,
    pub trust_status: TrustStatus,
}

/// Summary of a survey scan.
///
/// Only constructible through [`ScanReport::new`], which keeps the counts in
/// line with `devices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    devices: Vec<DeviceRecord>,
    scan_mode: String,
    total: usize,
    safe_count: usize,
    unsafe_count: usize,
}

impl ScanReport {
    pub fn new(scan_mode: impl Into<String>, devices: Vec<DeviceRecord>) -> Self {
        let safe_count = devices
            .iter()
            .filter(|device| device.trust_status.is_trusted())
            .count();

        Self {
            total: devices.len(),
            unsafe_count: devices.len() - safe_count,
            safe_count,
            scan_mode: scan_mode.into(),
            devices,
        }
    }

    /// Devices in the order the probe printed them.
    pub fn devices(&self) -> &[DeviceRecord] {
        &self.devices
    }

    pub fn scan_mode(&self) -> &str {
        &self.scan_mode
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn safe_count(&self) -> usize {
        self.safe_count
    }

    pub fn unsafe_count(&self) -> usize {
        self.unsafe_count
    }

    pub fn into_devices(self) -> Vec<DeviceRecord> {
        self.devices
    }
}

/// Terminal result handed to a caller: device data or an error description,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScanResponse<T> {
    Success(T),
    Failure { error: String },
}

impl<T> From<Result<T, ScanError>> for ScanResponse<T> {
    fn from(result: Result<T, ScanError>) -> Self {
        match result {
            Ok(value) => ScanResponse::Success(value),
            Err(err) => ScanResponse::Failure {
                error: err.to_string(),
            },
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
