use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PROBE_BINARY: &str = "arp-scan";
pub const DEFAULT_PRIVILEGE_WRAPPER: &str = "sudo";
pub const DEFAULT_TRUST_FILE: &str = "trusted_ips.txt";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_CONCURRENT_SCANS: usize = 4;

#[derive(Debug, Clone)]
pub struct Config {
    /// Executable of the ARP probe.
    pub probe_binary: String,
    /// Command that elevates the probe (raw sockets need root).
    ///
    /// `None` runs the probe directly, e.g. when already running as root.
    pub privilege_wrapper: Option<String>,
    /// Wall-clock budget of a single probe run.
    pub probe_timeout: Duration,
    /// Allowlist of trusted IPs, one per line. Re-read on every scan.
    pub trust_file: PathBuf,
    /// Upper bound of probes running at the same time.
    pub max_concurrent_scans: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_binary: DEFAULT_PROBE_BINARY.to_string(),
            privilege_wrapper: Some(DEFAULT_PRIVILEGE_WRAPPER.to_string()),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            trust_file: PathBuf::from(DEFAULT_TRUST_FILE),
            max_concurrent_scans: DEFAULT_MAX_CONCURRENT_SCANS,
        }
    }
}
