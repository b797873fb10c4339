//! Maps scan modes onto probe command lines.

use trustscan_common::config::Config;
use trustscan_common::network::mode::ScanMode;
use trustscan_common::{Result, ScanError};

use super::Invocation;

const LOCAL_NET: &str = "-l";
const INTERFACE: &str = "-I";
const RETRY: &str = "-r";
const BANDWIDTH: &str = "-b";
const DUPLICATES: &str = "-d";
const RANDOM_MAC: &str = "-R";
const VERBOSE: &str = "-v";

/// Builds probe invocations, elevated through the configured wrapper.
#[derive(Debug, Clone)]
pub struct StrategySelector {
    probe_binary: String,
    privilege_wrapper: Option<String>,
}

impl StrategySelector {
    pub fn new(probe_binary: impl Into<String>, privilege_wrapper: Option<String>) -> Self {
        Self {
            probe_binary: probe_binary.into(),
            privilege_wrapper,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.probe_binary.clone(), cfg.privilege_wrapper.clone())
    }

    pub fn build_invocation(&self, mode: &ScanMode) -> Invocation {
        self.elevated(mode_args(mode))
    }

    /// Scans exactly `target` (an IP or a range) with no other flag.
    pub fn build_custom_invocation(&self, target: &str) -> Result<Invocation> {
        let target = target.trim();
        if target.is_empty() {
            return Err(ScanError::InvalidArgument(
                "custom scan target must not be empty".to_string(),
            ));
        }
        Ok(self.elevated(vec![target.to_string()]))
    }

    fn elevated(&self, probe_args: Vec<String>) -> Invocation {
        match &self.privilege_wrapper {
            Some(wrapper) => {
                let mut args = Vec::with_capacity(probe_args.len() + 1);
                args.push(self.probe_binary.clone());
                args.extend(probe_args);
                Invocation::new(wrapper.clone(), args)
            }
            None => Invocation::new(self.probe_binary.clone(), probe_args),
        }
    }
}

fn mode_args(mode: &ScanMode) -> Vec<String> {
    match mode {
        ScanMode::Local => vec![LOCAL_NET.into()],
        ScanMode::Interface { name } => vec![INTERFACE.into(), name.clone(), LOCAL_NET.into()],
        ScanMode::Subnet { cidr } => vec![cidr.clone()],
        ScanMode::Retry { count } => vec![RETRY.into(), count.to_string(), LOCAL_NET.into()],
        ScanMode::Bandwidth { packets_per_sec } => {
            vec![BANDWIDTH.into(), packets_per_sec.to_string(), LOCAL_NET.into()]
        }
        ScanMode::Duplicates => vec![LOCAL_NET.into(), DUPLICATES.into()],
        ScanMode::RandomMac => vec![LOCAL_NET.into(), RANDOM_MAC.into()],
        ScanMode::Verbose => vec![LOCAL_NET.into(), VERBOSE.into()],
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
