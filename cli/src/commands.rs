pub mod custom;
pub mod interfaces;
pub mod scan;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use trustscan_common::config::{self, Config};
use trustscan_common::network::mode::ScanParams;

#[derive(Parser)]
#[command(name = "trustscan")]
#[command(about = "Discover devices on the local network and check them against an allowlist.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// File with one trusted IP address per line
    #[arg(long, global = true, default_value = config::DEFAULT_TRUST_FILE)]
    pub trust_file: PathBuf,

    /// ARP probe executable
    #[arg(long, global = true, default_value = config::DEFAULT_PROBE_BINARY)]
    pub probe: String,

    /// Seconds a probe may run before it is killed
    #[arg(long, global = true, default_value_t = config::DEFAULT_PROBE_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Run the probe directly instead of through sudo
    #[arg(long, global = true)]
    pub no_sudo: bool,

    /// Maximum number of probes running at once
    #[arg(long, global = true, default_value_t = config::DEFAULT_MAX_CONCURRENT_SCANS)]
    pub max_scans: usize,

    /// Print debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Survey the network with a scan mode and summarize trust
    #[command(alias = "s")]
    Scan {
        /// local, interface, subnet, retry, bandwidth, duplicates, random_mac or verbose
        #[arg(short, long, default_value = "local")]
        mode: String,

        #[command(flatten)]
        params: ModeArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scan one IP address or range
    #[command(alias = "c")]
    Custom {
        target: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List network interfaces usable for an interface scan
    #[command(alias = "i")]
    Interfaces {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct ModeArgs {
    /// Interface for the `interface` mode
    #[arg(short, long)]
    pub interface: Option<String>,

    /// CIDR range for the `subnet` mode
    #[arg(short, long)]
    pub subnet: Option<String>,

    /// Probe repetitions for the `retry` mode
    #[arg(short, long, allow_negative_numbers = true)]
    pub retry: Option<i64>,

    /// Packets per second for the `bandwidth` mode
    #[arg(short, long, allow_negative_numbers = true)]
    pub bandwidth: Option<i64>,
}

impl From<ModeArgs> for ScanParams {
    fn from(args: ModeArgs) -> Self {
        ScanParams {
            interface: args.interface,
            subnet: args.subnet,
            retry: args.retry,
            bandwidth: args.bandwidth,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            probe_binary: self.probe.clone(),
            privilege_wrapper: (!self.no_sudo).then(|| config::DEFAULT_PRIVILEGE_WRAPPER.to_string()),
            probe_timeout: Duration::from_secs(self.timeout),
            trust_file: self.trust_file.clone(),
            max_concurrent_scans: self.max_scans,
        }
    }
}
