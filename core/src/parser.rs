//! Reads the line-oriented output of the ARP probe.
//!
//! A host line holds, separated by whitespace, an IPv4 address, a lowercase
//! `xx:xx:xx:xx:xx:xx` hardware address and the vendor label up to the end of
//! the line:
//!
//! ```text
//! 192.168.1.5	aa:bb:cc:dd:ee:ff	Acme Corp
//! ```
//!
//! Anything else (banners, summaries, verbose diagnostics, blank lines) is
//! skipped. Records keep the order of the lines and are never deduplicated,
//! since a repeated IP is exactly what a duplicates scan reports.

use std::sync::OnceLock;

use regex::Regex;
use trustscan_common::network::device::{DeviceRecord, TrustStatus};

use crate::trust::TrustSnapshot;

static HOST_LINE: OnceLock<Regex> = OnceLock::new();

fn host_line_pattern() -> &'static Regex {
    HOST_LINE.get_or_init(|| {
        Regex::new(
            r"\b(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\s+([0-9a-f]{2}(?::[0-9a-f]{2}){5})(?:\s+(.*)|\s*$)",
        )
        .expect("host line pattern must compile")
    })
}

/// Parses probe output, classifying each device against `trusted`.
pub fn parse(raw: &str, trusted: &TrustSnapshot) -> Vec<DeviceRecord> {
    raw.lines()
        .filter_map(|line| parse_line(line, trusted))
        .collect()
}

fn parse_line(line: &str, trusted: &TrustSnapshot) -> Option<DeviceRecord> {
    let captures = host_line_pattern().captures(line)?;

    let ip = captures[1].to_string();
    let trust_status = if trusted.contains(&ip) {
        TrustStatus::Trusted
    } else {
        TrustStatus::Untrusted
    };

    Some(DeviceRecord {
        mac: captures[2].to_string(),
        vendor: captures
            .get(3)
            .map(|vendor| vendor.as_str().to_string())
            .unwrap_or_default(),
        ip,
        trust_status,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
