use colored::*;
use trustscan_common::network::device::{DeviceRecord, TrustStatus};

use crate::terminal::colors;

type Detail = (String, ColoredString);

const UNKNOWN_VENDOR: &str = "Unknown";

pub fn device_details(device: &DeviceRecord) -> Vec<Detail> {
    vec![
        ("IPv4".to_string(), device.ip.color(colors::IPV4_ADDR)),
        ("MAC".to_string(), device.mac.color(colors::MAC_ADDR)),
        ("Vendor".to_string(), vendor_value(&device.vendor)),
        ("Status".to_string(), trust_value(device.trust_status)),
    ]
}

fn vendor_value(vendor: &str) -> ColoredString {
    let vendor = vendor.trim();
    if vendor.is_empty() {
        UNKNOWN_VENDOR.dimmed()
    } else {
        vendor.color(colors::TEXT_DEFAULT)
    }
}

pub fn trust_value(status: TrustStatus) -> ColoredString {
    match status {
        TrustStatus::Trusted => "Safe".color(colors::TRUSTED).bold(),
        TrustStatus::Untrusted => "Not Safe".color(colors::UNTRUSTED).bold(),
    }
}
