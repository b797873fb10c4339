use std::time::{Duration, Instant};

use colored::*;
use trustscan_common::network::device::{DeviceRecord, ScanReport, ScanResponse};
use trustscan_common::network::mode::ScanRequest;
use trustscan_core::ScanOrchestrator;

use crate::mprint;
use crate::terminal::{colors, format, print};

/// Runs a survey scan. Returns whether the scan produced a report.
pub async fn scan(
    orchestrator: &ScanOrchestrator,
    request: ScanRequest,
    json: bool,
) -> anyhow::Result<bool> {
    let start_time: Instant = Instant::now();
    let result = orchestrator.run_scan(&request).await;
    let succeeded = result.is_ok();

    if json {
        let response: ScanResponse<ScanReport> = result.into();
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(succeeded);
    }

    if let Ok(report) = result {
        scan_ends(&report, start_time.elapsed());
    }
    Ok(succeeded)
}

fn scan_ends(report: &ScanReport, total_time: Duration) {
    if report.devices().is_empty() {
        print::header("zero devices detected");
        print::no_results();
        return;
    }

    print::header(&format!("{} scan", report.scan_mode()));
    print_devices(report.devices());
    print_summary(report, total_time);
}

pub fn print_devices(devices: &[DeviceRecord]) {
    for (idx, device) in devices.iter().enumerate() {
        print::tree_head(idx, &device.ip);
        print::as_tree_one_level(format::device_details(device));
        if idx + 1 != devices.len() {
            mprint!();
        }
    }
}

fn print_summary(report: &ScanReport, total_time: Duration) {
    let total: ColoredString = format!("{} devices", report.total()).bold().green();
    let safe: ColoredString = format!("{} safe", report.safe_count()).color(colors::TRUSTED).bold();
    let not_safe: ColoredString =
        format!("{} not safe", report.unsafe_count()).color(colors::UNTRUSTED).bold();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print::fat_separator();
    print::centerln(
        &format!("Scan Complete: {total} ({safe}, {not_safe}) in {total_time}")
            .color(colors::TEXT_DEFAULT)
            .to_string(),
    );
}
