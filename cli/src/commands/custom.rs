use trustscan_common::network::device::{DeviceRecord, ScanResponse};
use trustscan_core::ScanOrchestrator;

use crate::commands::scan::print_devices;
use crate::terminal::print;

/// Scans a single target. Returns whether the scan produced devices.
pub async fn custom(orchestrator: &ScanOrchestrator, target: &str, json: bool) -> anyhow::Result<bool> {
    let result = orchestrator.run_custom_scan(target).await;
    let succeeded = result.is_ok();

    if json {
        let response: ScanResponse<Vec<DeviceRecord>> = result.into();
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(succeeded);
    }

    if let Ok(devices) = result {
        if devices.is_empty() {
            print::header("zero devices detected");
            print::no_results();
        } else {
            print::header(&format!("devices in {}", target.trim()));
            print_devices(&devices);
        }
    }
    Ok(succeeded)
}
