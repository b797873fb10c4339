use trustscan_common::network::device::TrustStatus;
use trustscan_common::network::mode::{ScanMode, ScanParams, ScanRequest};
use trustscan_common::ScanError;

use crate::util::{FakeProbe, ARP_SCAN_OUTPUT};

#[tokio::test]
async fn survey_scan_classifies_probe_output() {
    let probe = FakeProbe::printing(ARP_SCAN_OUTPUT);
    probe.trust(&["192.168.1.1", "192.168.1.23"]);

    let report = probe
        .orchestrator()
        .run_scan(&ScanRequest::default())
        .await
        .unwrap();

    let ips: Vec<&str> = report.devices().iter().map(|d| d.ip.as_str()).collect();
    assert_eq!(ips, vec!["192.168.1.1", "192.168.1.5", "192.168.1.23"]);
    assert_eq!(report.scan_mode(), "local");
    assert_eq!(report.total(), 3);
    assert_eq!(report.safe_count(), 2);
    assert_eq!(report.unsafe_count(), 1);
    assert_eq!(report.devices()[1].vendor, "Acme Corp");
    assert_eq!(report.devices()[1].trust_status, TrustStatus::Untrusted);
    assert_eq!(probe.recorded_args().as_deref(), Some("-l"));
}

#[tokio::test]
async fn mode_parameters_reach_the_probe() {
    let probe = FakeProbe::printing(ARP_SCAN_OUTPUT);
    let orchestrator = probe.orchestrator();

    let cases = [
        (ScanRequest::from(ScanMode::Retry { count: 5 }), "-r 5 -l"),
        (
            ScanRequest::new("interface", ScanParams { interface: Some("wlan0".into()), ..Default::default() }),
            "-I wlan0 -l",
        ),
        (ScanRequest::new("subnet", ScanParams::default()), "192.168.1.0/24"),
        (ScanRequest::new("bandwidth", ScanParams::default()), "-b 256 -l"),
        (ScanRequest::new("duplicates", ScanParams::default()), "-l -d"),
        (ScanRequest::new("no-such-mode", ScanParams::default()), "-l"),
    ];

    for (request, expected_args) in cases {
        orchestrator.run_scan(&request).await.unwrap();
        assert_eq!(probe.recorded_args().as_deref(), Some(expected_args));
    }
}

#[tokio::test]
async fn duplicate_ips_stay_separate_records() {
    let probe = FakeProbe::printing(
        "192.168.1.7\t00:0c:29:aa:bb:cc\tVMware, Inc.\n\
         192.168.1.7\t00:0c:29:dd:ee:ff\tVMware, Inc. (DUP: 2)\n",
    );
    probe.trust(&["192.168.1.7"]);

    let report = probe
        .orchestrator()
        .run_scan(&ScanRequest::new("duplicates", ScanParams::default()))
        .await
        .unwrap();

    assert_eq!(report.total(), 2);
    assert_eq!(report.safe_count(), 2);
    assert_ne!(report.devices()[0].mac, report.devices()[1].mac);
}

#[tokio::test]
async fn failing_probe_output_is_still_parsed() {
    let probe = FakeProbe::new(
        "printf '192.168.1.5\\taa:bb:cc:dd:ee:ff\\tAcme Corp\\n'\n\
         echo 'pcap_open_live: permission denied' >&2\n\
         exit 1\n",
    );

    let report = probe
        .orchestrator()
        .run_scan(&ScanRequest::default())
        .await
        .unwrap();

    assert_eq!(report.total(), 1);
    assert_eq!(report.devices()[0].ip, "192.168.1.5");
}

#[tokio::test]
async fn missing_probe_is_execution_failure() {
    let probe = FakeProbe::printing(ARP_SCAN_OUTPUT);
    let mut cfg = probe.config(std::time::Duration::from_secs(5));
    cfg.probe_binary = probe.path("not-installed").to_string_lossy().into_owned();
    cfg.privilege_wrapper = None;

    let err = trustscan_core::ScanOrchestrator::from_config(&cfg)
        .run_scan(&ScanRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ScanError::ExecutionFailure(_)), "got {err:?}");
}

#[tokio::test]
async fn trust_list_edits_apply_to_the_next_scan() {
    let probe = FakeProbe::printing(ARP_SCAN_OUTPUT);
    let orchestrator = probe.orchestrator();

    let before = orchestrator.run_scan(&ScanRequest::default()).await.unwrap();
    probe.trust(&["192.168.1.5"]);
    let after = orchestrator.run_scan(&ScanRequest::default()).await.unwrap();

    assert_eq!(before.safe_count(), 0);
    assert_eq!(after.safe_count(), 1);
    assert_eq!(after.devices()[1].trust_status, TrustStatus::Trusted);
    for (a, b) in before.devices().iter().zip(after.devices()) {
        assert_eq!((&a.ip, &a.mac, &a.vendor), (&b.ip, &b.mac, &b.vendor));
    }
}

#[tokio::test]
async fn custom_scan_returns_devices_for_the_target() {
    let probe = FakeProbe::printing(ARP_SCAN_OUTPUT);
    probe.trust(&["192.168.1.23"]);

    let devices = probe
        .orchestrator()
        .run_custom_scan("192.168.1.0/27")
        .await
        .unwrap();

    assert_eq!(devices.len(), 3);
    assert_eq!(devices[2].trust_status, TrustStatus::Trusted);
    assert_eq!(probe.recorded_args().as_deref(), Some("192.168.1.0/27"));
}
