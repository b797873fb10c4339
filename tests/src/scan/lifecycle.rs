use std::time::Duration;

use trustscan_common::network::mode::ScanRequest;
use trustscan_common::ScanError;
use trustscan_core::ScanOrchestrator;

use crate::util::{FakeProbe, ARP_SCAN_OUTPUT};

#[tokio::test]
async fn slow_probe_times_out_and_is_killed() {
    let probe = FakeProbe::new("echo $$ > \"$(dirname \"$0\")/pid\"\nexec sleep 30\n");
    let orchestrator = ScanOrchestrator::from_config(&probe.config(Duration::from_millis(500)));

    let err = orchestrator.run_scan(&ScanRequest::default()).await.unwrap_err();

    assert!(matches!(err, ScanError::Timeout(_)), "got {err:?}");
    assert!(err.to_string().contains("timeout"));

    #[cfg(target_os = "linux")]
    {
        let pid: u32 = std::fs::read_to_string(probe.path("pid"))
            .unwrap()
            .trim()
            .parse()
            .unwrap();
        assert!(!crate::util::is_running(pid), "probe {pid} outlived its timeout");
    }
}

#[tokio::test]
async fn timeout_kills_background_children_of_the_scan() {
    let probe = FakeProbe::new("sleep 30 &\necho $! > \"$(dirname \"$0\")/pid\"\nwait\n");
    let orchestrator = ScanOrchestrator::from_config(&probe.config(Duration::from_millis(500)));

    let err = orchestrator.run_scan(&ScanRequest::default()).await.unwrap_err();

    assert!(matches!(err, ScanError::Timeout(_)), "got {err:?}");

    #[cfg(target_os = "linux")]
    {
        let pid: u32 = std::fs::read_to_string(probe.path("pid"))
            .unwrap()
            .trim()
            .parse()
            .unwrap();
        assert!(!crate::util::is_running(pid), "background process {pid} outlived its timeout");
    }
}

#[tokio::test]
async fn held_output_pipe_does_not_outlast_the_timeout() {
    let probe = FakeProbe::new("sleep 10 &\nprintf '192.168.1.1\\t3c:84:6a:01:02:03\\tTP-LINK\\n'\n");
    let orchestrator = ScanOrchestrator::from_config(&probe.config(Duration::from_millis(500)));
    let started = std::time::Instant::now();

    let err = orchestrator.run_scan(&ScanRequest::default()).await.unwrap_err();

    assert!(matches!(err, ScanError::Timeout(_)), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(5), "took {:?}", started.elapsed());
}

#[tokio::test]
async fn empty_custom_target_spawns_nothing() {
    let probe = FakeProbe::new("touch \"$(dirname \"$0\")/spawned\"\n");

    let err = probe.orchestrator().run_custom_scan("").await.unwrap_err();

    assert!(matches!(err, ScanError::InvalidArgument(_)), "got {err:?}");
    assert!(!probe.path("spawned").exists());
}

#[tokio::test]
async fn concurrent_scans_are_independent() {
    let probe = FakeProbe::printing(ARP_SCAN_OUTPUT);
    probe.trust(&["192.168.1.1"]);
    let orchestrator = probe.orchestrator();
    let request = ScanRequest::default();

    let (first, second, third) = tokio::join!(
        orchestrator.run_scan(&request),
        orchestrator.run_scan(&request),
        orchestrator.run_custom_scan("192.168.1.1"),
    );

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(third.unwrap().len(), 3);
}
