//! # Scan Orchestrator
//!
//! Implements the two scan use cases:
//!
//! * **Survey** ([`ScanOrchestrator::run_scan`]): scan with a scan mode and
//!   summarize the classified devices in a [`ScanReport`].
//! * **Inspect** ([`ScanOrchestrator::run_custom_scan`]): scan one caller
//!   supplied target and return the bare device list.
//!
//! Both run the same pipeline: load the trust list, build the invocation,
//! execute the probe once, parse its stdout. Every failure comes back as a
//! [`ScanError`] value. The orchestrator keeps no state between scans apart
//! from the admission semaphore bounding concurrent probes.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, error, info, info_span, Instrument};
use trustscan_common::config::Config;
use trustscan_common::network::device::{DeviceRecord, ScanReport};
use trustscan_common::network::mode::ScanRequest;
use trustscan_common::{Result, ScanError};

use crate::parser;
use crate::probe::strategy::StrategySelector;
use crate::probe::{Invocation, ProbeExecutor, ProcessExecutor};
use crate::trust::{TrustSnapshot, TrustStore};

pub struct ScanOrchestrator {
    trust_store: TrustStore,
    selector: StrategySelector,
    executor: Box<dyn ProbeExecutor>,
    admission: Arc<Semaphore>,
}

impl ScanOrchestrator {
    pub fn new(
        trust_store: TrustStore,
        selector: StrategySelector,
        executor: Box<dyn ProbeExecutor>,
        max_concurrent_scans: usize,
    ) -> Self {
        Self {
            trust_store,
            selector,
            executor,
            admission: Arc::new(Semaphore::new(max_concurrent_scans.max(1))),
        }
    }

    /// Wires the orchestrator to the real probe process.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            TrustStore::new(cfg.trust_file.clone()),
            StrategySelector::from_config(cfg),
            Box::new(ProcessExecutor::new(cfg.probe_timeout)),
            cfg.max_concurrent_scans,
        )
    }

    /// Runs a survey scan and summarizes the result.
    ///
    /// Exactly one probe runs per call; the `retry` mode is a probe flag, not
    /// a loop here.
    pub async fn run_scan(&self, request: &ScanRequest) -> Result<ScanReport> {
        let span = info_span!("scan", mode = %request.requested_mode);

        async {
            let trusted = self.trust_store.load().await.inspect_err(log_failure)?;
            let invocation = self.selector.build_invocation(&request.mode);
            let devices = self.scan(invocation, &trusted).await.inspect_err(log_failure)?;
            let report = ScanReport::new(request.requested_mode.clone(), devices);

            info!(
                total = report.total(),
                safe = report.safe_count(),
                not_safe = report.unsafe_count(),
                "scan complete"
            );
            Ok::<_, ScanError>(report)
        }
        .instrument(span)
        .await
    }

    /// Scans exactly `target` and returns the devices without a summary.
    ///
    /// An empty target is rejected before anything is spawned.
    pub async fn run_custom_scan(&self, target: &str) -> Result<Vec<DeviceRecord>> {
        let span = info_span!("custom_scan", target = %target.trim());

        async {
            let trusted = self.trust_store.load().await.inspect_err(log_failure)?;
            let invocation = self
                .selector
                .build_custom_invocation(target)
                .inspect_err(log_failure)?;
            let devices = self.scan(invocation, &trusted).await.inspect_err(log_failure)?;

            info!(total = devices.len(), "custom scan complete");
            Ok::<_, ScanError>(devices)
        }
        .instrument(span)
        .await
    }

    async fn scan(
        &self,
        invocation: Invocation,
        trusted: &TrustSnapshot,
    ) -> Result<Vec<DeviceRecord>> {
        let _permit = self
            .admission
            .acquire()
            .await
            .map_err(|e| ScanError::ExecutionFailure(format!("scan admission closed: {e}")))?;

        debug!(command = %invocation, "running probe");
        let output = self.executor.execute(&invocation).await?;

        Ok(parser::parse(&output.stdout, trusted))
    }
}

fn log_failure(err: &ScanError) {
    error!("{err}");
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
