//! Scan pipeline of trustscan.
//!
//! Turns a scan request into classified devices: [`probe::strategy`] picks
//! the probe arguments, [`probe::ProcessExecutor`] runs the probe under a time
//! budget, [`parser`] reads its output, [`trust`] supplies the allowlist and
//! [`orchestrator`] ties the steps together.

pub mod orchestrator;
pub mod parser;
pub mod probe;
pub mod system;
pub mod trust;

pub use orchestrator::ScanOrchestrator;
