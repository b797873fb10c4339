//! Shared vocabulary for trustscan.
//!
//! Holds the types that cross crate boundaries: the scan configuration, the
//! error type every operation reports, and the network models produced and
//! consumed by the scan pipeline.

pub mod config;
pub mod error;
pub mod network;

pub use error::{Result, ScanError};
