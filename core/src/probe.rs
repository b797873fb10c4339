//! The boundary to the external ARP probe.
//!
//! The probe is an opaque command line tool; only its arguments and its text
//! output matter here. [`strategy`] decides what to run, a [`ProbeExecutor`]
//! runs it.

use std::fmt;

use async_trait::async_trait;
use trustscan_common::Result;

mod process;
pub mod strategy;

pub use process::ProcessExecutor;

/// A fully resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Everything a finished probe printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was ended by a signal.
    pub exit_code: Option<i32>,
}

impl ProbeOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs one invocation to completion.
///
/// Implementations spawn a fresh process per call and bound it in time.
/// A non-zero exit is not an error: the output is returned all the same.
#[async_trait]
pub trait ProbeExecutor: Send + Sync {
    async fn execute(&self, invocation: &Invocation) -> Result<ProbeOutput>;
}
