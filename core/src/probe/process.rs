use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::timeout;
use tracing::{debug, warn};
use trustscan_common::{Result, ScanError};

use super::{Invocation, ProbeExecutor, ProbeOutput};

type Capture = JoinHandle<std::io::Result<Vec<u8>>>;

/// Time a timed out probe group gets to exit on SIGTERM before SIGKILL.
const KILL_GRACE: Duration = Duration::from_secs(2);

/// Runs the probe as a child process bounded by a wall-clock timeout.
///
/// On Unix the probe leads its own process group, so a privilege wrapper and
/// everything it started are terminated together when the timeout expires.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    timeout: Duration,
}

impl ProcessExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ProbeExecutor for ProcessExecutor {
    async fn execute(&self, invocation: &Invocation) -> Result<ProbeOutput> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(unix)]
        command.process_group(0);

        let mut child = command.spawn().map_err(|e| {
            ScanError::ExecutionFailure(format!("failed to start {}: {e}", invocation.program))
        })?;

        let pid = child.id();
        debug!(pid, command = %invocation, "probe started");

        let stdout = capture(child.stdout.take());
        let stderr = capture(child.stderr.take());
        let readers = [stdout.abort_handle(), stderr.abort_handle()];

        // The deadline covers the reads too: a process that inherited the
        // pipes can hold them open after the probe itself has exited.
        let finished = timeout(self.timeout, async {
            let status = child.wait().await.map_err(|e| {
                ScanError::ExecutionFailure(format!(
                    "failed to wait for {}: {e}",
                    invocation.program
                ))
            })?;
            Ok::<_, ScanError>(ProbeOutput {
                stdout: collect(stdout).await?,
                stderr: collect(stderr).await?,
                exit_code: status.code(),
            })
        })
        .await;

        let output = match finished {
            Ok(result) => result.inspect_err(|_| readers.iter().for_each(AbortHandle::abort))?,
            Err(_) => {
                terminate(&mut child, pid, invocation).await;
                readers.iter().for_each(AbortHandle::abort);
                return Err(ScanError::Timeout(self.timeout));
            }
        };

        if !output.success() {
            warn!(
                command = %invocation,
                exit_code = ?output.exit_code,
                "probe exited unsuccessfully, parsing its output anyway"
            );
        }
        if !output.stderr.trim().is_empty() {
            warn!(command = %invocation, stderr = %output.stderr.trim(), "probe wrote to stderr");
        }

        Ok(output)
    }
}

/// Stops the probe and everything it started, then reaps the direct child.
///
/// The group gets SIGTERM first because a wrapper like `sudo` relays it to
/// the command it runs, while SIGKILL would only ever reach the wrapper.
async fn terminate(child: &mut Child, pid: Option<u32>, invocation: &Invocation) {
    #[cfg(unix)]
    if let Some(pgid) = pid {
        signal_group(pgid, libc::SIGTERM);
        if timeout(KILL_GRACE, child.wait()).await.is_err() {
            debug!(pgid, "probe ignored SIGTERM");
        }
        signal_group(pgid, libc::SIGKILL);
    }
    #[cfg(not(unix))]
    let _ = pid;

    if let Ok(Some(_)) = child.try_wait() {
        return;
    }
    // `kill` also reaps the child, so it is gone once this returns.
    if let Err(e) = child.kill().await {
        warn!(command = %invocation, error = %e, "failed to kill timed out probe");
    }
}

#[cfg(unix)]
fn signal_group(pgid: u32, signal: libc::c_int) {
    let Ok(pgid) = libc::pid_t::try_from(pgid) else {
        return;
    };
    // SAFETY: `kill` takes no pointers; a negative pid addresses the group.
    if unsafe { libc::kill(-pgid, signal) } != 0 {
        let err = std::io::Error::last_os_error();
        if err.raw_os_error() != Some(libc::ESRCH) {
            warn!(pgid, signal, error = %err, "failed to signal probe group");
        }
    }
}

fn capture<R>(pipe: Option<R>) -> Capture
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf).await?;
        }
        Ok(buf)
    })
}

async fn collect(capture: Capture) -> Result<String> {
    let bytes = capture
        .await
        .map_err(|e| ScanError::ExecutionFailure(format!("output reader failed: {e}")))?
        .map_err(|e| ScanError::ExecutionFailure(format!("failed to read probe output: {e}")))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
