use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use trustscan_common::config::Config;
use trustscan_core::ScanOrchestrator;

/// Output of `arp-scan -l` on a small home network.
pub const ARP_SCAN_OUTPUT: &str = "\
Interface: eth0, type: EN10MB, MAC: 00:11:22:33:44:55, IPv4: 192.168.1.10
Starting arp-scan 1.10.0 with 256 hosts (https://github.com/royhills/arp-scan)
192.168.1.1\t3c:84:6a:01:02:03\tTP-LINK TECHNOLOGIES CO.,LTD.
192.168.1.5\taa:bb:cc:dd:ee:ff\tAcme Corp
192.168.1.23\tb8:27:eb:12:34:56\tRaspberry Pi Foundation

3 packets received by filter, 0 packets dropped by kernel
Ending arp-scan 1.10.0: 256 hosts scanned in 1.874 seconds (136.61 hosts/sec). 3 responded
";

/// A workspace holding a fake probe script and a trust list.
pub struct FakeProbe {
    dir: TempDir,
}

impl FakeProbe {
    /// Creates a probe that runs `script` with the probe arguments as `$@`.
    pub fn new(script: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("probe.sh"), script).unwrap();
        Self { dir }
    }

    /// A probe printing `output` verbatim and recording its arguments.
    pub fn printing(output: &str) -> Self {
        Self::new(&format!(
            "echo \"$@\" > \"$(dirname \"$0\")/args\"\ncat <<'PROBE_EOF'\n{output}PROBE_EOF\n"
        ))
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn trust_file(&self) -> PathBuf {
        self.path("trusted_ips.txt")
    }

    pub fn trust(&self, ips: &[&str]) {
        let mut content = ips.join("\n");
        content.push('\n');
        fs::write(self.trust_file(), content).unwrap();
    }

    /// Arguments of the last run, if the script recorded them.
    pub fn recorded_args(&self) -> Option<String> {
        fs::read_to_string(self.path("args"))
            .ok()
            .map(|args| args.trim().to_string())
    }

    pub fn config(&self, timeout: Duration) -> Config {
        Config {
            probe_binary: self.path("probe.sh").to_string_lossy().into_owned(),
            privilege_wrapper: Some("sh".to_string()),
            probe_timeout: timeout,
            trust_file: self.trust_file(),
            max_concurrent_scans: 2,
        }
    }

    pub fn orchestrator(&self) -> ScanOrchestrator {
        ScanOrchestrator::from_config(&self.config(Duration::from_secs(10)))
    }
}

/// Whether `pid` is alive. Zombies waiting for their reaper count as gone.
#[cfg(target_os = "linux")]
pub fn is_running(pid: u32) -> bool {
    fs::read_to_string(format!("/proc/{pid}/stat"))
        .ok()
        .and_then(|stat| {
            let state = stat.rsplit_once(')')?.1.trim_start().chars().next()?;
            Some(state != 'Z')
        })
        .unwrap_or(false)
}
