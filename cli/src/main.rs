mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, custom, interfaces, scan};
use trustscan_common::network::mode::ScanRequest;
use trustscan_core::ScanOrchestrator;
use tracing::warn;

use crate::terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = commands.config();
    if cfg.privilege_wrapper.is_none() && !is_root::is_root() {
        warn!("Running the probe without sudo as a non-root user, raw sockets will likely be denied");
    }

    let succeeded = match commands.command {
        Commands::Scan { mode, params, json } => {
            if !json {
                print::header("starting network scan");
            }
            let orchestrator = ScanOrchestrator::from_config(&cfg);
            scan::scan(&orchestrator, ScanRequest::new(mode, params.into()), json).await?
        }
        Commands::Custom { target, json } => {
            if !json {
                print::header("starting custom scan");
            }
            let orchestrator = ScanOrchestrator::from_config(&cfg);
            custom::custom(&orchestrator, &target, json).await?
        }
        Commands::Interfaces { json } => {
            interfaces::interfaces(json)?;
            true
        }
    };

    Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
