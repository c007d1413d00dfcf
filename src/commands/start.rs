//! `warden start-server` — power on the instance and launch a named server.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::orchestrator;
use crate::domain::{ExecError, StartError};
use crate::output::truncate_diagnostic;

/// Arguments for the start-server command.
#[derive(Args)]
pub struct StartArgs {
    /// Name of the server to launch
    pub name: String,
}

/// Run `warden start-server`.
///
/// Each failure kind gets its own rendering so the user can tell a missing
/// definition from an address problem from a remote command failure.
///
/// # Errors
///
/// Returns an error describing the failing stage of the start pipeline.
pub async fn run(args: &StartArgs, app: &AppContext) -> Result<()> {
    app.output
        .info("Starting server, this can take a few minutes...");

    let result = orchestrator::start_server(
        &app.registry,
        &app.compute,
        &app.executor,
        &app.settings,
        &args.name,
    )
    .await;

    match result {
        Ok(report) => {
            app.output
                .success(&format!("Successfully started '{}'!", report.name));
            app.output.kv("IP address", &report.address);
            Ok(())
        }
        Err(StartError::UnknownServer { name }) => {
            anyhow::bail!(
                "no server named '{name}'. Register it first: warden create-server {name}"
            )
        }
        Err(StartError::AddressResolutionFailed { addresses }) => {
            anyhow::bail!(
                "expected exactly one instance address, found {}: {}",
                addresses.len(),
                truncate_diagnostic(&format!("{addresses:?}"))
            )
        }
        Err(StartError::Exec(ExecError::RemoteCommandFailed { exit_code })) => {
            anyhow::bail!("connected, but the startup command exited with status {exit_code}")
        }
        Err(e) => anyhow::bail!("{}", truncate_diagnostic(&e.to_string())),
    }
}
