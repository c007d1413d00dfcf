//! `warden stop-server` — stop the configured instance.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::orchestrator;
use crate::output::truncate_diagnostic;

/// Run `warden stop-server`.
///
/// # Errors
///
/// Returns an error if the provider rejects or times out the stop.
pub async fn run(app: &AppContext) -> Result<()> {
    app.output.info("Shutting down server...");
    if let Err(e) = orchestrator::stop_server(&app.compute).await {
        anyhow::bail!("{}", truncate_diagnostic(&e.to_string()));
    }
    app.output.success("Shut down server.");
    Ok(())
}
