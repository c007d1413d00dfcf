//! `warden list-servers` — list registered server names.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::orchestrator;

/// Run `warden list-servers`. Only names are shown — startup command text
/// stays in the registry.
///
/// # Errors
///
/// Returns an error if the registry is unavailable.
pub async fn run(app: &AppContext) -> Result<()> {
    let names = orchestrator::list_servers(&app.registry).await?;

    if names.is_empty() {
        app.output
            .info("No servers registered yet. Create one: warden create-server <name>");
        return Ok(());
    }

    app.output.info("Registered servers:");
    for name in &names {
        app.output.item(name);
    }
    Ok(())
}
