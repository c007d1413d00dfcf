//! `warden create-server` — register a new server definition.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::orchestrator::{self, DefineOutcome};
use crate::output::truncate_diagnostic;

/// Arguments for the create-server command.
#[derive(Args)]
pub struct CreateArgs {
    /// Name of the server
    pub name: String,

    /// Optional modpack slug, e.g. `cobblemon-neoforge`
    #[arg(default_value = "")]
    pub modpack: String,
}

/// Run `warden create-server`.
///
/// # Errors
///
/// Returns an error if the name is invalid or the registry is unavailable.
pub async fn run(args: &CreateArgs, app: &AppContext) -> Result<()> {
    let outcome =
        orchestrator::define_server(&app.registry, &app.settings, &args.name, &args.modpack)
            .await
            .map_err(|e| anyhow::anyhow!("{}", truncate_diagnostic(&e.to_string())))?;

    match outcome {
        DefineOutcome::Created { name } => {
            app.output.success(&format!("Created server '{name}'."));
            app.output
                .kv("Start it", &format!("warden start-server {name}"));
        }
        DefineOutcome::AlreadyExists { name } => {
            app.output.warn(&format!("'{name}' is already a server."));
        }
    }
    Ok(())
}
