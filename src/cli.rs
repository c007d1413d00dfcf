//! CLI argument parsing with clap derive.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;

/// Control panel for cloud-hosted game servers
#[derive(Parser)]
#[command(
    name = "warden",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (the NO_COLOR environment variable is also
    /// honored, whatever its value)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a new server definition
    CreateServer(commands::create::CreateArgs),

    /// List registered servers
    ListServers,

    /// Start the instance and launch a server on it
    StartServer(commands::start::StartArgs),

    /// Stop the instance
    StopServer,
}

impl Cli {
    /// Dispatch the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error if context construction or the command itself fails.
    pub async fn run(self) -> Result<()> {
        let app = AppContext::new(self.quiet, self.no_color)?;
        match self.command {
            Command::CreateServer(args) => commands::create::run(&args, &app).await,
            Command::ListServers => commands::list::run(&app).await,
            Command::StartServer(args) => commands::start::run(&args, &app).await,
            Command::StopServer => commands::stop::run(&app).await,
        }
    }
}
