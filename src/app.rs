//! Application context — unified state passed to every command handler.
//!
//! Constructed once in `Cli::run()` and passed as `&AppContext` to all
//! command handlers. This replaces the module-level client and config
//! globals of a chat-bot host with explicit, injectable state.

use anyhow::Result;

use crate::application::services::registry::Registry;
use crate::domain::Settings;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config;
use crate::infra::gcloud::GcloudCompute;
use crate::infra::ssh::SshExecutor;
use crate::infra::store::FlatFileStore;
use crate::output::OutputContext;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Environment-derived settings.
    pub settings: Settings,
    /// Server registry over the flat-file store.
    pub registry: Registry<FlatFileStore>,
    /// Cloud instance lifecycle client.
    pub compute: GcloudCompute<TokioCommandRunner>,
    /// SSH remote executor.
    pub executor: SshExecutor<TokioCommandRunner>,
}

impl AppContext {
    /// Build the context from CLI flags and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if required settings are missing or the registry
    /// path cannot be determined.
    pub fn new(quiet: bool, no_color: bool) -> Result<Self> {
        let settings = config::load_settings()?;
        let compute = GcloudCompute::new(TokioCommandRunner, &settings);
        Ok(Self {
            output: OutputContext::new(no_color, quiet),
            registry: Registry::new(FlatFileStore::with_path(settings.registry_path.clone())),
            executor: SshExecutor::new(TokioCommandRunner),
            compute,
            settings,
        })
    }
}
