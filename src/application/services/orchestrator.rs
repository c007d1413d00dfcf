//! Command workflows — Define, List, Start, Stop.
//!
//! Each workflow is one linear pipeline with short-circuit failure. All I/O
//! is routed through injected port traits so the command surface can hand in
//! real adapters and tests can hand in stubs.

use tracing::{info, warn};

use crate::application::ports::{InstanceLifecycle, RemoteExecutor, ServerStore};
use crate::application::services::registry::Registry;
use crate::domain::{
    self, ComputeError, DefineError, RegistryError, Settings, StartError,
};

/// Outcome of [`define_server`].
#[derive(Debug, PartialEq, Eq)]
pub enum DefineOutcome {
    Created { name: String },
    AlreadyExists { name: String },
}

/// Successful result of [`start_server`].
#[derive(Debug, PartialEq, Eq)]
pub struct StartReport {
    pub name: String,
    pub address: String,
}

/// Register a new server definition.
///
/// Normalizes and validates the name, assembles the startup command from
/// the template plus configured secrets, and records the pair. A collision
/// is an outcome, not an error.
///
/// # Errors
///
/// Returns a [`DefineError`] if the name is invalid or the registry store
/// is unavailable.
pub async fn define_server(
    registry: &Registry<impl ServerStore>,
    settings: &Settings,
    raw_name: &str,
    modpack: &str,
) -> Result<DefineOutcome, DefineError> {
    let name = domain::normalize_name(raw_name);
    domain::validate_name(&name)?;

    let command = domain::startup_command(
        &name,
        modpack,
        &settings.modpack_api_key,
        &settings.whitelist,
    );
    if registry.define(&name, &command).await? {
        info!(server = %name, "registered new server definition");
        Ok(DefineOutcome::Created { name })
    } else {
        Ok(DefineOutcome::AlreadyExists { name })
    }
}

/// List registered server names, sorted for stable rendering. Startup
/// command text is never surfaced to the user.
///
/// # Errors
///
/// Returns a [`RegistryError`] if the registry store is unavailable.
pub async fn list_servers(
    registry: &Registry<impl ServerStore>,
) -> Result<Vec<String>, RegistryError> {
    let mut names: Vec<String> = registry.list().await?.into_keys().collect();
    names.sort();
    Ok(names)
}

/// Start the configured instance and launch the named server on it.
///
/// Pipeline: power on the instance, resolve its NAT address, look up the
/// stored startup command, then execute it over SSH. Address resolution
/// must yield exactly one address before any remote session is attempted —
/// never execute against an ambiguous or absent address.
///
/// # Errors
///
/// Returns a [`StartError`] naming the failing stage; see the error enum
/// for the kinds callers should render differently.
pub async fn start_server(
    registry: &Registry<impl ServerStore>,
    compute: &impl InstanceLifecycle,
    executor: &impl RemoteExecutor,
    settings: &Settings,
    raw_name: &str,
) -> Result<StartReport, StartError> {
    let name = domain::normalize_name(raw_name);
    info!(server = %name, "start requested");

    compute.start().await?;

    let addresses = compute.external_ipv4().await?;
    let address = match <[String; 1]>::try_from(addresses) {
        Ok([address]) => address,
        Err(addresses) => {
            warn!(?addresses, "unexpected number of addresses for instance");
            return Err(StartError::AddressResolutionFailed { addresses });
        }
    };

    let command = registry
        .resolve_command(&name)
        .await?
        .ok_or_else(|| StartError::UnknownServer { name: name.clone() })?;

    executor
        .run(&address, &settings.ssh_user, &settings.ssh_key_path, &command)
        .await?;

    info!(server = %name, %address, "server started");
    Ok(StartReport { name, address })
}

/// Stop the single configured instance. There is no per-server instance
/// tracking, so stop is not parameterized by name.
///
/// # Errors
///
/// Returns a [`ComputeError`] if the provider rejects or times out the stop.
pub async fn stop_server(compute: &impl InstanceLifecycle) -> Result<(), ComputeError> {
    info!("stop requested");
    compute.stop().await
}
