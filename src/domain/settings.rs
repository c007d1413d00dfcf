//! Runtime settings, loaded once at startup and passed by reference.

use std::path::PathBuf;

/// All environment-derived options. Constructed once by
/// `infra::config::load_settings` and carried in the application context —
/// no ambient globals.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Cloud project identifier.
    pub project_id: String,
    /// Zone the instance lives in.
    pub zone: String,
    /// Name of the single configured compute instance.
    pub instance: String,
    /// User to authenticate as over SSH.
    pub ssh_user: String,
    /// Private key path; a leading `~/` is expanded by the executor.
    pub ssh_key_path: String,
    /// Modpack platform API key interpolated into startup commands.
    pub modpack_api_key: String,
    /// Comma-separated whitelist entries interpolated into startup commands.
    pub whitelist: String,
    /// Path of the registry file backing the server store.
    pub registry_path: PathBuf,
}
