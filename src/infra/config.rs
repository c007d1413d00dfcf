//! Settings loading from the environment.
//!
//! `.env` files are honored by `main` (via `dotenvy`) before this runs, so
//! local development and deployed environments read the same way. This is
//! the only module that touches the process environment; everything
//! downstream works from the resulting [`Settings`].

use std::path::PathBuf;

use crate::domain::{ConfigError, Settings};

fn required(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::Missing { key })
}

fn registry_path() -> Result<PathBuf, ConfigError> {
    if let Ok(val) = std::env::var("WARDEN_REGISTRY") {
        return Ok(PathBuf::from(val));
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
    Ok(home.join(".warden").join("servers.txt"))
}

/// Load all settings, failing fast on the first missing variable. The
/// registry path falls back to `~/.warden/servers.txt` when
/// `WARDEN_REGISTRY` is unset.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] naming the absent variable, or
/// [`ConfigError::NoHome`] if no home directory exists for the default
/// registry path.
pub fn load_settings() -> Result<Settings, ConfigError> {
    Ok(Settings {
        project_id: required("PROJECT_ID")?,
        zone: required("ZONE")?,
        instance: required("INSTANCE")?,
        ssh_user: required("SSH_USER")?,
        ssh_key_path: required("SSH_KEY_PATH")?,
        modpack_api_key: required("CF_API_KEY")?,
        whitelist: required("WHITELIST")?,
        registry_path: registry_path()?,
    })
}
