//! Server Registry — durable mapping from server name to startup command.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::application::ports::ServerStore;
use crate::domain::{RegistryError, ServerDefinition};

/// Registry over an append-only store.
///
/// `define` holds a single-writer lock across its read-then-append so two
/// concurrent definitions cannot race into a duplicate name. Reads take no
/// lock and materialize a fresh snapshot every time.
pub struct Registry<S: ServerStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: ServerStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Materialize a fresh snapshot of every definition. A missing store
    /// reads as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageUnavailable`] if the store exists but
    /// cannot be read.
    pub async fn list(&self) -> Result<HashMap<String, String>, RegistryError> {
        let defs = self.store.load().await?;
        Ok(defs
            .into_iter()
            .map(|d| (d.name, d.startup_command))
            .collect())
    }

    /// Case-insensitive membership test.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageUnavailable`] if the store cannot be read.
    pub async fn exists(&self, name: &str) -> Result<bool, RegistryError> {
        let wanted = name.to_lowercase();
        Ok(self
            .list()
            .await?
            .keys()
            .any(|k| k.to_lowercase() == wanted))
    }

    /// Record a new definition. Returns `false` without mutating state when
    /// a case-insensitive collision exists.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageUnavailable`] if the store cannot be
    /// read or the append cannot be durably written.
    pub async fn define(&self, name: &str, startup_command: &str) -> Result<bool, RegistryError> {
        let _guard = self.write_lock.lock().await;
        if self.exists(name).await? {
            return Ok(false);
        }
        self.store
            .append(&ServerDefinition {
                name: name.to_string(),
                startup_command: startup_command.to_string(),
            })
            .await?;
        Ok(true)
    }

    /// Exact-key lookup of a stored startup command.
    ///
    /// Deliberately case-sensitive: `define` rejects case-insensitive
    /// duplicates, but lookups match the stored key byte-for-byte. Callers
    /// are expected to pass the same normalized name they defined with.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageUnavailable`] if the store cannot be read.
    pub async fn resolve_command(&self, name: &str) -> Result<Option<String>, RegistryError> {
        Ok(self.list().await?.remove(name))
    }
}
