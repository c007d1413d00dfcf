//! Flat-file implementation of the `ServerStore` port.
//!
//! One record per line, `name,startup_command`, no header. Records are
//! split on the FIRST comma only when reading, so commands containing
//! commas survive a round trip; names are validated comma-free before they
//! reach the store. A missing file reads as an empty store and is created
//! lazily by the first append. File I/O runs under
//! `tokio::task::spawn_blocking`.

use std::io::Write as _;
use std::path::PathBuf;

use crate::application::ports::ServerStore;
use crate::domain::{RegistryError, ServerDefinition};

pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Store at an explicit path. The path comes from `Settings` in
    /// production and from a temp directory in tests; the store itself
    /// never consults the environment.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn unavailable(&self, source: std::io::Error) -> RegistryError {
        RegistryError::StorageUnavailable {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn load_sync(&self) -> Result<Vec<ServerDefinition>, RegistryError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.unavailable(e)),
        };

        let mut defs = Vec::new();
        for line in content.lines() {
            // Lines without a delimiter (blank or truncated) are skipped,
            // not rejected.
            if let Some((name, command)) = line.split_once(',') {
                defs.push(ServerDefinition {
                    name: name.to_string(),
                    startup_command: command.to_string(),
                });
            }
        }
        Ok(defs)
    }

    fn append_sync(&self, def: &ServerDefinition) -> Result<(), RegistryError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;
        writeln!(file, "{},{}", def.name, def.startup_command)
            .map_err(|e| self.unavailable(e))?;
        file.sync_all().map_err(|e| self.unavailable(e))?;
        Ok(())
    }

    fn join_failure(&self, e: tokio::task::JoinError) -> RegistryError {
        RegistryError::StorageUnavailable {
            path: self.path.display().to_string(),
            source: std::io::Error::other(e),
        }
    }
}

impl ServerStore for FlatFileStore {
    async fn load(&self) -> Result<Vec<ServerDefinition>, RegistryError> {
        let store = Self::with_path(self.path.clone());
        tokio::task::spawn_blocking(move || store.load_sync())
            .await
            .map_err(|e| self.join_failure(e))?
    }

    async fn append(&self, def: &ServerDefinition) -> Result<(), RegistryError> {
        let store = Self::with_path(self.path.clone());
        let def = def.clone();
        tokio::task::spawn_blocking(move || store.append_sync(&def))
            .await
            .map_err(|e| self.join_failure(e))?
    }
}
