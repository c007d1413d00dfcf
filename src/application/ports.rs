//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::process::Output;
use std::time::Duration;

use crate::domain::{ComputeError, ExecError, RegistryError, RunError, ServerDefinition};

/// Cloud VM lifecycle operations against the single configured instance.
///
/// Implementations block (asynchronously) until the provider's long-running
/// operation resolves or the wait bound elapses.
#[allow(async_fn_in_trait)]
pub trait InstanceLifecycle {
    /// Start the instance. Idempotent if it is already running.
    async fn start(&self) -> Result<(), ComputeError>;

    /// Stop the instance.
    async fn stop(&self) -> Result<(), ComputeError>;

    /// Public IPv4 addresses attached to the instance through one-to-one
    /// NAT configs. An instance with no network interfaces yields an empty
    /// vec, not an error.
    async fn external_ipv4(&self) -> Result<Vec<String>, ComputeError>;
}

/// One-shot remote command execution over SSH.
#[allow(async_fn_in_trait)]
pub trait RemoteExecutor {
    /// Open exactly one session to `host` authenticating as `user` with the
    /// private key at `key_path`, run `command` as a single shell
    /// invocation, and tear the session down on every exit path.
    async fn run(
        &self,
        host: &str,
        user: &str,
        key_path: &str,
        command: &str,
    ) -> Result<(), ExecError>;
}

/// Append-only persistence for server definitions.
#[allow(async_fn_in_trait)]
pub trait ServerStore {
    /// Load every record. A missing store reads as empty.
    async fn load(&self) -> Result<Vec<ServerDefinition>, RegistryError>;

    /// Durably append one record.
    async fn append(&self, def: &ServerDefinition) -> Result<(), RegistryError>;
}

/// Abstracts process execution so the provider and ssh adapters can be
/// tested without spawning real processes.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion, capturing output and enforcing
    /// `timeout`. The child must not outlive the timeout.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output, RunError>;
}
