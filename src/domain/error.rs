//! Typed domain error enums.
//!
//! One closed enum per component so callers can branch on kind instead of
//! matching on message text. All types implement `thiserror::Error` and
//! convert to `anyhow::Error` via the `?` operator at the command surface.

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while loading settings from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {key}")]
    Missing { key: &'static str },

    #[error("cannot determine home directory for the registry path")]
    NoHome,
}

// ── Name validation errors ────────────────────────────────────────────────────

/// Errors raised when a server name fails validation after normalization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("server name must not be empty")]
    Empty,

    #[error("server name contains invalid character {ch:?}")]
    InvalidCharacter { ch: char },
}

// ── Registry errors ───────────────────────────────────────────────────────────

/// Errors from the registry's backing store. A missing store is not an
/// error — it reads as an empty snapshot.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("server registry at {path} is unavailable")]
    StorageUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ── Process runner errors ─────────────────────────────────────────────────────

/// Errors from the process runner underlying the provider and ssh adapters.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to spawn {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {secs}s")]
    TimedOut { program: String, secs: u64 },

    #[error("waiting for {program}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

// ── Compute errors ────────────────────────────────────────────────────────────

/// Errors from the cloud instance lifecycle client.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// The provider completed the operation with an error code.
    #[error("cloud operation failed [code {code}]: {message}")]
    OperationFailed { code: i32, message: String },

    /// The provider did not resolve the operation within the wait bound.
    #[error("{operation} did not complete within {secs}s")]
    OperationTimeout { operation: &'static str, secs: u64 },

    /// The provider CLI could not be invoked or produced unusable output.
    #[error("cloud provider unavailable: {detail}")]
    Unavailable { detail: String },
}

// ── Remote execution errors ───────────────────────────────────────────────────

/// Errors from the remote executor. `ConnectionFailed` and
/// `RemoteCommandFailed` are distinct on purpose: the former means no
/// session was established, the latter means the command ran and failed.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("could not establish a session to {host}: {detail}")]
    ConnectionFailed { host: String, detail: String },

    #[error("remote command exited with status {exit_code}")]
    RemoteCommandFailed { exit_code: i32 },
}

// ── Workflow errors ───────────────────────────────────────────────────────────

/// Composite failure for the define workflow. A name collision is not an
/// error — `define_server` reports it as an outcome.
#[derive(Debug, Error)]
pub enum DefineError {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Composite failure for the start workflow.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("no server named '{name}' is registered")]
    UnknownServer { name: String },

    /// Exactly one NAT address must exist before remote execution is
    /// attempted; the offending address list is kept for diagnostics.
    #[error("expected exactly one address, found {}: {:?}", .addresses.len(), .addresses)]
    AddressResolutionFailed { addresses: Vec<String> },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Compute(#[from] ComputeError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}
