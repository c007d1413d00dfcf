//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`. All functions
//! are synchronous and take data in, returning data out.

pub mod error;
pub mod server;
pub mod settings;

pub use error::{
    ComputeError, ConfigError, DefineError, ExecError, NameError, RegistryError, RunError,
    StartError,
};
pub use server::{ServerDefinition, normalize_name, startup_command, validate_name};
pub use settings::Settings;
