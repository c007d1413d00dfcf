//! Application services — use-case orchestration over the port traits.

pub mod orchestrator;
pub mod registry;
