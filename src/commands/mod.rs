//! Command handlers — one module per subcommand.

pub mod create;
pub mod list;
pub mod start;
pub mod stop;
