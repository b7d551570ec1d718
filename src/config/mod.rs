//! Configuration loading and management.
//!
//! Settings come from two places:
//! - [`cli`]: the command line (server name, port, optional config path)
//! - [`types`]: an optional TOML file for everything else, all keys defaulted
//!
//! Submodules:
//! - [`listen`]: Network listener configuration (ListenConfig)
//! - [`limits`]: Per-connection limits (LimitsConfig)

mod cli;
mod limits;
mod listen;
mod types;

pub use cli::Cli;
pub use limits::LimitsConfig;
pub use types::Config;
