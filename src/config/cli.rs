//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// minircd - a small line-oriented chat server.
#[derive(Debug, Clone, Parser)]
#[command(name = "minircd", version, about)]
pub struct Cli {
    /// Name this server uses as the prefix of its replies
    pub server_name: String,

    /// TCP port to listen on (1025-65535)
    #[arg(value_parser = clap::value_parser!(u16).range(1025..))]
    pub port: u16,

    /// Optional TOML file with additional settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
