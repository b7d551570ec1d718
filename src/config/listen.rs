//! Network listener configuration.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Network listener configuration.
///
/// The port always comes from the command line.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind to (default: all IPv4 interfaces).
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(skip)]
    pub port: u16,
}

impl ListenConfig {
    /// Socket address the gateway binds.
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 0,
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}
