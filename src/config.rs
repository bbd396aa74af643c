//! Configuration Module
//!
//! Handles parsing server configuration from the command line.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::api::HandlerMode;

/// Default HTTP port when none is given
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration parameters.
///
/// The only positional argument is the port; everything else has a default.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// TCP port to listen on
    #[arg(default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Run the POST operations as placeholders or against the store
    #[arg(long, value_enum, default_value_t = HandlerMode::Stub)]
    pub handlers: HandlerMode,
}

impl Config {
    /// Parses the process arguments, exiting with usage on error.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            handlers: HandlerMode::Stub,
        }
    }
}
