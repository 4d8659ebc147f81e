//! Configuration for the policy responder service

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Process configuration, read once at startup from flags or the environment
#[derive(Debug, Clone, Parser)]
#[command(name = "policy-responder")]
#[command(about = "Serves templated policy documents and placeholder analysis in mock mode")]
pub struct Config {
    /// Listening port
    #[arg(long, env, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface to bind; all interfaces unless overridden
    #[arg(long, env, default_value_t = DEFAULT_BIND_ADDR)]
    pub bind_addr: IpAddr,

    /// Output logs in JSON format
    #[arg(long, env)]
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR,
            log_json: false,
        }
    }
}

impl Config {
    /// Parse configuration from command-line args and environment variables
    pub fn parse_config() -> Self {
        Config::parse()
    }

    /// Address handed to the TCP listener
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
