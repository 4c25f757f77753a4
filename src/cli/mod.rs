use clap::builder::FalseyValueParser;
use clap::Parser;
use std::net::{ IpAddr, SocketAddr };

use crate::error::ConfigError;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Interface address for the HTTP server to bind to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for the HTTP server.
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Enable debug logging/output. `DEBUG` accepts any casing; values such as
    /// `false`, `no`, `off` or `0` leave it disabled.
    #[arg(long, env = "DEBUG", default_value = "false", value_parser = FalseyValueParser::new())]
    pub debug: bool,
}

impl Args {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
