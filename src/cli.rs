use clap::Parser;

use crate::server::{Dialect, Framing, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "tinyql")]
#[command(author, version, about = "A tiny SQL front end: parses SELECT queries received over TCP")]
pub struct Cli {
    /// Interface to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// TCP port to listen on
    #[arg(short, long, default_value_t = 3003)]
    pub port: u16,

    /// Grammar used to parse queries
    #[arg(short, long, default_value = "statement")]
    pub dialect: Dialect,

    /// Delimiter between queries and between responses
    #[arg(long, default_value = "newline")]
    pub framing: Framing,

    /// Maximum number of clients served at once (unlimited when omitted)
    #[arg(long)]
    pub max_connections: Option<usize>,

    /// Disable ANSI colours in log output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Parse a single query, print the response and exit (non-interactive mode)
    #[arg(short, long)]
    pub query: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new()
            .with_host(self.host.clone())
            .with_port(self.port)
            .with_dialect(self.dialect)
            .with_framing(self.framing)
            .with_max_connections(self.max_connections)
            .with_color(!self.no_color)
    }
}
