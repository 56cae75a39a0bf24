use crate::error::{Error, Result};

/// Which grammar queries are parsed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Dialect {
    /// `SELECT <columns|*> FROM <table>`, answered with the rendered tree.
    #[default]
    Statement,
    /// `SELECT <int|TRUE|FALSE>, ... ;`, answered with the value list.
    Literal,
}

/// How queries and responses are delimited on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Framing {
    #[default]
    Newline,
    Nul,
}

impl Framing {
    pub fn delimiter(self) -> u8 {
        match self {
            Framing::Newline => b'\n',
            Framing::Nul => b'\0',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dialect: Dialect,
    pub framing: Framing,
    /// `None` accepts without limit.
    pub max_connections: Option<usize>,
    /// ANSI colours in log output.
    pub color: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3003,
            dialect: Dialect::default(),
            framing: Framing::default(),
            max_connections: None,
            color: true,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }

    pub fn with_max_connections(mut self, limit: Option<usize>) -> Self {
        self.max_connections = limit;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::InvalidConfig("host must not be empty".to_string()));
        }
        if self.max_connections == Some(0) {
            return Err(Error::InvalidConfig(
                "max connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
