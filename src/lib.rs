pub mod cli;
pub mod error;
pub mod logging;
pub mod server;
pub mod sql;

pub use error::{Error, Result};
pub use server::{Dialect, Framing, Server, ServerConfig};
pub use sql::{parse_literal_query, parse_query, Program, SelectStatement, Statement};
