use crate::sql::{join_literals, parse_literal_query, parse_query};

use super::config::Dialect;

/// Payload sent back for a parse failure in the literal dialect.
pub const PARSING_ERROR: &str = "parsing_error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Success(String),
    /// `payload` goes to the client, `detail` to the log.
    Failure { payload: String, detail: String },
}

impl Response {
    pub fn payload(&self) -> &str {
        match self {
            Response::Success(body) => body,
            Response::Failure { payload, .. } => payload,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }
}

/// Parses one query and builds the reply for it. The payload never carries
/// the frame delimiter; the connection adds it.
pub fn respond(dialect: Dialect, query: &str) -> Response {
    match dialect {
        Dialect::Statement => {
            let outcome = parse_query(query);
            match outcome.errors.first() {
                None => Response::Success(outcome.program.to_string()),
                Some(first) => Response::Failure {
                    payload: format!("ERROR: {}", first),
                    detail: outcome
                        .errors
                        .iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                        .join("; "),
                },
            }
        }
        Dialect::Literal => match parse_literal_query(query) {
            Ok(values) => Response::Success(join_literals(&values)),
            Err(e) => Response::Failure {
                payload: PARSING_ERROR.to_string(),
                detail: e.to_string(),
            },
        },
    }
}
