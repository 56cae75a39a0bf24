//! Scalar-list dialect: `SELECT <expr>, <expr>, ... ;` where each
//! expression is a decimal integer or `TRUE`/`FALSE`.
//!
//! Unlike the statement parser this works directly on the query text and
//! stops at the first error.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEnd { expected: String },
    #[error("expected {expected:?} at position {position}")]
    Expected {
        expected: &'static str,
        position: usize,
    },
    #[error("expected integer at position {position}")]
    ExpectedInteger { position: usize },
    #[error("integer literal {literal} out of range at position {position}")]
    IntegerOutOfRange { literal: String, position: usize },
    #[error("invalid expression '{found}' at position {position}")]
    InvalidExpression { found: String, position: usize },
    #[error("unexpected characters after statement at position {position}")]
    TrailingInput { position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Integer(i64),
    Boolean(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Boolean(true) => f.write_str("TRUE"),
            Literal::Boolean(false) => f.write_str("FALSE"),
        }
    }
}

/// Renders a value list the way it goes back over the wire: `1,TRUE,-3`.
pub fn join_literals(values: &[Literal]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn parse_literal_query(input: &str) -> Result<Vec<Literal>, LiteralError> {
    LiteralParser::new(input).parse()
}

pub struct LiteralParser<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> LiteralParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }

    pub fn parse(mut self) -> Result<Vec<Literal>, LiteralError> {
        self.expect("SELECT")?;
        let values = self.parse_expression_list()?;
        self.expect(";")?;

        self.skip_whitespace();
        if self.cursor < self.input.len() {
            return Err(LiteralError::TrailingInput {
                position: self.cursor,
            });
        }

        Ok(values)
    }

    fn parse_expression_list(&mut self) -> Result<Vec<Literal>, LiteralError> {
        let mut values = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b';') {
            return Ok(values);
        }

        loop {
            values.push(self.parse_expression()?);

            self.skip_whitespace();
            if self.peek() != Some(b',') {
                break;
            }
            self.cursor += 1;
        }

        Ok(values)
    }

    fn parse_expression(&mut self) -> Result<Literal, LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd {
                expected: "expression".to_string(),
            }),
            Some(b'0'..=b'9') | Some(b'-') => self.parse_integer(),
            Some(_) => self.parse_boolean(),
        }
    }

    fn parse_integer(&mut self) -> Result<Literal, LiteralError> {
        let start = self.cursor;
        if self.peek() == Some(b'-') {
            self.cursor += 1;
        }

        let digits_start = self.cursor;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.cursor += 1;
        }
        if self.cursor == digits_start {
            return Err(LiteralError::ExpectedInteger {
                position: digits_start,
            });
        }

        // "-0" parses to plain 0, so negative zero never reaches the output.
        let literal = &self.input[start..self.cursor];
        literal
            .parse::<i64>()
            .map(Literal::Integer)
            .map_err(|_| LiteralError::IntegerOutOfRange {
                literal: literal.to_string(),
                position: start,
            })
    }

    fn parse_boolean(&mut self) -> Result<Literal, LiteralError> {
        let rest = self.rest();
        if rest.starts_with("TRUE") {
            self.cursor += "TRUE".len();
            Ok(Literal::Boolean(true))
        } else if rest.starts_with("FALSE") {
            self.cursor += "FALSE".len();
            Ok(Literal::Boolean(false))
        } else {
            let mut found: String = rest
                .chars()
                .take_while(|c| !c.is_ascii_whitespace() && *c != ',' && *c != ';')
                .collect();
            if found.is_empty() {
                found = rest.chars().take(1).collect();
            }
            Err(LiteralError::InvalidExpression {
                found,
                position: self.cursor,
            })
        }
    }

    fn expect(&mut self, expected: &'static str) -> Result<(), LiteralError> {
        self.skip_whitespace();

        let rest = self.rest();
        if rest.len() < expected.len() && expected.starts_with(rest) {
            return Err(LiteralError::UnexpectedEnd {
                expected: format!("{:?}", expected),
            });
        }
        if !rest.starts_with(expected) {
            return Err(LiteralError::Expected {
                expected,
                position: self.cursor,
            });
        }

        self.cursor += expected.len();
        self.skip_whitespace();
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.cursor += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.cursor).copied()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.cursor..]
    }
}
