use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected {expected} at line {line}, column {column}, but got '{found}'")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },
    #[error("Expected {expected} at line {line}, column {column}, but got illegal character '{found}'")]
    IllegalCharacter {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    fn at(expected: impl Into<String>, token: &Token) -> Self {
        let expected = expected.into();
        let (line, column) = (token.line, token.column);
        match token.kind {
            TokenKind::Illegal => ParseError::IllegalCharacter {
                expected,
                found: token.value.clone(),
                line,
                column,
            },
            TokenKind::Eof => ParseError::UnexpectedToken {
                expected,
                found: "EOF".to_string(),
                line,
                column,
            },
            _ => ParseError::UnexpectedToken {
                expected,
                found: token.value.clone(),
                line,
                column,
            },
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { line, .. } | ParseError::IllegalCharacter { line, .. } => {
                *line
            }
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { column, .. }
            | ParseError::IllegalCharacter { column, .. } => *column,
        }
    }
}

/// Result of parsing one query: the statements that parsed cleanly plus a
/// diagnostic for every one that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Program, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parses `input` with a fresh parser.
pub fn parse_query(input: &str) -> ParseOutcome {
    Parser::new(input).parse_program()
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    pub fn parse_program(mut self) -> ParseOutcome {
        let mut program = Program::new();

        while !self.check(TokenKind::Eof) {
            // empty statement
            if self.check(TokenKind::Semicolon) {
                self.advance();
                continue;
            }

            match self.parse_statement() {
                Some(stmt) => program.statements.push(stmt),
                None => self.synchronize(),
            }
        }

        if program.is_empty() && self.errors.is_empty() {
            self.error("SELECT");
        }

        ParseOutcome {
            program,
            errors: self.errors,
        }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Select => self.parse_select().map(Statement::Select),
            _ => {
                self.error("SELECT");
                None
            }
        }
    }

    fn parse_select(&mut self) -> Option<SelectStatement> {
        let token = self.advance();

        let columns = self.parse_columns()?;

        self.expect(TokenKind::From, "FROM")?;
        let table = self.expect(TokenKind::Identifier, "table name")?.value;

        if self.check(TokenKind::Semicolon) {
            self.advance();
        }

        Some(SelectStatement {
            token,
            columns,
            table,
        })
    }

    fn parse_columns(&mut self) -> Option<Vec<String>> {
        match self.current.kind {
            TokenKind::Asterisk => {
                self.advance();
                Some(vec!["*".to_string()])
            }
            TokenKind::Identifier => self.parse_column_list(),
            _ => {
                self.error("column name or '*'");
                None
            }
        }
    }

    fn parse_column_list(&mut self) -> Option<Vec<String>> {
        let mut columns = vec![self.advance().value];

        while self.check(TokenKind::Comma) {
            if self.peek.is(TokenKind::Identifier) {
                self.advance();
                columns.push(self.advance().value);
            } else {
                // report the token that should have been a column
                self.advance();
                self.error("column name after ','");
                return None;
            }
        }

        Some(columns)
    }

    /// Skips the rest of a broken statement: past the next `;`, or up to
    /// the next `SELECT` or end of input.
    fn synchronize(&mut self) {
        loop {
            match self.current.kind {
                TokenKind::Eof | TokenKind::Select => return,
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Consumes the current token and returns it.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = std::mem::replace(&mut self.peek, next);
        std::mem::replace(&mut self.current, peek)
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            self.error(expected);
            None
        }
    }

    fn error(&mut self, expected: &str) {
        let err = ParseError::at(expected, &self.current);
        self.errors.push(err);
    }
}
