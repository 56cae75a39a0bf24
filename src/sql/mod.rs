pub mod lexer;
pub mod ast;
pub mod parser;
pub mod literal;

pub use lexer::{Lexer, Token, TokenKind};
pub use ast::*;
pub use parser::{parse_query, ParseError, ParseOutcome, Parser};
pub use literal::{join_literals, parse_literal_query, Literal, LiteralError, LiteralParser};
