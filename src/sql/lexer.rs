use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Select,
    From,

    Identifier,

    // Punctuation
    Asterisk,
    Comma,
    Semicolon,

    // Special
    Illegal,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A classified slice of the query text.
///
/// `line` and `column` are 1-based and point at the first character of
/// `value`. For [`TokenKind::Eof`] they point one past the last character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

fn lookup_keyword(word: &str) -> Option<TokenKind> {
    // Keywords are matched case-sensitively.
    match word {
        "SELECT" => Some(TokenKind::Select),
        "FROM" => Some(TokenKind::From),
        _ => None,
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<Chars<'a>>,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Collects every token up to and including the first `Eof`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.is(TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tokens
    }

    /// Returns the next token. Once the input is exhausted every call
    /// returns a fresh `Eof` token at the end position.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);

        match self.peek() {
            None => Token::new(TokenKind::Eof, "", line, column),
            Some(c) => match c {
                '*' => {
                    self.advance();
                    Token::new(TokenKind::Asterisk, "*", line, column)
                }
                ',' => {
                    self.advance();
                    Token::new(TokenKind::Comma, ",", line, column)
                }
                ';' => {
                    self.advance();
                    Token::new(TokenKind::Semicolon, ";", line, column)
                }
                c if c.is_ascii_alphabetic() => self.read_identifier_or_keyword(),
                c => {
                    self.advance();
                    Token::new(TokenKind::Illegal, c.to_string(), line, column)
                }
            },
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(c) = c {
            self.offset += c.len_utf8();
            self.column += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                '\n' => {
                    self.advance();
                    self.line += 1;
                    self.column = 1;
                }
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn read_identifier_or_keyword(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let start = self.offset;

        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let value = &self.input[start..self.offset];
        let kind = lookup_keyword(value).unwrap_or(TokenKind::Identifier);

        Token::new(kind, value, line, column)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens until end of input; `Eof` itself is not yielded.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_select() {
        let mut lexer = Lexer::new("SELECT * FROM users;");
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Select);
        assert_eq!(tokens[1].kind, TokenKind::Asterisk);
        assert_eq!(tokens[2].kind, TokenKind::From);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].value, "users");
        assert_eq!(tokens[4].kind, TokenKind::Semicolon);
        assert_eq!(tokens[5].kind, TokenKind::Eof);
    }

    #[test]
    fn test_column_list() {
        assert_eq!(
            kinds("SELECT a,b , c FROM t"),
            vec![
                TokenKind::Select,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::From,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let tokens = Lexer::new("select From FROM").tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].value, "select");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::From);
    }

    #[test]
    fn test_identifier_with_digits_and_underscore() {
        let tokens = Lexer::new("user_id2 SELECTED").tokenize();

        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].value, "user_id2");
        // maximal munch: a keyword prefix does not split the word
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].value, "SELECTED");
    }

    #[test]
    fn test_illegal_characters_are_single_tokens() {
        let tokens = Lexer::new("a@#1").tokenize();

        assert_eq!(tokens[0].value, "a");
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "@", 1, 2));
        assert_eq!(tokens[2], Token::new(TokenKind::Illegal, "#", 1, 3));
        // identifiers must start with a letter
        assert_eq!(tokens[3], Token::new(TokenKind::Illegal, "1", 1, 4));
        assert_eq!(tokens[4].kind, TokenKind::Eof);
    }

    #[test]
    fn test_non_ascii_is_illegal() {
        let tokens = Lexer::new("é x").tokenize();

        assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "é", 1, 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", 1, 3));
    }

    #[test]
    fn test_line_and_column_tracking() {
        let tokens = Lexer::new("SELECT *\n  FROM\tt").tokenize();

        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 8));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
        assert_eq!((tokens[3].line, tokens[3].column), (2, 8));
    }

    #[test]
    fn test_eof_is_repeated() {
        let mut lexer = Lexer::new("x");

        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        for _ in 0..3 {
            let token = lexer.next_token();
            assert_eq!(token, Token::new(TokenKind::Eof, "", 1, 2));
        }
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds(" \t\r\n "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_every_character_is_covered() {
        let input = "SELECT a,b FROM t;$";
        let consumed: usize = Lexer::new(input).map(|t| t.value.chars().count()).sum();
        let visible = input.chars().filter(|c| !c.is_whitespace()).count();

        assert_eq!(consumed, visible);
    }
}
