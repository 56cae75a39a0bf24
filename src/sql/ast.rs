use std::fmt;

use super::lexer::Token;

/// The statements of one query, in parse order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
}

impl Statement {
    /// The source text of the token that opened the statement.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Select(stmt) => &stmt.token.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub token: Token,
    /// Either `["*"]` or the selected column names in source order.
    pub columns: Vec<String>,
    pub table: String,
}

impl SelectStatement {
    pub fn is_wildcard(&self) -> bool {
        self.columns.len() == 1 && self.columns[0] == "*"
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.token.value)?;
        writeln!(f, "  Columns: [")?;
        for column in &self.columns {
            writeln!(f, "    {:?}", column)?;
        }
        writeln!(f, "  ]")?;
        write!(f, "  Table: {}", self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::lexer::TokenKind;

    fn select(columns: &[&str], table: &str) -> Statement {
        Statement::Select(SelectStatement {
            token: Token::new(TokenKind::Select, "SELECT", 1, 1),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            table: table.to_string(),
        })
    }

    #[test]
    fn test_format_select() {
        let stmt = select(&["id", "name"], "users");

        assert_eq!(
            stmt.to_string(),
            "SELECT\n  Columns: [\n    \"id\"\n    \"name\"\n  ]\n  Table: users"
        );
        assert_eq!(stmt.token_literal(), "SELECT");
    }

    #[test]
    fn test_format_program_separates_statements() {
        let program = Program {
            statements: vec![select(&["*"], "a"), select(&["x"], "b")],
        };
        let rendered = program.to_string();

        assert_eq!(rendered.matches("SELECT").count(), 2);
        assert!(rendered.contains("  Table: a\nSELECT\n"));
        assert!(rendered.ends_with("  Table: b"));
    }

    #[test]
    fn test_wildcard() {
        let Statement::Select(stmt) = select(&["*"], "t");
        assert!(stmt.is_wildcard());

        let Statement::Select(stmt) = select(&["a"], "t");
        assert!(!stmt.is_wildcard());
    }

    #[test]
    fn test_empty_program_renders_nothing() {
        assert_eq!(Program::new().to_string(), "");
        assert!(Program::new().is_empty());
    }
}
