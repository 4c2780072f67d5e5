use std::fmt;

use super::keywords::Keyword;

/// Arithmetic operators. Reserved: the scanner never produces them, they
/// only exist so the token set can grow without reshaping `Token`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Eof,
    // Any run of spaces, tabs and newlines
    Whitespace,

    // Literals
    Word(String),
    Quoted(String),

    // Single-character tokens
    Dot,
    Comma,
    Equal,

    // Keyword plus the text as it was written
    Keyword(Keyword, String),

    Operator(Operator),
}

impl Token {
    /// The literal text carried by the token. Quotes are already stripped from
    /// `Quoted`, and `Eof`/`Whitespace` carry nothing.
    pub fn literal(&self) -> &str {
        match self {
            Token::Eof | Token::Whitespace => "",
            Token::Word(text) | Token::Quoted(text) | Token::Keyword(_, text) => text,
            Token::Dot => ".",
            Token::Comma => ",",
            Token::Equal => "=",
            Token::Operator(op) => op.symbol(),
        }
    }

    /// Readable category name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Eof => "EOF",
            Token::Whitespace => "WS",
            Token::Word(_) => "STRING",
            Token::Quoted(_) => "QUOTED_STRING",
            Token::Dot => ".",
            Token::Comma => ",",
            Token::Equal => "=",
            Token::Keyword(keyword, _) => keyword.as_str(),
            Token::Operator(_) => "OTHER",
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(k, _) if *k == keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => f.write_str("end of input"),
            Token::Whitespace => f.write_str("whitespace"),
            token => write!(f, "{} {:?}", token.kind(), token.literal()),
        }
    }
}
