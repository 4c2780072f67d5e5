use thiserror::Error;

use crate::sql::token::Token;

/// A grammar violation. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error: {message}, found {found}")]
pub struct SyntaxError {
    pub message: String,
    /// The token that did not fit.
    pub found: Token,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, found: Token) -> Self {
        SyntaxError {
            message: message.into(),
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
