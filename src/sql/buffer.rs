use super::token::Token;

/// Tokens handed back to the parser, read again before anything new is
/// scanned. Last pushed is first popped.
#[derive(Debug, Default)]
pub struct TokenStack {
    tokens: Vec<Token>,
}

impl TokenStack {
    pub fn new() -> Self {
        TokenStack::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
