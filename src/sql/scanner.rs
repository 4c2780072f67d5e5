use super::{keywords, token::Token};

/// Turns query text into tokens, one `next_token` at a time.
///
/// The scanner only ever needs to give back the single character it just
/// looked at, so it keeps one character of pushback and nothing more.
pub struct Scanner {
    source: Vec<char>,
    current: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            current: 0,
        }
    }

    /// Returns the next token. Never fails; once the input is exhausted every
    /// call returns `Token::Eof`.
    pub fn next_token(&mut self) -> Token {
        let Some(c) = self.read() else {
            return Token::Eof;
        };
        match c {
            '.' => Token::Dot,
            '=' => Token::Equal,
            ',' => Token::Comma,
            c if is_whitespace(c) => self.whitespace(),
            '\'' => self.quoted(),
            _ => {
                self.unread();
                self.word()
            }
        }
    }

    fn whitespace(&mut self) -> Token {
        while let Some(c) = self.read() {
            if !is_whitespace(c) {
                self.unread();
                break;
            }
        }
        Token::Whitespace
    }

    // An unterminated quote runs to the end of the input.
    fn quoted(&mut self) -> Token {
        let mut text = String::new();
        while let Some(c) = self.read() {
            if c == '\'' {
                break;
            }
            text.push(c);
        }
        Token::Quoted(text)
    }

    fn word(&mut self) -> Token {
        let mut text = String::new();
        while let Some(c) = self.read() {
            if is_whitespace(c) || is_special(c) {
                self.unread();
                break;
            }
            text.push(c);
        }
        match keywords::get(&text) {
            Some(keyword) => Token::Keyword(keyword, text),
            None => Token::Word(text),
        }
    }

    fn read(&mut self) -> Option<char> {
        let c = self.source.get(self.current).copied()?;
        self.current += 1;
        Some(c)
    }

    // Gives back the character returned by the last `read`.
    fn unread(&mut self) {
        debug_assert!(self.current > 0, "unread before any read");
        self.current -= 1;
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::Eof => None,
            token => Some(token),
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

fn is_special(c: char) -> bool {
    matches!(c, '.' | ',' | '\'' | '=')
}
