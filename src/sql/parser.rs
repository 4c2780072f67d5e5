use tracing::{debug, trace};

use super::{
    ast::{SelectItem, SelectStatement},
    buffer::TokenStack,
    keywords::Keyword,
    scanner::Scanner,
    token::Token,
};
use crate::error::{Result, SyntaxError};

/// The grammar is three clauses read strictly left to right. Each phase
/// fills its part of the statement and names the phase that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Select,
    From,
    Where,
    Done,
}

pub struct Parser {
    scanner: Scanner,
    buffer: TokenStack,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Parser {
            scanner: Scanner::new(source),
            buffer: TokenStack::new(),
        }
    }

    /// Parses the whole input. The first grammar violation aborts the parse.
    pub fn parse(mut self) -> Result<SelectStatement> {
        let mut stmt = SelectStatement::default();
        let mut phase = Phase::Select;
        while phase != Phase::Done {
            trace!(?phase, "entering phase");
            phase = match phase {
                Phase::Select => self.select_phase(&mut stmt.columns)?,
                Phase::From => self.from_phase(&mut stmt.tables)?,
                Phase::Where => self.where_phase(&mut stmt.where_clause),
                Phase::Done => Phase::Done,
            };
        }
        debug!(
            columns = stmt.columns.len(),
            tables = stmt.tables.len(),
            has_where = !stmt.where_clause.is_empty(),
            "parsed select statement"
        );
        Ok(stmt)
    }

    /// Hands a token back; it is returned by the next read, ahead of any
    /// token still in the input.
    pub fn unscan(&mut self, token: Token) {
        self.buffer.push(token);
    }

    fn select_phase(&mut self, columns: &mut Vec<SelectItem>) -> Result<Phase> {
        let token = self.scan_meaningful();
        if !token.is_keyword(Keyword::Select) {
            return Err(SyntaxError::new("expected SELECT", token));
        }

        loop {
            let name = match self.scan_meaningful() {
                Token::Eof => return Ok(Phase::Done),
                token if token.is_keyword(Keyword::From) => return Ok(Phase::From),
                Token::Word(name) => name,
                token => return Err(SyntaxError::new("expected column name", token)),
            };

            match self.scan_meaningful() {
                Token::Comma => push_item(columns, SelectItem::column(name)),
                Token::Eof => {
                    push_item(columns, SelectItem::column(name));
                    return Ok(Phase::Done);
                }
                token if token.is_keyword(Keyword::From) => {
                    push_item(columns, SelectItem::column(name));
                    return Ok(Phase::From);
                }
                Token::Dot => {
                    let column = match self.scan_meaningful() {
                        Token::Word(column) => column,
                        token => {
                            return Err(SyntaxError::new("expected column name after '.'", token));
                        }
                    };
                    push_item(columns, SelectItem::qualified(name, column));
                    match self.scan_meaningful() {
                        Token::Comma => {}
                        token if token.is_keyword(Keyword::From) => return Ok(Phase::From),
                        token => {
                            return Err(SyntaxError::new(
                                "expected comma after table.column",
                                token,
                            ));
                        }
                    }
                }
                token => return Err(SyntaxError::new("expected '.' after name", token)),
            }
        }
    }

    fn from_phase(&mut self, tables: &mut Vec<String>) -> Result<Phase> {
        loop {
            match self.scan_meaningful() {
                Token::Eof => return Ok(Phase::Done),
                token if token.is_keyword(Keyword::Where) => return Ok(Phase::Where),
                Token::Word(table) => {
                    trace!(%table, "from table");
                    tables.push(table);
                }
                token => return Err(SyntaxError::new("expected table name", token)),
            }

            match self.scan_meaningful() {
                Token::Eof => return Ok(Phase::Done),
                token if token.is_keyword(Keyword::Where) => return Ok(Phase::Where),
                Token::Comma => {}
                token => return Err(SyntaxError::new("expected comma", token)),
            }
        }
    }

    // Everything after WHERE is kept as text. Quotes are already gone from
    // quoted strings at this point, so they do not come back out.
    fn where_phase(&mut self, clause: &mut String) -> Phase {
        loop {
            match self.scan() {
                Token::Eof => return Phase::Done,
                Token::Whitespace => clause.push(' '),
                token => clause.push_str(token.literal()),
            }
        }
    }

    fn scan(&mut self) -> Token {
        if let Some(token) = self.buffer.pop() {
            return token;
        }
        self.scanner.next_token()
    }

    // Whitespace runs are already collapsed by the scanner, so skipping a
    // single whitespace token is enough.
    fn scan_meaningful(&mut self) -> Token {
        match self.scan() {
            Token::Whitespace => self.scan(),
            token => token,
        }
    }
}

fn push_item(columns: &mut Vec<SelectItem>, item: SelectItem) {
    trace!(%item, "select item");
    columns.push(item);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<SelectStatement> {
        Parser::new(source).parse()
    }

    fn error_message(source: &str) -> String {
        parse(source).unwrap_err().message
    }

    #[test]
    fn parses_single_column_and_table() {
        let stmt = parse("SELECT a FROM t").unwrap();
        assert_eq!(stmt.columns, vec![SelectItem::column("a")]);
        assert_eq!(stmt.tables, vec!["t".to_string()]);
        assert_eq!(stmt.where_clause, "");
    }

    #[test]
    fn parses_qualified_columns_tables_and_where() {
        let stmt = parse("SELECT a.b,c FROM t1,t2 WHERE x=1").unwrap();
        assert_eq!(
            stmt.columns,
            vec![SelectItem::qualified("a", "b"), SelectItem::column("c")]
        );
        assert_eq!(stmt.tables, vec!["t1".to_string(), "t2".to_string()]);
        assert_eq!(stmt.where_clause, " x=1");
    }

    #[test]
    fn keywords_match_in_any_case() {
        let stmt = parse("select a from t where b").unwrap();
        assert_eq!(stmt.columns, vec![SelectItem::column("a")]);
        assert_eq!(stmt.tables, vec!["t".to_string()]);
        assert_eq!(stmt.where_clause, " b");
    }

    #[test]
    fn bare_select_is_accepted_with_empty_lists() {
        let stmt = parse("SELECT").unwrap();
        assert_eq!(stmt, SelectStatement::default());
    }

    #[test]
    fn empty_select_list_before_from_is_accepted() {
        let stmt = parse("SELECT FROM t").unwrap();
        assert!(stmt.columns.is_empty());
        assert_eq!(stmt.tables, vec!["t".to_string()]);
    }

    #[test]
    fn trailing_comma_ends_select_list() {
        let stmt = parse("SELECT a, FROM t").unwrap();
        assert_eq!(stmt.columns, vec![SelectItem::column("a")]);
        assert_eq!(stmt.tables, vec!["t".to_string()]);
    }

    #[test]
    fn select_without_from_stops_at_end_of_input() {
        let stmt = parse("SELECT a, b").unwrap();
        assert_eq!(stmt.columns, vec![SelectItem::column("a"), SelectItem::column("b")]);
        assert!(stmt.tables.is_empty());
    }

    #[test]
    fn qualified_column_before_from_is_recorded_once() {
        let stmt = parse("SELECT t.a FROM t").unwrap();
        assert_eq!(stmt.columns, vec![SelectItem::qualified("t", "a")]);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let stmt = parse("SELECT a,a FROM t,t").unwrap();
        assert_eq!(stmt.columns, vec![SelectItem::column("a"), SelectItem::column("a")]);
        assert_eq!(stmt.tables, vec!["t".to_string(), "t".to_string()]);
    }

    #[test]
    fn where_keeps_keywords_and_punctuation_as_text() {
        let stmt = parse("SELECT a FROM t WHERE t.x = 'Bob' and select,y").unwrap();
        assert_eq!(stmt.where_clause, " t.x = Bob and select,y");
    }

    #[test]
    fn where_collapses_whitespace_runs() {
        let stmt = parse("SELECT a FROM t WHERE\t x  =\n\n1 ").unwrap();
        assert_eq!(stmt.where_clause, " x = 1 ");
    }

    #[test]
    fn empty_where_clause() {
        let stmt = parse("SELECT a FROM t WHERE").unwrap();
        assert_eq!(stmt.tables, vec!["t".to_string()]);
        assert_eq!(stmt.where_clause, "");
    }

    #[test]
    fn missing_select_fails() {
        let err = parse("FROM t").unwrap_err();
        assert_eq!(err.message, "expected SELECT");
        assert_eq!(err.found, Token::Keyword(Keyword::From, "FROM".into()));
        assert_eq!(error_message(""), "expected SELECT");
        assert_eq!(error_message("   "), "expected SELECT");
    }

    #[test]
    fn non_word_column_fails() {
        assert_eq!(error_message("SELECT , a"), "expected column name");
        assert_eq!(error_message("SELECT 'a' FROM t"), "expected column name");
    }

    #[test]
    fn unexpected_token_after_name_fails() {
        let err = parse("SELECT a b FROM t").unwrap_err();
        assert_eq!(err.message, "expected '.' after name");
        assert_eq!(err.found, Token::Word("b".into()));
        assert_eq!(error_message("SELECT a = b"), "expected '.' after name");
    }

    #[test]
    fn dot_without_column_fails() {
        assert_eq!(error_message("SELECT a. FROM t"), "expected column name after '.'");
        assert_eq!(error_message("SELECT a."), "expected column name after '.'");
    }

    #[test]
    fn qualified_column_needs_comma_or_from() {
        assert_eq!(error_message("SELECT a.b c FROM t"), "expected comma after table.column");
        assert_eq!(error_message("SELECT a.b"), "expected comma after table.column");
    }

    #[test]
    fn from_errors() {
        assert_eq!(error_message("SELECT a FROM ,"), "expected table name");
        assert_eq!(error_message("SELECT a FROM t u"), "expected comma");
        assert_eq!(error_message("SELECT a FROM t.u"), "expected comma");
    }

    #[test]
    fn whitespace_amount_does_not_matter() {
        let spaced = parse("  SELECT \t a ,\n b . c   FROM  t1 ,  t2  ").unwrap();
        let tight = parse("SELECT a,b.c FROM t1,t2").unwrap();
        assert_eq!(spaced, tight);
    }

    #[test]
    fn unscanned_tokens_are_read_first() {
        let mut parser = Parser::new("a FROM t");
        parser.unscan(Token::Keyword(Keyword::Select, "SELECT".into()));
        let stmt = parser.parse().unwrap();
        assert_eq!(stmt.columns, vec![SelectItem::column("a")]);
        assert_eq!(stmt.tables, vec!["t".to_string()]);
    }

    #[test]
    fn unscan_is_last_in_first_out() {
        let mut parser = Parser::new("");
        parser.unscan(Token::Word("first".into()));
        parser.unscan(Token::Comma);
        assert_eq!(parser.scan(), Token::Comma);
        assert_eq!(parser.scan(), Token::Word("first".into()));
        assert_eq!(parser.scan(), Token::Eof);
    }
}
