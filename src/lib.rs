//! Parses a restricted SQL `SELECT` statement into a small syntax tree.
//!
//! The accepted form is `SELECT <columns> FROM <tables> WHERE <anything>`,
//! where columns are bare or `table.column` names and tables are bare names.
//! The `WHERE` clause is not parsed; it is kept as whitespace-normalized text.
//!
//! ```
//! let stmt = sqlselect::parse("SELECT u.name, age FROM users WHERE age > 30").unwrap();
//! assert_eq!(stmt.columns[0].table.as_deref(), Some("u"));
//! assert_eq!(stmt.tables, ["users"]);
//! assert_eq!(stmt.where_clause, " age > 30");
//! assert_eq!(stmt.to_string(), "SELECT u.name,age FROM users WHERE age > 30");
//! ```

pub mod error;
pub mod sql;

pub use error::{Result, SyntaxError};
pub use sql::ast::{SelectItem, SelectStatement};
pub use sql::parser::Parser;

/// Parses `source` with a fresh [`Parser`].
pub fn parse(source: &str) -> Result<SelectStatement> {
    Parser::new(source).parse()
}
