use std::fmt;

use serde::Serialize;

/// One entry of the select list: a column, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectItem {
    pub table: Option<String>,
    pub column: String,
}

impl SelectItem {
    pub fn column(column: impl Into<String>) -> Self {
        SelectItem {
            table: None,
            column: column.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        SelectItem {
            table: Some(table.into()),
            column: column.into(),
        }
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}.{}", table, self.column),
            None => f.write_str(&self.column),
        }
    }
}

/// A parsed `SELECT <columns> FROM <tables> WHERE <clause>` statement.
///
/// Lists keep source order and duplicates. `where_clause` is the raw text that
/// followed `WHERE`, with every whitespace run turned into a single space; it
/// is empty when there was no `WHERE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectStatement {
    pub columns: Vec<SelectItem>,
    pub tables: Vec<String>,
    pub where_clause: String,
}

/// Renders the canonical form. `WHERE` is written straight against the clause
/// text since that text keeps the whitespace that originally followed it.
impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        for (i, item) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        if self.tables.is_empty() {
            return Ok(());
        }
        write!(f, " FROM {}", self.tables.join(","))?;
        if !self.where_clause.is_empty() {
            write!(f, " WHERE{}", self.where_clause)?;
        }
        Ok(())
    }
}
