//! Pure text transforms for the SQL-dump seed pipeline.
//!
//! The seed dump is MySQL-flavored; the target database is not. This module
//! holds the dialect-cleaning rewrite rules, the statement splitter, the
//! quote-aware row tokenizer and the numeric coercion, all as pure functions
//! so each step is testable without a database or network.

mod clean;
mod parse;
mod tokenize;

use thiserror::Error;

pub use clean::{
    clean_statement, quote_identifiers, strip_comment_clauses, strip_engine_clauses,
    strip_inline_keys, strip_numeric_qualifiers,
};
pub use parse::{
    coerce_number, country_from_fields, parse_insert, InsertStatement, COUNTRY_COLUMNS,
};
pub use tokenize::split_row_values;

/// Errors raised while turning dump rows into domain records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("invalid numeric value: {0:?}")]
    InvalidNumber(String),
    #[error("countries insert is missing column {0:?}")]
    MissingColumn(String),
    #[error("row has {got} values for {want} columns")]
    ColumnCountMismatch { want: usize, got: usize },
}

/// Splits a dump into individual statements on `;`, dropping empty fragments.
///
/// The source dump never embeds `;` inside string literals, so a plain split
/// matches what the dump producer intended.
pub fn split_statements(dump: &str) -> Vec<&str> {
    dump.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
