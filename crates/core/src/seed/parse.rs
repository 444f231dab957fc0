//! INSERT-statement parsing and row-to-record conversion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::geo::Country;

use super::tokenize::split_row_values;
use super::SeedError;

/// Canonical column order for the countries table, used when a dump omits
/// the explicit column list.
pub const COUNTRY_COLUMNS: [&str; 6] = [
    "code",
    "name",
    "full_name",
    "iso3",
    "number",
    "continent_code",
];

static INSERT_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)^\s*INSERT\s+INTO\s+"?([A-Za-z_][A-Za-z0-9_]*)"?\s*(?:\(([^)]*)\))?\s*VALUES\s*(.+)$"#,
    )
    .unwrap()
});

/// A parsed `INSERT` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    /// Target table name, unquoted.
    pub table: String,
    /// Explicit column list, when the statement carries one.
    pub columns: Option<Vec<String>>,
    /// One tokenized value list per row tuple.
    pub rows: Vec<Vec<String>>,
}

/// Parses a cleaned statement as an `INSERT`, or returns `None` for anything
/// else (`CREATE TABLE`, `ALTER TABLE`, index DDL and so on).
pub fn parse_insert(sql: &str) -> Option<InsertStatement> {
    let captures = INSERT_STATEMENT.captures(sql)?;

    let table = captures[1].to_lowercase();
    let columns = captures
        .get(2)
        .map(|list| split_row_values(list.as_str()));
    let rows = split_tuples(&captures[3])
        .iter()
        .map(|tuple| split_row_values(tuple))
        .collect();

    Some(InsertStatement {
        table,
        columns,
        rows,
    })
}

/// Splits a `VALUES` tail like `('a',1),('b',2)` into the inner text of each
/// top-level parenthesized tuple, honoring quoted regions.
fn split_tuples(values: &str) -> Vec<String> {
    let mut tuples = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;

    for ch in values.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' if depth > 0 => {
                    current.push(ch);
                    quote = Some(ch);
                }
                '(' => {
                    depth += 1;
                    if depth > 1 {
                        current.push(ch);
                    }
                }
                ')' if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        tuples.push(std::mem::take(&mut current));
                    } else {
                        current.push(ch);
                    }
                }
                _ if depth > 0 => current.push(ch),
                _ => {}
            },
        }
    }

    tuples
}

/// Coerces the dump's textual `number` field to an integer.
///
/// Leading zeros are stripped; an all-zero or empty string is zero. The
/// text must be digits (with an optional leading sign) before any zeros
/// are dropped, so stripping can never turn garbage into a parseable tail.
pub fn coerce_number(raw: &str) -> Result<i64, SeedError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SeedError::InvalidNumber(raw.to_string()));
    }

    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        return Ok(0);
    }

    stripped
        .parse::<i64>()
        .map(|n| sign * n)
        .map_err(|_| SeedError::InvalidNumber(raw.to_string()))
}

/// Builds a [`Country`] from a dump row by zipping the column list with the
/// tokenized values.
///
/// `columns` comes from the statement's explicit column list; when the dump
/// omitted one, [`COUNTRY_COLUMNS`] is assumed.
pub fn country_from_fields(
    columns: Option<&[String]>,
    values: &[String],
) -> Result<Country, SeedError> {
    let owned_defaults: Vec<String>;
    let columns: &[String] = match columns {
        Some(columns) => columns,
        None => {
            owned_defaults = COUNTRY_COLUMNS.iter().map(|c| c.to_string()).collect();
            &owned_defaults
        }
    };

    if columns.len() != values.len() {
        return Err(SeedError::ColumnCountMismatch {
            want: columns.len(),
            got: values.len(),
        });
    }

    let field = |name: &str| -> Result<&str, SeedError> {
        columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
            .map(|index| values[index].as_str())
            .ok_or_else(|| SeedError::MissingColumn(name.to_string()))
    };

    let code = field("code")?;
    let name = field("name")?;
    let full_name = field("full_name")?;
    let iso3 = field("iso3")?;
    let number = coerce_number(field("number")?)?;
    let continent_code = field("continent_code")?;

    Ok(Country::new(
        code,
        name,
        full_name,
        iso3,
        number,
        continent_code,
    ))
}
