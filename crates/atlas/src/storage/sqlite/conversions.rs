//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use atlas_core::geo::{Continent, Country};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

/// Convert a SQLite row to a Continent.
///
/// Expected columns: code, name, updated_at
pub fn row_to_continent(row: &Row) -> rusqlite::Result<Continent> {
    let code: String = row.get(0)?;
    let name: String = row.get(1)?;
    let updated_at: String = row.get(2)?;

    Ok(Continent {
        code,
        name,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a Country.
///
/// Expected columns: code, name, full_name, iso3, number, continent_code, updated_at
pub fn row_to_country(row: &Row) -> rusqlite::Result<Country> {
    let code: String = row.get(0)?;
    let name: String = row.get(1)?;
    let full_name: String = row.get(2)?;
    let iso3: String = row.get(3)?;
    let number: i64 = row.get(4)?;
    let continent_code: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Country {
        code,
        name,
        full_name,
        iso3,
        number,
        continent_code,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Fixed-width RFC 3339 with microseconds and a `Z` suffix, so stored
/// timestamps compare correctly as text in `updated_at > ?` scans.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
