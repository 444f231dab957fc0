//! SQLite schema definitions and SQL query constants.
//!
//! All SQL used by the repository lives here as constants, following the
//! Functional Core pattern - pure data, no I/O. The application schema is
//! authoritative: DDL from the seed dump is never executed.

/// SQL statements to create all tables.
///
/// `foreign_keys` is off by default in SQLite and must be enabled per
/// connection for the continent/country constraint to hold.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Continents table
CREATE TABLE IF NOT EXISTS continents (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Countries table
CREATE TABLE IF NOT EXISTS countries (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    full_name TEXT NOT NULL,
    iso3 TEXT NOT NULL,
    number INTEGER NOT NULL,
    continent_code TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (continent_code) REFERENCES continents(code)
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_continents_name ON continents(name);
CREATE INDEX IF NOT EXISTS idx_countries_name ON countries(name);
CREATE INDEX IF NOT EXISTS idx_countries_continent ON countries(continent_code);
CREATE INDEX IF NOT EXISTS idx_countries_updated_at ON countries(updated_at);
"#;

// Continent queries
pub const INSERT_CONTINENT: &str = r#"
INSERT INTO continents (code, name, updated_at)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_CONTINENT_BY_CODE: &str = r#"
SELECT code, name, updated_at
FROM continents
WHERE code = ?1
"#;

pub const SELECT_CONTINENTS_PAGE: &str = r#"
SELECT code, name, updated_at
FROM continents
ORDER BY code
LIMIT ?2 OFFSET ?1
"#;

pub const UPDATE_CONTINENT: &str = r#"
UPDATE continents
SET name = ?2, updated_at = ?3
WHERE code = ?1
"#;

pub const DELETE_CONTINENT: &str = r#"
DELETE FROM continents
WHERE code = ?1
"#;

pub const ANY_CONTINENT: &str = r#"
SELECT EXISTS(SELECT 1 FROM continents)
"#;

// Country queries
pub const INSERT_COUNTRY: &str = r#"
INSERT INTO countries (code, name, full_name, iso3, number, continent_code, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_COUNTRY_BY_CODE: &str = r#"
SELECT code, name, full_name, iso3, number, continent_code, updated_at
FROM countries
WHERE code = ?1
"#;

pub const SELECT_COUNTRY_BY_NAME: &str = r#"
SELECT code, name, full_name, iso3, number, continent_code, updated_at
FROM countries
WHERE name = ?1
"#;

pub const SELECT_COUNTRIES_PAGE: &str = r#"
SELECT code, name, full_name, iso3, number, continent_code, updated_at
FROM countries
ORDER BY code
LIMIT ?2 OFFSET ?1
"#;

pub const SELECT_COUNTRIES_PAGE_UPDATED_AFTER: &str = r#"
SELECT code, name, full_name, iso3, number, continent_code, updated_at
FROM countries
WHERE updated_at > ?3
ORDER BY code
LIMIT ?2 OFFSET ?1
"#;

pub const SELECT_COUNTRIES_AFTER: &str = r#"
SELECT code, name, full_name, iso3, number, continent_code, updated_at
FROM countries
WHERE updated_at > ?1
ORDER BY updated_at
LIMIT ?2
"#;

pub const UPDATE_COUNTRY: &str = r#"
UPDATE countries
SET name = ?2, full_name = ?3, iso3 = ?4, number = ?5, continent_code = ?6, updated_at = ?7
WHERE code = ?1
"#;

pub const DELETE_COUNTRY: &str = r#"
DELETE FROM countries
WHERE code = ?1
"#;
