//! SQLite repository implementation.
//!
//! Implements the repository traits from `atlas_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_rusqlite::Connection;

use atlas_core::geo::{Continent, Country};
use atlas_core::storage::{
    ContinentRepository, CountryRepository, Page, RepositoryError, Result,
};

use super::conversions::{format_datetime, row_to_continent, row_to_country};
use super::error::{is_missing_table, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for continents and countries.
/// Schema creation is idempotent and owned here; the seed dump's DDL is
/// never executed.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// ContinentRepository implementation
// ============================================================================

#[async_trait]
impl ContinentRepository for SqliteRepository {
    async fn get_continent(&self, code: &str) -> Result<Option<Continent>> {
        let code = code.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CONTINENT_BY_CODE)
                    .map_err(wrap_err)?;
                match stmt.query_row([&code], row_to_continent) {
                    Ok(continent) => Ok(Some(continent)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn list_continents(&self, page: Page) -> Result<Vec<Continent>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CONTINENTS_PAGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(
                        rusqlite::params![page.skip as i64, page.limit as i64],
                        row_to_continent,
                    )
                    .map_err(wrap_err)?;

                let mut continents = Vec::new();
                for row_result in rows {
                    continents.push(row_result.map_err(wrap_err)?);
                }
                Ok(continents)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_continent(&self, continent: &Continent) -> Result<()> {
        let code = continent.code.clone();
        let name = continent.name.clone();
        let updated_at = format_datetime(&continent.updated_at);
        let continent_code = continent.code.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CONTINENT,
                    rusqlite::params![code, name, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Continent", continent_code))
    }

    async fn update_continent(&self, continent: &Continent) -> Result<()> {
        let code = continent.code.clone();
        let name = continent.name.clone();
        let updated_at = format_datetime(&continent.updated_at);
        let continent_code = continent.code.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_CONTINENT,
                        rusqlite::params![code, name, updated_at],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Continent", continent_code))
    }

    async fn delete_continent(&self, code: &str) -> Result<()> {
        let code = code.to_string();
        let continent_code = code.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_CONTINENT, [&code])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Continent", continent_code))
    }

    async fn has_continents(&self) -> Result<bool> {
        let result = self
            .conn
            .call(|conn| {
                let exists: bool = conn
                    .query_row(schema::ANY_CONTINENT, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(exists)
            })
            .await;

        match result {
            Ok(exists) => Ok(exists),
            // A fresh database without the table simply has no rows yet.
            Err(e) if is_missing_table(&e) => Ok(false),
            Err(e) => Err(RepositoryError::QueryFailed(e.to_string())),
        }
    }
}

// ============================================================================
// CountryRepository implementation
// ============================================================================

#[async_trait]
impl CountryRepository for SqliteRepository {
    async fn get_country(&self, code: &str) -> Result<Option<Country>> {
        let code = code.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_COUNTRY_BY_CODE)
                    .map_err(wrap_err)?;
                match stmt.query_row([&code], row_to_country) {
                    Ok(country) => Ok(Some(country)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn find_country_by_name(&self, name: &str) -> Result<Option<Country>> {
        let name = name.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_COUNTRY_BY_NAME)
                    .map_err(wrap_err)?;
                match stmt.query_row([&name], row_to_country) {
                    Ok(country) => Ok(Some(country)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn list_countries(
        &self,
        page: Page,
        updated_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<Country>> {
        let updated_after = updated_after.map(|dt| format_datetime(&dt));

        self.conn
            .call(move |conn| {
                let mut countries = Vec::new();
                match updated_after {
                    Some(after) => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_COUNTRIES_PAGE_UPDATED_AFTER)
                            .map_err(wrap_err)?;
                        let rows = stmt
                            .query_map(
                                rusqlite::params![page.skip as i64, page.limit as i64, after],
                                row_to_country,
                            )
                            .map_err(wrap_err)?;
                        for row_result in rows {
                            countries.push(row_result.map_err(wrap_err)?);
                        }
                    }
                    None => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_COUNTRIES_PAGE)
                            .map_err(wrap_err)?;
                        let rows = stmt
                            .query_map(
                                rusqlite::params![page.skip as i64, page.limit as i64],
                                row_to_country,
                            )
                            .map_err(wrap_err)?;
                        for row_result in rows {
                            countries.push(row_result.map_err(wrap_err)?);
                        }
                    }
                }
                Ok(countries)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn list_countries_after(
        &self,
        last_updated_at: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<Country>> {
        let after = format_datetime(&last_updated_at);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_COUNTRIES_AFTER)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![after, limit as i64], row_to_country)
                    .map_err(wrap_err)?;

                let mut countries = Vec::new();
                for row_result in rows {
                    countries.push(row_result.map_err(wrap_err)?);
                }
                Ok(countries)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_country(&self, country: &Country) -> Result<()> {
        let code = country.code.clone();
        let name = country.name.clone();
        let full_name = country.full_name.clone();
        let iso3 = country.iso3.clone();
        let number = country.number;
        let continent_code = country.continent_code.clone();
        let updated_at = format_datetime(&country.updated_at);
        let country_code = country.code.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_COUNTRY,
                    rusqlite::params![
                        code,
                        name,
                        full_name,
                        iso3,
                        number,
                        continent_code,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Country", country_code))
    }

    async fn update_country(&self, country: &Country) -> Result<()> {
        let code = country.code.clone();
        let name = country.name.clone();
        let full_name = country.full_name.clone();
        let iso3 = country.iso3.clone();
        let number = country.number;
        let continent_code = country.continent_code.clone();
        let updated_at = format_datetime(&country.updated_at);
        let country_code = country.code.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_COUNTRY,
                        rusqlite::params![
                            code,
                            name,
                            full_name,
                            iso3,
                            number,
                            continent_code,
                            updated_at
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Country", country_code))
    }

    async fn delete_country(&self, code: &str) -> Result<()> {
        let code = code.to_string();
        let country_code = code.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_COUNTRY, [&code])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Country", country_code))
    }
}
