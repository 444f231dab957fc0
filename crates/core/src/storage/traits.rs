use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::geo::{Continent, Country};

use super::{Page, Result};

/// Repository for continent operations.
#[async_trait]
pub trait ContinentRepository: Send + Sync {
    /// Gets a continent by its two-letter code.
    async fn get_continent(&self, code: &str) -> Result<Option<Continent>>;

    /// Lists continents with offset pagination, ordered by code.
    async fn list_continents(&self, page: Page) -> Result<Vec<Continent>>;

    /// Creates a new continent.
    async fn create_continent(&self, continent: &Continent) -> Result<()>;

    /// Updates an existing continent.
    async fn update_continent(&self, continent: &Continent) -> Result<()>;

    /// Deletes a continent by its code.
    async fn delete_continent(&self, code: &str) -> Result<()>;

    /// Returns true if any continent rows exist.
    ///
    /// A missing table counts as "no rows" rather than an error, so the
    /// seed importer can probe a fresh database safely.
    async fn has_continents(&self) -> Result<bool>;
}

/// Repository for country operations.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Gets a country by its two-letter code.
    async fn get_country(&self, code: &str) -> Result<Option<Country>>;

    /// Finds a country by its exact name.
    async fn find_country_by_name(&self, name: &str) -> Result<Option<Country>>;

    /// Lists countries with offset pagination, optionally restricted to rows
    /// updated after the given instant. Ordered by code.
    async fn list_countries(
        &self,
        page: Page,
        updated_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<Country>>;

    /// Lists countries updated strictly after the given instant, ordered by
    /// `updated_at` ascending.
    async fn list_countries_after(
        &self,
        last_updated_at: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<Country>>;

    /// Creates a new country. Fails with `InvalidData` when `continent_code`
    /// references no existing continent.
    async fn create_country(&self, country: &Country) -> Result<()>;

    /// Updates an existing country.
    async fn update_country(&self, country: &Country) -> Result<()>;

    /// Deletes a country by its code.
    async fn delete_country(&self, code: &str) -> Result<()>;
}
