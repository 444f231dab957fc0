//! Application state with repository-based storage.
//!
//! The state is cloned for each request handler and holds the repository
//! trait objects. The connection lifecycle is owned by the process entry
//! point, never by module-level globals.

use std::sync::Arc;

use atlas_core::storage::{ContinentRepository, CountryRepository};

use crate::storage::SqliteRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub continents: Arc<dyn ContinentRepository>,
    pub countries: Arc<dyn CountryRepository>,
}

impl AppState {
    /// Creates state from explicit repository handles.
    pub fn new(
        continents: Arc<dyn ContinentRepository>,
        countries: Arc<dyn CountryRepository>,
    ) -> Self {
        Self {
            continents,
            countries,
        }
    }

    /// Creates state backed by a file-based SQLite database.
    pub async fn sqlite(path: &str) -> anyhow::Result<Self> {
        let repo = Arc::new(SqliteRepository::new(path).await?);
        Ok(Self::new(repo.clone(), repo))
    }

    /// Creates state backed by an in-memory SQLite database (for testing).
    pub async fn in_memory() -> anyhow::Result<Self> {
        let repo = Arc::new(SqliteRepository::new_in_memory().await?);
        Ok(Self::new(repo.clone(), repo))
    }
}
