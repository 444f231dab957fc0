//! Seed importer: populates an empty database from a remote SQL dump.
//!
//! The dump is MySQL-flavored; each statement is dialect-cleaned with the
//! pure rules in `atlas_core::seed`, then only the continent/country
//! `INSERT`s are applied through the repository, one parameterized insert
//! per row. DDL from the dump is discarded - the application schema is
//! authoritative and already created by the repository.
//!
//! The existence check is the first step: when continents are already
//! present the run is a complete no-op, so repeated process starts are
//! safe and never destructive.

use std::sync::Arc;

use anyhow::{bail, Context};

use atlas_core::geo::Continent;
use atlas_core::seed::{clean_statement, country_from_fields, parse_insert, split_statements};
use atlas_core::storage::{ContinentRepository, CountryRepository};

/// Counters reported by an import run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub continents_inserted: usize,
    pub countries_inserted: usize,
    /// Dump statements that were not continent/country inserts (DDL etc.).
    pub statements_skipped: usize,
    /// Rows whose insert failed and was rolled back.
    pub rows_failed: usize,
}

impl ImportStats {
    /// True when the run inserted nothing (idempotent no-op).
    pub fn is_noop(&self) -> bool {
        self.continents_inserted == 0 && self.countries_inserted == 0
    }
}

/// One-shot importer of the remote seed dump.
pub struct SeedImporter {
    continents: Arc<dyn ContinentRepository>,
    countries: Arc<dyn CountryRepository>,
    url: String,
}

impl SeedImporter {
    pub fn new(
        continents: Arc<dyn ContinentRepository>,
        countries: Arc<dyn CountryRepository>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            continents,
            countries,
            url: url.into(),
        }
    }

    /// Runs the import: no-op when seed data is already present, otherwise
    /// fetch, clean and apply.
    ///
    /// A fetch failure or a malformed country row aborts the run; an insert
    /// failure for a single row is logged and skipped.
    pub async fn run(&self) -> anyhow::Result<ImportStats> {
        if self.continents.has_continents().await? {
            tracing::info!("Seed data already present, skipping import");
            return Ok(ImportStats::default());
        }

        let dump = self.fetch_dump().await?;
        let stats = self.apply_dump(&dump).await?;

        tracing::info!(
            continents = stats.continents_inserted,
            countries = stats.countries_inserted,
            skipped = stats.statements_skipped,
            failed = stats.rows_failed,
            "Seed import finished"
        );

        Ok(stats)
    }

    /// Fetches the dump text, failing on transport errors or non-2xx status.
    async fn fetch_dump(&self) -> anyhow::Result<String> {
        let response = reqwest::get(&self.url)
            .await
            .with_context(|| format!("Failed to fetch seed dump from {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Failed to fetch seed dump: HTTP {status}");
        }

        response
            .text()
            .await
            .context("Failed to read seed dump body")
    }

    /// Applies every continent/country insert in the dump.
    pub async fn apply_dump(&self, dump: &str) -> anyhow::Result<ImportStats> {
        let mut stats = ImportStats::default();

        for raw in split_statements(dump) {
            let sql = clean_statement(raw);
            if sql.is_empty() {
                continue;
            }

            let Some(insert) = parse_insert(&sql) else {
                // DDL and anything else from the dump is discarded.
                stats.statements_skipped += 1;
                continue;
            };

            match insert.table.as_str() {
                "continents" => self.apply_continent_rows(&insert.rows, &mut stats).await,
                "countries" => {
                    self.apply_country_rows(insert.columns.as_deref(), &insert.rows, &mut stats)
                        .await?
                }
                _ => stats.statements_skipped += 1,
            }
        }

        Ok(stats)
    }

    /// Inserts continent rows; each tuple maps positionally to (code, name).
    async fn apply_continent_rows(&self, rows: &[Vec<String>], stats: &mut ImportStats) {
        for row in rows {
            let [code, name, ..] = row.as_slice() else {
                tracing::warn!(row = ?row, "Skipping malformed continent row");
                stats.rows_failed += 1;
                continue;
            };

            match self
                .continents
                .create_continent(&Continent::new(code, name))
                .await
            {
                Ok(()) => stats.continents_inserted += 1,
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        code = %code,
                        row = %truncate(&row.join(",")),
                        "Failed to insert continent"
                    );
                    stats.rows_failed += 1;
                }
            }
        }
    }

    /// Inserts country rows, zipping the dump's column list with each tuple.
    ///
    /// A coercion or column-mapping failure aborts the whole run; a database
    /// failure for one row (e.g. a foreign key violation) only skips that row.
    async fn apply_country_rows(
        &self,
        columns: Option<&[String]>,
        rows: &[Vec<String>],
        stats: &mut ImportStats,
    ) -> anyhow::Result<()> {
        for row in rows {
            let country = country_from_fields(columns, row)
                .with_context(|| format!("Malformed country row {:?}", truncate(&row.join(","))))?;

            match self.countries.create_country(&country).await {
                Ok(()) => stats.countries_inserted += 1,
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        code = %country.code,
                        row = %truncate(&row.join(",")),
                        "Failed to insert country"
                    );
                    stats.rows_failed += 1;
                }
            }
        }
        Ok(())
    }
}

/// Truncates statement text for log readability.
///
/// The cut backs up to a UTF-8 character boundary so multi-byte names
/// ("Côte d'Ivoire") never split mid-character.
fn truncate(sql: &str) -> String {
    const MAX: usize = 120;
    if sql.len() <= MAX {
        return sql.to_string();
    }

    let mut cut = MAX;
    while !sql.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &sql[..cut])
}
