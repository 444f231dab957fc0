//! CRUD and lookup handlers for countries.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use atlas_core::geo::{merge_country, Country, CountryPatch, CreateCountryRequest};
use atlas_core::storage::Page;

use crate::{handlers::AppError, state::AppState};

/// Query parameters for the paginated country list.
#[derive(Debug, Deserialize)]
pub struct ListCountriesQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub updated_after: Option<DateTime<Utc>>,
}

/// Query parameters for the `updated_at`-ordered delta listing.
#[derive(Debug, Deserialize)]
pub struct AfterQuery {
    pub last_updated_at: DateTime<Utc>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

/// List countries with pagination and optional `updated_after` filter
/// (GET /countries).
pub async fn list_countries(
    State(state): State<AppState>,
    Query(query): Query<ListCountriesQuery>,
) -> Result<Json<Vec<Country>>, AppError> {
    let page = Page {
        skip: query.skip,
        limit: query.limit,
    };
    let countries = state
        .countries
        .list_countries(page, query.updated_after)
        .await?;
    Ok(Json(countries))
}

/// List countries updated after a timestamp, ordered by `updated_at`
/// (GET /countries/after).
pub async fn list_countries_after(
    State(state): State<AppState>,
    Query(query): Query<AfterQuery>,
) -> Result<Json<Vec<Country>>, AppError> {
    let countries = state
        .countries
        .list_countries_after(query.last_updated_at, query.limit)
        .await?;
    Ok(Json(countries))
}

/// Get a single country by code (GET /countries/{code}).
pub async fn get_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Country>, AppError> {
    let country = state
        .countries
        .get_country(&code)
        .await?
        .ok_or_else(|| not_found(&code))?;
    Ok(Json(country))
}

/// Find a country by its exact name (GET /countries/search/{name}).
pub async fn search_country(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Country>, AppError> {
    let country = state
        .countries
        .find_country_by_name(&name)
        .await?
        .ok_or_else(|| not_found(&name))?;
    Ok(Json(country))
}

/// Create a new country (POST /countries).
///
/// Fails with 400 when `continent_code` references no continent and 409 when
/// the country code is already taken.
pub async fn create_country(
    State(state): State<AppState>,
    Json(payload): Json<CreateCountryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let country = payload.into_country();
    state.countries.create_country(&country).await?;

    tracing::info!(code = %country.code, name = %country.name, "Created country");

    Ok((StatusCode::CREATED, Json(country)))
}

/// Partially update a country (PUT /countries/{code}).
pub async fn update_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(patch): Json<CountryPatch>,
) -> Result<Json<Country>, AppError> {
    let current = state
        .countries
        .get_country(&code)
        .await?
        .ok_or_else(|| not_found(&code))?;

    let merged = merge_country(&current, patch);
    state.countries.update_country(&merged).await?;

    tracing::info!(code = %code, "Updated country");

    Ok(Json(merged))
}

/// Delete a country (DELETE /countries/{code}).
pub async fn delete_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.countries.delete_country(&code).await?;

    tracing::info!(code = %code, "Deleted country");

    Ok(Json(serde_json::json!({ "detail": "Country deleted" })))
}

fn not_found(id: &str) -> AppError {
    AppError(
        atlas_core::storage::RepositoryError::NotFound {
            entity_type: "Country",
            id: id.to_string(),
        }
        .into(),
    )
}
