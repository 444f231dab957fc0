//! CRUD handlers for continents.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use atlas_core::geo::{merge_continent, Continent, ContinentPatch, CreateContinentRequest};
use atlas_core::storage::Page;

use crate::{handlers::AppError, state::AppState};

/// List continents with pagination (GET /continents).
pub async fn list_continents(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<Vec<Continent>>, AppError> {
    let continents = state.continents.list_continents(page).await?;
    Ok(Json(continents))
}

/// Get a single continent by code (GET /continents/{code}).
pub async fn get_continent(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Continent>, AppError> {
    let continent = state
        .continents
        .get_continent(&code)
        .await?
        .ok_or_else(|| not_found(&code))?;
    Ok(Json(continent))
}

/// Create a new continent (POST /continents).
pub async fn create_continent(
    State(state): State<AppState>,
    Json(payload): Json<CreateContinentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let continent = payload.into_continent();
    state.continents.create_continent(&continent).await?;

    tracing::info!(code = %continent.code, name = %continent.name, "Created continent");

    Ok((StatusCode::CREATED, Json(continent)))
}

/// Partially update a continent (PUT /continents/{code}).
pub async fn update_continent(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(patch): Json<ContinentPatch>,
) -> Result<Json<Continent>, AppError> {
    let current = state
        .continents
        .get_continent(&code)
        .await?
        .ok_or_else(|| not_found(&code))?;

    let merged = merge_continent(&current, patch);
    state.continents.update_continent(&merged).await?;

    tracing::info!(code = %code, "Updated continent");

    Ok(Json(merged))
}

/// Delete a continent (DELETE /continents/{code}).
pub async fn delete_continent(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.continents.delete_continent(&code).await?;

    tracing::info!(code = %code, "Deleted continent");

    Ok(Json(serde_json::json!({ "detail": "Continent deleted" })))
}

fn not_found(code: &str) -> AppError {
    AppError(
        atlas_core::storage::RepositoryError::NotFound {
            entity_type: "Continent",
            id: code.to_string(),
        }
        .into(),
    )
}
