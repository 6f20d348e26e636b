//! Sport endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use podium_core::aggregate::SportTree;
use podium_core::models::{RecordId, SportDraft};
use serde::Deserialize;

use super::common::{Created, IdBody};
use crate::db::repos::SportRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::state::AppState;

/// Create/update sport request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SportBody {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// GET /sports - every sport with competitions and stages nested
async fn list_sports(State(state): State<AppState>) -> Result<Json<Vec<SportTree>>, ApiError> {
    let sports = SportRepo::new(state.pool()).list_nested().await?;
    Ok(Json(sports))
}

/// POST /sports/create
async fn create_sport(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SportBody>,
) -> Result<Json<Created>, ApiError> {
    let draft = SportDraft::new(body.title.as_deref(), body.description)?;
    let id = SportRepo::new(state.pool()).create(&draft).await?;

    tracing::info!(id, "sport created");
    Ok(Json(Created { id }))
}

/// POST /sports/update
async fn update_sport(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SportBody>,
) -> Result<StatusCode, ApiError> {
    let id = RecordId::new(body.id, "id")?;
    let draft = SportDraft::new(body.title.as_deref(), body.description)?;
    SportRepo::new(state.pool()).update(id, &draft).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /sports/delete - unlinks competitions first, atomically
async fn delete_sport(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<IdBody>,
) -> Result<StatusCode, ApiError> {
    let id = RecordId::new(body.id, "id")?;
    SportRepo::new(state.pool()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Sport routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sports", get(list_sports))
        .route("/sports/create", post(create_sport))
        .route("/sports/update", post(update_sport))
        .route("/sports/delete", delete(delete_sport))
}
