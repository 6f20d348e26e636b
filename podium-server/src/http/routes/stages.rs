//! Stage endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::NaiveDate;
use podium_core::aggregate::StageListing;
use podium_core::models::{RecordId, StageDraft};
use serde::Deserialize;

use super::common::{Created, IdBody};
use crate::db::repos::StageRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::state::AppState;

/// Create/update stage request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StageBody {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
    pub competition_sport_id: Option<i64>,
}

impl StageBody {
    fn into_draft(self) -> Result<StageDraft, ApiError> {
        Ok(StageDraft::new(
            self.title.as_deref(),
            self.date,
            self.place,
            self.competition_sport_id,
        )?)
    }
}

/// GET /stages - flat list with resolved competition and sport titles
async fn list_stages(State(state): State<AppState>) -> Result<Json<Vec<StageListing>>, ApiError> {
    let stages = StageRepo::new(state.pool()).list_flat().await?;
    Ok(Json(stages))
}

/// POST /stages/create
async fn create_stage(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<StageBody>,
) -> Result<Json<Created>, ApiError> {
    let draft = body.into_draft()?;
    let id = StageRepo::new(state.pool()).create(&draft).await?;

    tracing::info!(id, "stage created");
    Ok(Json(Created { id }))
}

/// POST /stages/update
async fn update_stage(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<StageBody>,
) -> Result<StatusCode, ApiError> {
    let id = RecordId::new(body.id, "id")?;
    let draft = body.into_draft()?;
    StageRepo::new(state.pool()).update(id, &draft).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /stages/delete
async fn delete_stage(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<IdBody>,
) -> Result<StatusCode, ApiError> {
    let id = RecordId::new(body.id, "id")?;
    StageRepo::new(state.pool()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Stage routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stages", get(list_stages))
        .route("/stages/create", post(create_stage))
        .route("/stages/update", post(update_stage))
        .route("/stages/delete", delete(delete_stage))
}
