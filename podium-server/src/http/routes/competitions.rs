//! Competition endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::NaiveDate;
use podium_core::aggregate::CompetitionTree;
use podium_core::models::{CompetitionDraft, RecordId};
use serde::Deserialize;

use super::common::{Created, IdBody};
use crate::db::repos::CompetitionRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::state::AppState;

/// Create/update competition request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompetitionBody {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub date_of_start: Option<NaiveDate>,
    pub date_of_end: Option<NaiveDate>,
}

impl CompetitionBody {
    fn draft(&self) -> Result<CompetitionDraft, ApiError> {
        Ok(CompetitionDraft::new(
            self.title.as_deref(),
            self.date_of_start,
            self.date_of_end,
        )?)
    }
}

/// GET /competitions - every competition with sports and stages nested
async fn list_competitions(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompetitionTree>>, ApiError> {
    let competitions = CompetitionRepo::new(state.pool()).list_nested().await?;
    Ok(Json(competitions))
}

/// POST /competitions/create
async fn create_competition(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CompetitionBody>,
) -> Result<Json<Created>, ApiError> {
    let draft = body.draft()?;
    let id = CompetitionRepo::new(state.pool()).create(&draft).await?;

    tracing::info!(id, "competition created");
    Ok(Json(Created { id }))
}

/// POST /competitions/update
async fn update_competition(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CompetitionBody>,
) -> Result<StatusCode, ApiError> {
    let id = RecordId::new(body.id, "id")?;
    let draft = body.draft()?;
    CompetitionRepo::new(state.pool()).update(id, &draft).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /competitions/delete - unlinks sports first, atomically
async fn delete_competition(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<IdBody>,
) -> Result<StatusCode, ApiError> {
    let id = RecordId::new(body.id, "id")?;
    CompetitionRepo::new(state.pool()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Competition routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/competitions", get(list_competitions))
        .route("/competitions/create", post(create_competition))
        .route("/competitions/update", post(update_competition))
        .route("/competitions/delete", delete(delete_competition))
}
