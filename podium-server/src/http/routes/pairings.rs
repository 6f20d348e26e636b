//! Competition-sport association endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use podium_core::aggregate::PairingListing;
use podium_core::models::{PairingDraft, RecordId};
use serde::Deserialize;

use super::common::{Created, IdBody};
use crate::db::repos::PairingRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::state::AppState;

/// Link request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PairingBody {
    pub competition_id: Option<i64>,
    pub sport_id: Option<i64>,
}

/// GET /competition_sport - pairings with both titles resolved
async fn list_pairings(
    State(state): State<AppState>,
) -> Result<Json<Vec<PairingListing>>, ApiError> {
    let pairings = PairingRepo::new(state.pool()).list().await?;
    Ok(Json(pairings))
}

/// POST /competition_sport/create
async fn create_pairing(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<PairingBody>,
) -> Result<Json<Created>, ApiError> {
    let draft = PairingDraft::new(body.competition_id, body.sport_id)?;
    let id = PairingRepo::new(state.pool()).create(draft).await?;

    tracing::info!(
        id,
        competition_id = %draft.competition_id,
        sport_id = %draft.sport_id,
        "sport linked to competition"
    );
    Ok(Json(Created { id }))
}

/// DELETE /competition_sport/delete
async fn delete_pairing(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<IdBody>,
) -> Result<StatusCode, ApiError> {
    let id = RecordId::new(body.id, "id")?;
    PairingRepo::new(state.pool()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Pairing routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/competition_sport", get(list_pairings))
        .route("/competition_sport/create", post(create_pairing))
        .route("/competition_sport/delete", delete(delete_pairing))
}
