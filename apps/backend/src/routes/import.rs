//! Import endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::services::import::{build_workout_draft, check_input_size};
use crate::AppState;

/// POST /api/import
pub async fn import(
    State(state): State<AppState>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<WorkoutDraft>> {
    check_input_size(&payload.text, state.config.max_input_bytes)?;

    let draft = build_workout_draft(&payload.text, payload.completed_at)?;
    tracing::info!(workout_id = %draft.id, sets = draft.set_count, "imported workout");
    Ok(Json(draft))
}

/// POST /api/import/raw
/// Plain-text body, stored verbatim, completed now
pub async fn import_raw(State(state): State<AppState>, body: String) -> Result<Json<WorkoutDraft>> {
    check_input_size(&body, state.config.max_input_bytes)?;

    let draft = build_workout_draft(&body, None)?;
    tracing::info!(workout_id = %draft.id, sets = draft.set_count, "imported raw workout");
    Ok(Json(draft))
}
