//! Parse endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::import::check_input_size;
use crate::AppState;

/// POST /api/parse
pub async fn parse(
    State(state): State<AppState>,
    Json(payload): Json<ParseRequest>,
) -> Result<Json<ParseResponse>> {
    check_input_size(&payload.text, state.config.max_input_bytes)?;

    let exercises = workout_core::parse(&payload.text);
    Ok(Json(ParseResponse::from_exercises(exercises)))
}

/// POST /api/parse/preview
/// Every line with its outcome, so the client can flag unparseable ones
pub async fn preview(
    State(state): State<AppState>,
    Json(payload): Json<ParseRequest>,
) -> Result<Json<PreviewResponse>> {
    check_input_size(&payload.text, state.config.max_input_bytes)?;

    let parsed = workout_core::parse_lines(&payload.text);

    let unparseable = parsed
        .iter()
        .filter(|line| line.is_unparseable())
        .map(|line| line.original_text.trim().to_string())
        .collect();

    let lines: Vec<PreviewLine> = parsed
        .into_iter()
        .enumerate()
        .map(|(idx, line)| PreviewLine {
            line_number: idx + 1,
            kind: line.kind(),
            original_text: line.original_text,
            exercise: line.exercise,
        })
        .collect();

    let exercises: Vec<ParsedExercise> = lines
        .iter()
        .filter_map(|line| line.exercise.clone())
        .collect();

    Ok(Json(PreviewResponse {
        lines,
        unparseable,
        summary: WorkoutSummary::from_exercises(&exercises),
    }))
}

/// POST /api/parse/line
pub async fn parse_line(
    State(state): State<AppState>,
    Json(payload): Json<ParseLineRequest>,
) -> Result<Json<ParseLineResponse>> {
    check_input_size(&payload.line, state.config.max_input_bytes)?;

    let line = workout_core::parse_line(&payload.line);
    let kind = line.kind();
    Ok(Json(ParseLineResponse { line, kind }))
}

/// POST /api/parse/batch
/// Parse independent documents on the blocking pool
pub async fn batch(
    State(state): State<AppState>,
    Json(payload): Json<ParseBatchRequest>,
) -> Result<Json<ParseBatchResponse>> {
    let total: usize = payload.entries.iter().map(String::len).sum();
    if total > state.config.max_input_bytes {
        return Err(ApiError::PayloadTooLarge {
            size: total,
            limit: state.config.max_input_bytes,
        });
    }

    let entries = payload.entries;
    let parsed =
        tokio::task::spawn_blocking(move || workout_core::parse_batch(entries.as_slice())).await?;

    tracing::debug!(documents = parsed.len(), "parsed batch");

    Ok(Json(ParseBatchResponse {
        results: parsed.into_iter().map(ParseResponse::from_exercises).collect(),
    }))
}
