//! API request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from workout-core
pub use workout_core::{LineKind, ParsedExercise, ParsedLine, SetRecord, WorkoutSummary};

// === Parse ===

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub exercises: Vec<ParsedExercise>,
    pub summary: WorkoutSummary,
}

impl ParseResponse {
    pub fn from_exercises(exercises: Vec<ParsedExercise>) -> Self {
        let summary = WorkoutSummary::from_exercises(&exercises);
        Self { exercises, summary }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseLineRequest {
    pub line: String,
}

#[derive(Debug, Serialize)]
pub struct ParseLineResponse {
    #[serde(flatten)]
    pub line: ParsedLine,
    pub kind: LineKind,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseBatchRequest {
    pub entries: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseBatchResponse {
    pub results: Vec<ParseResponse>,
}

// Preview types
#[derive(Debug, Serialize)]
pub struct PreviewLine {
    /// 1-based
    pub line_number: usize,
    pub original_text: String,
    pub kind: LineKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ParsedExercise>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub lines: Vec<PreviewLine>,
    pub unparseable: Vec<String>,
    pub summary: WorkoutSummary,
}

// === Import ===

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportRequest {
    pub text: String,
    pub completed_at: Option<DateTime<Utc>>,
}

/// A parsed workout ready to hand to storage.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutDraft {
    pub id: Uuid,
    pub raw_text: String,
    /// SHA-256 of `raw_text`, hex encoded
    pub content_hash: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub exercise_count: usize,
    pub set_count: usize,
    pub total_volume: f64,
    pub sets: Vec<SetRecord>,
}
