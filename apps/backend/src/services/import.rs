//! Building workout drafts from raw log text.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use workout_core::{to_set_records, WorkoutSummary};

use crate::error::{ApiError, Result};
use crate::models::WorkoutDraft;

/// Assumed session length when only the finish time is known.
pub const DEFAULT_SESSION_LENGTH_MINUTES: i64 = 60;

/// Compute SHA-256 hash of content.
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Reject inputs above the configured size.
pub fn check_input_size(text: &str, limit: usize) -> Result<()> {
    if text.len() > limit {
        return Err(ApiError::PayloadTooLarge {
            size: text.len(),
            limit,
        });
    }
    Ok(())
}

/// Parse `raw_text` and flatten it into a draft.
///
/// Fails when no line yields an exercise.
pub fn build_workout_draft(
    raw_text: &str,
    completed_at: Option<DateTime<Utc>>,
) -> Result<WorkoutDraft> {
    if raw_text.trim().is_empty() {
        return Err(ApiError::BadRequest("workout text is empty".to_string()));
    }

    let exercises = workout_core::parse(raw_text);
    if exercises.is_empty() {
        return Err(ApiError::BadRequest(
            "no exercises found in workout text".to_string(),
        ));
    }

    let summary = WorkoutSummary::from_exercises(&exercises);
    let completed_at = completed_at.unwrap_or_else(Utc::now);
    let started_at = completed_at - Duration::minutes(DEFAULT_SESSION_LENGTH_MINUTES);

    tracing::debug!(
        exercises = summary.exercise_count,
        sets = summary.set_count,
        "built workout draft"
    );

    Ok(WorkoutDraft {
        id: Uuid::new_v4(),
        raw_text: raw_text.to_string(),
        content_hash: hash_content(raw_text),
        started_at,
        completed_at,
        exercise_count: summary.exercise_count,
        set_count: summary.set_count,
        total_volume: summary.total_volume,
        sets: to_set_records(&exercises),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use workout_core::SAMPLE_WORKOUT;

    #[test]
    fn test_hash_content() {
        let hash = hash_content("test content");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_content("test content"));
        assert_ne!(hash, hash_content("test content 2"));
    }

    #[test]
    fn test_check_input_size() {
        assert!(check_input_size("12345", 5).is_ok());
        assert!(matches!(
            check_input_size("123456", 5),
            Err(ApiError::PayloadTooLarge { size: 6, limit: 5 })
        ));
    }

    #[test]
    fn test_draft_from_sample() {
        let completed = Utc.with_ymd_and_hms(2024, 3, 1, 19, 30, 0).unwrap();
        let draft = build_workout_draft(SAMPLE_WORKOUT, Some(completed)).unwrap();

        assert_eq!(draft.exercise_count, 6);
        assert_eq!(draft.set_count, 17);
        assert_eq!(draft.sets.len(), 17);
        assert_eq!(draft.total_volume, 5788.0);
        assert_eq!(draft.completed_at, completed);
        assert_eq!(draft.started_at, Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap());
        assert_eq!(draft.content_hash, hash_content(SAMPLE_WORKOUT));
        assert_eq!(draft.sets.first().unwrap().set_number, 1);
        assert_eq!(draft.sets.last().unwrap().set_number, 17);
    }

    #[test]
    fn test_draft_defaults_completed_at_to_now() {
        let before = Utc::now();
        let draft = build_workout_draft("plank 60", None).unwrap();
        assert!(draft.completed_at >= before);
        assert_eq!(draft.completed_at - draft.started_at, Duration::hours(1));
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            build_workout_draft("  \n ", None),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            build_workout_draft("rest day\n.... sore", None),
            Err(ApiError::BadRequest(_))
        ));
    }
}
