//! Flattening parsed exercises into per-set records for storage.

use serde::Serialize;

use crate::types::ParsedExercise;

/// Weights are recorded as written; the parser does not convert units.
pub const DEFAULT_WEIGHT_UNIT: &str = "kg";

/// One stored set row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetRecord {
    pub exercise_name: String,
    /// 1-based position across the whole workout.
    pub set_number: u32,
    pub weight: Option<f64>,
    pub weight_unit: String,
    pub reps: u32,
    pub is_bodyweight: bool,
    pub notes: Option<String>,
}

/// Expand exercises into set records, numbering sets across the workout.
pub fn to_set_records(exercises: &[ParsedExercise]) -> Vec<SetRecord> {
    let mut set_number = 0;
    let mut records = Vec::new();

    for exercise in exercises {
        for set in exercise.resolved_sets() {
            set_number += 1;
            records.push(SetRecord {
                exercise_name: exercise.name().to_string(),
                set_number,
                weight: set.weight,
                weight_unit: DEFAULT_WEIGHT_UNIT.to_string(),
                reps: set.reps,
                is_bodyweight: set.weight.is_none(),
                notes: exercise.notes().map(str::to_string),
            });
        }
    }

    records
}
