//! Core types for parsed workout text.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One performed set: the load (absent for bodyweight) and the rep count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub reps: u32,
}

impl ParsedSet {
    pub fn new(weight: Option<f64>, reps: u32) -> Self {
        Self { weight, reps }
    }

    /// Weight × reps, zero for bodyweight sets.
    pub fn volume(&self) -> f64 {
        self.weight.map_or(0.0, |w| w * f64::from(self.reps))
    }
}

/// A single exercise extracted from one line of workout text.
///
/// Fields are read-only: `is_bodyweight` always mirrors `weight.is_none()`
/// and `sets` always mirrors `detailed_sets` when those are present.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedExercise {
    id: Uuid,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    is_bodyweight: bool,
    sets: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detailed_sets: Option<Vec<ParsedSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl ParsedExercise {
    /// Exercise where every set shares one weight (or none, for bodyweight).
    pub fn new(
        name: impl Into<String>,
        weight: Option<f64>,
        sets: Vec<u32>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            weight,
            is_bodyweight: weight.is_none(),
            sets,
            detailed_sets: None,
            notes,
        }
    }

    /// Exercise where each set carries its own weight.
    ///
    /// The display weight is the first weight carried by any set.
    pub fn with_detailed_sets(
        name: impl Into<String>,
        detailed_sets: Vec<ParsedSet>,
        notes: Option<String>,
    ) -> Self {
        let weight = detailed_sets.iter().find_map(|s| s.weight);
        let sets = detailed_sets.iter().map(|s| s.reps).collect();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            weight,
            is_bodyweight: weight.is_none(),
            sets,
            detailed_sets: Some(detailed_sets),
            notes,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn is_bodyweight(&self) -> bool {
        self.is_bodyweight
    }

    /// Rep count per set, in order.
    pub fn sets(&self) -> &[u32] {
        &self.sets
    }

    pub fn detailed_sets(&self) -> Option<&[ParsedSet]> {
        self.detailed_sets.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Every set with its effective weight.
    ///
    /// Detailed sets win; otherwise each rep count takes the shared weight.
    pub fn resolved_sets(&self) -> Vec<ParsedSet> {
        match &self.detailed_sets {
            Some(detailed) => detailed.clone(),
            None => self
                .sets
                .iter()
                .map(|&reps| ParsedSet::new(self.weight, reps))
                .collect(),
        }
    }
}

/// Identity equality: two parses of the same text are distinct records.
impl PartialEq for ParsedExercise {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ParsedExercise {}

/// Outcome category of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Exercise,
    Comment,
    Unparseable,
    Blank,
}

/// Result of parsing one line of workout text.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedLine {
    pub original_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ParsedExercise>,
    pub is_comment: bool,
}

impl ParsedLine {
    pub fn exercise(original_text: impl Into<String>, exercise: ParsedExercise) -> Self {
        Self {
            original_text: original_text.into(),
            exercise: Some(exercise),
            is_comment: false,
        }
    }

    pub fn comment(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            exercise: None,
            is_comment: true,
        }
    }

    /// Blank and unparseable lines share this shape.
    pub fn unmatched(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            exercise: None,
            is_comment: false,
        }
    }

    pub fn kind(&self) -> LineKind {
        if self.exercise.is_some() {
            LineKind::Exercise
        } else if self.is_comment {
            LineKind::Comment
        } else if self.original_text.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Unparseable
        }
    }

    pub fn is_unparseable(&self) -> bool {
        self.kind() == LineKind::Unparseable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodyweight_flag_follows_weight() {
        let weighted = ParsedExercise::new("Bench", Some(80.0), vec![8, 8], None);
        assert!(!weighted.is_bodyweight());

        let bodyweight = ParsedExercise::new("Dips", None, vec![10], None);
        assert!(bodyweight.is_bodyweight());
    }

    #[test]
    fn detailed_sets_drive_sets_and_weight() {
        let exercise = ParsedExercise::with_detailed_sets(
            "Row",
            vec![ParsedSet::new(None, 15), ParsedSet::new(Some(34.0), 12)],
            None,
        );
        assert_eq!(exercise.sets(), &[15, 12]);
        assert_eq!(exercise.weight(), Some(34.0));
        assert!(!exercise.is_bodyweight());
        assert_eq!(exercise.detailed_sets().map(<[_]>::len), Some(2));
    }

    #[test]
    fn exercises_compare_by_identity() {
        let a = ParsedExercise::new("Squat", Some(100.0), vec![5], None);
        let b = ParsedExercise::new("Squat", Some(100.0), vec![5], None);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn resolved_sets_use_shared_weight() {
        let exercise = ParsedExercise::new("Bench", Some(80.0), vec![8, 6], None);
        assert_eq!(
            exercise.resolved_sets(),
            vec![ParsedSet::new(Some(80.0), 8), ParsedSet::new(Some(80.0), 6)]
        );
    }

    #[test]
    fn line_kinds() {
        assert_eq!(ParsedLine::unmatched("   ").kind(), LineKind::Blank);
        assert_eq!(ParsedLine::unmatched("???").kind(), LineKind::Unparseable);
        assert_eq!(ParsedLine::comment(".... note").kind(), LineKind::Comment);
        let exercise = ParsedExercise::new("Dips", None, vec![10], None);
        assert_eq!(ParsedLine::exercise("dips 10", exercise).kind(), LineKind::Exercise);
    }

    #[test]
    fn serializes_snake_case_and_skips_missing() {
        let exercise = ParsedExercise::new("Dips", None, vec![10, 8], None);
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["is_bodyweight"], true);
        assert_eq!(json["sets"], serde_json::json!([10, 8]));
        assert!(json.get("weight").is_none());
        assert!(json.get("detailed_sets").is_none());
    }
}
