//! Derived workout metrics.

use serde::Serialize;

use crate::types::ParsedExercise;

impl ParsedExercise {
    pub fn set_count(&self) -> usize {
        self.sets().len()
    }

    /// Widened so 100 sets of a huge rep count cannot overflow.
    pub fn total_reps(&self) -> u64 {
        self.sets().iter().map(|&reps| u64::from(reps)).sum()
    }

    /// Sum of weight × reps over every set; bodyweight sets add nothing.
    ///
    /// Uses per-set weights when the line carried them.
    pub fn volume(&self) -> f64 {
        match self.detailed_sets() {
            Some(detailed) => detailed.iter().map(|s| s.volume()).sum(),
            None => self
                .weight()
                .map_or(0.0, |w| w * self.total_reps() as f64),
        }
    }
}

/// Totals across a parsed workout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub exercise_count: usize,
    pub set_count: usize,
    pub total_reps: u64,
    pub total_volume: f64,
}

impl WorkoutSummary {
    pub fn from_exercises(exercises: &[ParsedExercise]) -> Self {
        exercises.iter().fold(Self::default(), |acc, ex| Self {
            exercise_count: acc.exercise_count + 1,
            set_count: acc.set_count + ex.set_count(),
            total_reps: acc.total_reps + ex.total_reps(),
            total_volume: acc.total_volume + ex.volume(),
        })
    }
}

/// Compact volume label: `850`, `12.3k`.
pub fn format_volume(volume: f64) -> String {
    if volume >= 1000.0 {
        format!("{:.1}k", volume / 1000.0)
    } else {
        format!("{:.0}", volume)
    }
}
