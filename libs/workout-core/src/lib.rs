//! Core workout log library shared by the backend and its collaborators.
//!
//! Provides:
//! - Free-text workout line parser (ordered matcher cascade)
//! - Spelling correction for exercise names (Levenshtein distance)
//! - Derived metrics (set counts, volume) and set-record expansion
//! - Shared types (ParsedExercise, ParsedSet, ParsedLine, etc.)

pub mod error;
pub mod matching;
pub mod metrics;
pub mod normalize;
pub mod parser;
pub mod records;
pub mod spelling;
pub mod types;

pub use error::{PatternError, Result};
pub use matching::levenshtein_distance;
pub use metrics::{format_volume, WorkoutSummary};
pub use parser::{parse, parse_batch, parse_line, parse_lines, WorkoutParser};
pub use records::{to_set_records, SetRecord};
pub use spelling::correct_spelling;
pub use types::{LineKind, ParsedExercise, ParsedLine, ParsedSet};

/// Sample workout used by previews and tests.
pub const SAMPLE_WORKOUT: &str = "Bench 80kg 8/8/6
Incline 60kg 10/10/8
Dumbbell Press 25kg 12/12/10
Push-ups BW 15/12/10
Tricep Pushdown 30kg 12/10/10 .... (arms tired)
dumbell rows 10kg 13 / 34kg 12";
