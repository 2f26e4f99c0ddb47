//! Free-text workout log parser.
//!
//! # Format
//! ```text
//! Bench 80kg 8/8/6
//! Push-ups BW 15/12/10
//! squat 3x5 140kg
//! dumbell rows 10kg 13 / 34kg 12 .... (left side weaker)
//! .... deload week, keep it light
//! ```
//!
//! Every line is handled on its own: trailing notes after `....` are split
//! off, spacing is normalized, then the matchers in [`matchers`] are tried in
//! priority order. A line with a note marker that no matcher accepts is a
//! comment; any other unmatched line is unparseable.

pub mod matchers;
pub mod pair;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PatternError, Result};
use crate::normalize::{extract_note, normalize_exercise_name, normalize_input, NOTE_MARKER};
use crate::spelling::correct_spelling;
use crate::types::{ParsedExercise, ParsedLine};

use self::matchers::{default_matchers, ExtractedSets, Matcher};

static DEFAULT_PARSER: Lazy<WorkoutParser> = Lazy::new(|| {
    WorkoutParser::new().expect("built-in matcher patterns must compile")
});

pub(crate) fn compile(matcher: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| PatternError::InvalidPattern { matcher, source })
}

/// Parse workout text into exercises, dropping comments, blanks and
/// unparseable lines.
pub fn parse(text: &str) -> Vec<ParsedExercise> {
    DEFAULT_PARSER.parse(text)
}

/// Parse a single line.
pub fn parse_line(line: &str) -> ParsedLine {
    DEFAULT_PARSER.parse_line(line)
}

/// Parse every line, keeping comments, blanks and unparseable lines.
pub fn parse_lines(text: &str) -> Vec<ParsedLine> {
    DEFAULT_PARSER.parse_lines(text)
}

/// Parse many independent documents.
#[cfg(feature = "parallel")]
pub fn parse_batch<S: AsRef<str> + Sync>(entries: &[S]) -> Vec<Vec<ParsedExercise>> {
    use rayon::prelude::*;

    entries.par_iter().map(|entry| parse(entry.as_ref())).collect()
}

/// Parse many independent documents.
#[cfg(not(feature = "parallel"))]
pub fn parse_batch<S: AsRef<str>>(entries: &[S]) -> Vec<Vec<ParsedExercise>> {
    entries.iter().map(|entry| parse(entry.as_ref())).collect()
}

/// Ordered matcher cascade plus the line/document driver.
pub struct WorkoutParser {
    matchers: Vec<Box<dyn Matcher>>,
}

impl WorkoutParser {
    /// Compile the built-in cascade.
    pub fn new() -> Result<Self> {
        Ok(Self::with_matchers(default_matchers()?))
    }

    /// Use a custom cascade; order is priority.
    pub fn with_matchers(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// Process-wide parser used by the free functions.
    pub fn global() -> &'static Self {
        &DEFAULT_PARSER
    }

    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    pub fn parse(&self, text: &str) -> Vec<ParsedExercise> {
        text.split('\n')
            .filter_map(|line| self.parse_line(line).exercise)
            .collect()
    }

    pub fn parse_lines(&self, text: &str) -> Vec<ParsedLine> {
        text.split('\n').map(|line| self.parse_line(line)).collect()
    }

    pub fn parse_line(&self, line: &str) -> ParsedLine {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return ParsedLine::unmatched(line);
        }

        if let Some(exercise) = self.parse_exercise(trimmed) {
            return ParsedLine::exercise(line, exercise);
        }

        if trimmed.contains(NOTE_MARKER) {
            return ParsedLine::comment(line);
        }

        tracing::debug!(line = %trimmed, "no matcher accepted line");
        ParsedLine::unmatched(line)
    }

    fn parse_exercise(&self, text: &str) -> Option<ParsedExercise> {
        let (working, notes) = extract_note(text);
        let working = normalize_input(working);

        let (matcher, extraction) = self
            .matchers
            .iter()
            .find_map(|m| m.attempt(&working).map(|e| (m.name(), e)))?;

        tracing::trace!(matcher, text = %working, "line matched");

        let name = normalize_exercise_name(&correct_spelling(&extraction.name));
        if name.is_empty() {
            return None;
        }

        let exercise = match extraction.sets {
            ExtractedSets::Uniform { weight, reps } => ParsedExercise::new(name, weight, reps, notes),
            ExtractedSets::Detailed(sets) => ParsedExercise::with_detailed_sets(name, sets, notes),
        };
        Some(exercise)
    }
}
