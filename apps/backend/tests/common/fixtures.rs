//! Test fixtures and factory functions for request bodies.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

pub use workout_core::SAMPLE_WORKOUT;

/// A log mixing every line outcome: exercise, blank, comment and unparseable.
pub const MIXED_LOG: &str = "bench 80kg 8/8/6

.... warmup felt slow
rest day
pull-ups 10/8/7";

pub fn parse_request(text: &str) -> Value {
    json!({ "text": text })
}

pub fn line_request(line: &str) -> Value {
    json!({ "line": line })
}

pub fn batch_request(entries: &[&str]) -> Value {
    json!({ "entries": entries })
}

pub fn import_request(text: &str, completed_at: Option<DateTime<Utc>>) -> Value {
    match completed_at {
        Some(at) => json!({ "text": text, "completed_at": at }),
        None => json!({ "text": text }),
    }
}

/// Text of exactly `len` bytes.
pub fn text_of_len(len: usize) -> String {
    "x".repeat(len)
}
