//! Text canonicalization applied before and after pattern matching.

/// Marker separating an exercise from a trailing free-text note.
pub const NOTE_MARKER: &str = "....";

/// Unit suffixes that absorb a preceding space (`lb` also covers `lbs`).
const UNIT_PREFIXES: [&str; 2] = ["kg", "lb"];

/// Split a trimmed line into working text and an optional trailing note.
///
/// `"bench 80kg 8/8 .... (felt strong)"` → `("bench 80kg 8/8", Some("felt strong"))`.
/// One pair of wrapping parentheses is stripped from the note; an empty note
/// is reported as absent.
pub fn extract_note(text: &str) -> (&str, Option<String>) {
    let Some(idx) = text.find(NOTE_MARKER) else {
        return (text, None);
    };

    let working = text[..idx].trim();
    let raw_note = text[idx + NOTE_MARKER.len()..].trim();

    let note = match raw_note
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => inner,
        None => raw_note,
    };

    let note = (!note.is_empty()).then(|| note.to_string());
    (working, note)
}

/// Canonicalize spacing so the matchers see one layout.
///
/// Collapses runs of spaces and glues unit suffixes to their number
/// (`"80  KG"` → `"80KG"`). Nothing else changes.
pub fn normalize_input(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' {
            if previous_space {
                continue;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
        collapsed.push(c);
    }

    let mut result = String::with_capacity(collapsed.len());
    for (idx, c) in collapsed.char_indices() {
        if c == ' ' && starts_with_unit(&collapsed[idx + 1..]) {
            continue;
        }
        result.push(c);
    }
    result
}

fn starts_with_unit(rest: &str) -> bool {
    UNIT_PREFIXES.iter().any(|unit| {
        rest.get(..unit.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(unit))
    })
}

/// Title-case every whitespace-delimited word (ASCII rules).
///
/// `"dumbbell ROWS"` → `"Dumbbell Rows"`. Idempotent.
pub fn normalize_exercise_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(word.len());
                    out.push(first.to_ascii_uppercase());
                    out.extend(chars.map(|c| c.to_ascii_lowercase()));
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_note_with_parentheses() {
        let (working, note) = extract_note("bench 80kg 8/8 .... (felt strong)");
        assert_eq!(working, "bench 80kg 8/8");
        assert_eq!(note.as_deref(), Some("felt strong"));
    }

    #[test]
    fn extract_note_without_parentheses() {
        let (working, note) = extract_note("squat 100kg 5/5....  deep ");
        assert_eq!(working, "squat 100kg 5/5");
        assert_eq!(note.as_deref(), Some("deep"));
    }

    #[test]
    fn extract_note_strips_one_pair_only() {
        let (_, note) = extract_note("x 1 .... ((nested))");
        assert_eq!(note.as_deref(), Some("(nested)"));
    }

    #[test]
    fn extract_note_absent() {
        assert_eq!(extract_note("bench 80kg 8"), ("bench 80kg 8", None));
    }

    #[test]
    fn extract_note_empty_is_none() {
        assert_eq!(extract_note("bench 80kg 8 ...."), ("bench 80kg 8", None));
        assert_eq!(extract_note("bench 80kg 8 .... ()"), ("bench 80kg 8", None));
    }

    #[test]
    fn extract_note_uses_first_marker() {
        let (working, note) = extract_note(".... just a note .... more");
        assert_eq!(working, "");
        assert_eq!(note.as_deref(), Some("just a note .... more"));
    }

    #[test]
    fn normalize_collapses_spaces() {
        assert_eq!(normalize_input("bench    80kg   8/8"), "bench 80kg 8/8");
    }

    #[test]
    fn normalize_glues_units() {
        assert_eq!(normalize_input("bench 80 kg 8/8"), "bench 80kg 8/8");
        assert_eq!(normalize_input("bench 80  KG 8"), "bench 80KG 8");
        assert_eq!(normalize_input("curl 50 lbs 10"), "curl 50lbs 10");
        assert_eq!(normalize_input("curl 50 Lb 10"), "curl 50Lb 10");
    }

    #[test]
    fn normalize_leaves_other_text() {
        assert_eq!(normalize_input("pull-ups\t10/8"), "pull-ups\t10/8");
    }

    #[test]
    fn name_title_case() {
        assert_eq!(normalize_exercise_name("dumbbell ROWS"), "Dumbbell Rows");
        assert_eq!(normalize_exercise_name("push-ups"), "Push-ups");
        assert_eq!(normalize_exercise_name("  lat   pulldown "), "Lat Pulldown");
        assert_eq!(normalize_exercise_name("lat\tpulldown"), "Lat Pulldown");
        assert_eq!(normalize_exercise_name("cable\u{a0}row"), "Cable Row");
    }

    #[test]
    fn name_normalization_is_idempotent() {
        for name in ["Bench Press", "overhead PRESS", "t-bar row", "Ü ber"] {
            let once = normalize_exercise_name(name);
            assert_eq!(normalize_exercise_name(&once), once);
        }
    }
}
