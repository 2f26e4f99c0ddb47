//! Edit-distance primitives used by the spelling corrector.

/// Calculate Levenshtein distance between two strings.
///
/// Unit cost for insertion, deletion and substitution; transpositions count
/// as two edits. Operates on `char`s, not bytes.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rows of the DP matrix are enough
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;

        for (j, &cb) in b_chars.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(substitution);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Find the first candidate within `max_distance` edits of `word`.
///
/// Candidates are `(key, value)` pairs scanned in order; only keys longer
/// than `min_key_len` characters are considered. Returns the matching value.
pub fn first_within_distance<'a>(
    word: &str,
    candidates: &[(&'a str, &'a str)],
    max_distance: usize,
    min_key_len: usize,
) -> Option<&'a str> {
    candidates
        .iter()
        .filter(|(key, _)| key.chars().count() > min_key_len)
        .find(|(key, _)| levenshtein_distance(word, key) <= max_distance)
        .map(|&(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_no_transposition() {
        assert_eq!(levenshtein_distance("rwo", "row"), 2);
        assert_eq!(levenshtein_distance("sqaut", "squat"), 2);
    }

    #[test]
    fn test_levenshtein_counts_chars() {
        assert_eq!(levenshtein_distance("3×5", "3x5"), 1);
        assert_eq!(levenshtein_distance("", "×××"), 3);
    }

    #[test]
    fn test_first_within_distance_uses_table_order() {
        let table = [("dumbell", "dumbbell"), ("dumbells", "dumbbells")];
        // "dumbells" is closer, but "dumbell" comes first and is within 2
        assert_eq!(first_within_distance("dumbbells", &table, 2, 3), Some("dumbbell"));
        assert_eq!(first_within_distance("dumbbell", &table, 2, 3), Some("dumbbell"));
    }

    #[test]
    fn test_first_within_distance_skips_short_keys() {
        let table = [("db", "dumbbell"), ("rwo", "row")];
        assert_eq!(first_within_distance("dg", &table, 2, 3), None);
        assert_eq!(first_within_distance("rwo", &table, 2, 3), None);
    }

    #[test]
    fn test_first_within_distance_equal_distances() {
        let table = [("pres", "press"), ("presse", "press!")];
        assert_eq!(first_within_distance("press", &table, 2, 3), Some("press"));
    }

    #[test]
    fn test_first_within_distance_threshold() {
        let table = [("deadlift", "deadlift")];
        assert_eq!(first_within_distance("dedlfit", &table, 2, 3), None);
        assert_eq!(first_within_distance("dedlift", &table, 2, 3), Some("deadlift"));
    }
}
