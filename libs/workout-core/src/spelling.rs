//! Spelling correction for exercise names.
//!
//! Three passes over a lower-cased name:
//! 1. exact lookup of the whole name (returns immediately),
//! 2. whole-word phrase replacement, longest key first,
//! 3. per-word fuzzy replacement by the first key in table order within
//!    distance 2 (keys longer than 3 chars only).

use once_cell::sync::Lazy;

use crate::matching::first_within_distance;

/// Maximum edit distance for a fuzzy word correction.
pub const MAX_FUZZY_DISTANCE: usize = 2;

/// Keys this short or shorter never take part in fuzzy matching.
pub const MIN_FUZZY_KEY_LEN: usize = 3;

/// Misspelling → canonical form, grouped by exercise family.
///
/// Declaration order is significant: it breaks ties in the phrase pass and
/// decides which key the fuzzy pass picks.
pub static CORRECTIONS: &[(&str, &str)] = &[
    // Dumbbell
    ("dumbell", "dumbbell"),
    ("dumbel", "dumbbell"),
    ("dumble", "dumbbell"),
    ("dumbbel", "dumbbell"),
    ("dumbells", "dumbbells"),
    ("dumbel rows", "dumbbell rows"),
    ("dumbell rows", "dumbbell rows"),
    ("db", "dumbbell"),
    // Barbell
    ("barbal", "barbell"),
    ("barbel", "barbell"),
    ("bb", "barbell"),
    // Bench
    ("banch", "bench"),
    ("bech", "bench"),
    ("benchpress", "bench press"),
    // Squat
    ("sqaut", "squat"),
    ("squats", "squat"),
    ("squatt", "squat"),
    // Deadlift
    ("deadlif", "deadlift"),
    ("deadlifts", "deadlift"),
    ("dealift", "deadlift"),
    ("dedlift", "deadlift"),
    ("dl", "deadlift"),
    // Row
    ("rows", "row"),
    ("rwo", "row"),
    ("rwos", "rows"),
    // Press
    ("pres", "press"),
    ("presse", "press"),
    ("ohp", "overhead press"),
    // Pull-up
    ("pullup", "pull-up"),
    ("pullups", "pull-ups"),
    ("pull up", "pull-up"),
    ("pull ups", "pull-ups"),
    ("chinup", "chin-up"),
    ("chinups", "chin-ups"),
    ("chin up", "chin-up"),
    // Push-up
    ("pushup", "push-up"),
    ("pushups", "push-ups"),
    ("push up", "push-up"),
    ("push ups", "push-ups"),
    // Curl
    ("curls", "curl"),
    ("bicep", "biceps"),
    ("bicep curl", "biceps curl"),
    // Tricep
    ("tricep", "triceps"),
    ("tricep pushdown", "triceps pushdown"),
    ("tricep extension", "triceps extension"),
    // Lateral
    ("lat", "lateral"),
    ("lats", "lateral"),
    ("lat raise", "lateral raise"),
    // Incline / decline
    ("inclin", "incline"),
    ("declin", "decline"),
    // Fly
    ("flys", "fly"),
    ("flies", "fly"),
    ("flyes", "fly"),
    // Leg
    ("leg curl", "leg curl"),
    ("legcurl", "leg curl"),
    ("leg extension", "leg extension"),
    ("legextension", "leg extension"),
    ("leg press", "leg press"),
    ("legpress", "leg press"),
    // Calf
    ("calf raise", "calf raise"),
    ("calfraise", "calf raise"),
    ("calfs", "calves"),
    // Shoulder
    ("sholder", "shoulder"),
    ("sholders", "shoulders"),
    ("shouler", "shoulder"),
    // Chest
    ("ches", "chest"),
    // Hip thrust
    ("hipthrust", "hip thrust"),
    ("hip trusts", "hip thrust"),
    // Lunge
    ("lunges", "lunge"),
    ("lungee", "lunge"),
    // Plank
    ("planks", "plank"),
    // Crunch
    ("crunchs", "crunch"),
    ("crunches", "crunch"),
    // Shrug
    ("shrugs", "shrug"),
];

/// Phrase table split into words, longest key first (stable, so ties keep
/// declaration order). Identity entries are dropped.
static PHRASES: Lazy<Vec<(Vec<&'static str>, Vec<&'static str>)>> = Lazy::new(|| {
    let mut entries: Vec<_> = CORRECTIONS
        .iter()
        .filter(|(wrong, correct)| wrong != correct)
        .collect();
    entries.sort_by_key(|(wrong, _)| std::cmp::Reverse(wrong.chars().count()));
    entries
        .into_iter()
        .map(|&(wrong, correct)| (wrong.split(' ').collect(), correct.split(' ').collect()))
        .collect()
});

/// Correct common misspellings in an exercise name.
///
/// The result is lower-case; capitalization is applied separately.
pub fn correct_spelling(name: &str) -> String {
    let lowercased = name.to_lowercase();

    if let Some((_, correct)) = CORRECTIONS.iter().find(|(wrong, _)| *wrong == lowercased) {
        return (*correct).to_string();
    }

    let mut words: Vec<String> = lowercased
        .split_whitespace()
        .map(str::to_string)
        .collect();

    for (wrong, correct) in PHRASES.iter() {
        words = replace_phrase(words, wrong, correct);
    }

    words
        .into_iter()
        .map(|word| {
            first_within_distance(&word, CORRECTIONS, MAX_FUZZY_DISTANCE, MIN_FUZZY_KEY_LEN)
                .map(str::to_string)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace every whole-word occurrence of `wrong` with `correct`.
///
/// Replaced words are not rescanned by the same phrase.
fn replace_phrase(words: Vec<String>, wrong: &[&str], correct: &[&str]) -> Vec<String> {
    if wrong.is_empty() || words.len() < wrong.len() {
        return words;
    }

    let mut out = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let end = i + wrong.len();
        if end <= words.len() && words[i..end].iter().zip(wrong).all(|(w, k)| w == k) {
            out.extend(correct.iter().map(|w| (*w).to_string()));
            i = end;
        } else {
            out.push(words[i].clone());
            i += 1;
        }
    }
    out
}
