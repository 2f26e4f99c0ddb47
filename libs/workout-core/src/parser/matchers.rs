//! Ordered matcher cascade.
//!
//! Each matcher either extracts a complete exercise from one normalized line
//! or declines; the first one that accepts wins.

use regex::Regex;

use crate::error::Result;
use crate::types::ParsedSet;

use super::compile;
use super::pair::{parse_count, parse_rep_list, parse_weight, PairParser};

/// Above this, a number in a unit-less fallback line is read as a weight.
pub const WEIGHT_THRESHOLD: f64 = 20.0;

/// Upper bound on sets produced by `N×M` notation.
pub const MAX_EXPANDED_SETS: u32 = 100;

/// Sets pulled out of a line, before name correction.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedSets {
    /// One weight (or none) shared by every set.
    Uniform { weight: Option<f64>, reps: Vec<u32> },
    /// Each set carries its own weight.
    Detailed(Vec<ParsedSet>),
}

/// Raw result of a successful match.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub name: String,
    pub sets: ExtractedSets,
}

impl Extraction {
    fn uniform(name: &str, weight: Option<f64>, reps: Vec<u32>) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() || reps.is_empty() || reps.contains(&0) {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            sets: ExtractedSets::Uniform { weight, reps },
        })
    }

    fn detailed(name: &str, sets: Vec<ParsedSet>) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() || sets.is_empty() || sets.iter().any(|s| s.reps == 0) {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            sets: ExtractedSets::Detailed(sets),
        })
    }
}

/// One pattern-recognition strategy in the cascade.
pub trait Matcher: Send + Sync {
    /// Matcher identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Try to extract an exercise from normalized working text.
    fn attempt(&self, text: &str) -> Option<Extraction>;
}

/// Build the cascade in priority order.
pub fn default_matchers() -> Result<Vec<Box<dyn Matcher>>> {
    let matchers: Vec<Box<dyn Matcher>> = vec![
        Box::new(MultiWeight::new()?),
        Box::new(Standard::new()?),
        Box::new(BodyweightTagged::new()?),
        Box::new(SetsRepsWeight::new()?),
        Box::new(WeightSetsReps::new()?),
        Box::new(ImplicitBodyweight::new()?),
        Box::new(SingleSet::new()?),
        Box::new(BodyweightSetsReps::new()?),
        Box::new(Flexible::new()?),
    ];
    Ok(matchers)
}

fn expand(sets: u32, reps: u32) -> Option<Vec<u32>> {
    if sets > MAX_EXPANDED_SETS {
        return None;
    }
    Some(vec![reps; sets as usize])
}

/// `row 10kg 13 / 34kg 12`, `bench 80kg 8, 70kg 10`, `row 8x60kg / 6x70kg`.
///
/// Segments without any weight make a bodyweight line (`pushups 25 / 20 / 15`,
/// `push-ups BW 15/12/10`); a trailing `bw`/`bodyweight` tag is dropped from
/// the name. A single shared weight is left to [`Standard`].
pub struct MultiWeight {
    pairs: PairParser,
}

impl MultiWeight {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pairs: PairParser::new()?,
        })
    }
}

impl Matcher for MultiWeight {
    fn name(&self) -> &'static str {
        "multi_weight"
    }

    fn attempt(&self, text: &str) -> Option<Extraction> {
        let first_digit = text.find(|c: char| c.is_ascii_digit())?;
        let (name, rest) = text.split_at(first_digit);

        if !rest.contains(['/', ',']) {
            return None;
        }

        let parts: Vec<&str> = rest
            .split(['/', ','])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() < 2 {
            return None;
        }

        let sets = parts
            .iter()
            .map(|part| self.pairs.parse(part))
            .collect::<Option<Vec<_>>>()?;

        match sets.iter().filter(|s| s.weight.is_some()).count() {
            0 => {
                let reps = sets.iter().map(|s| s.reps).collect();
                Extraction::uniform(strip_bodyweight_tag(name), None, reps)
            }
            1 => None,
            _ => Extraction::detailed(name, sets),
        }
    }
}

fn strip_bodyweight_tag(name: &str) -> &str {
    let name = name.trim_end();
    let (head, tag) = name.rsplit_once(char::is_whitespace).unwrap_or(("", name));
    if tag.eq_ignore_ascii_case("bw") || tag.eq_ignore_ascii_case("bodyweight") {
        head
    } else {
        name
    }
}

/// `bench 80kg 8/8/6`, `bench 80 8,8,6`.
pub struct Standard {
    pattern: Regex,
}

impl Standard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(
                "standard",
                r"(?i)^(.+?)\s+([0-9]+(?:\.[0-9]+)?)\s*(?:kg|lbs?)?\s+([0-9]+(?:[/,][0-9]+)+)$",
            )?,
        })
    }
}

impl Matcher for Standard {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn attempt(&self, text: &str) -> Option<Extraction> {
        let caps = self.pattern.captures(text)?;
        let weight = parse_weight(&caps[2])?;
        let reps = parse_rep_list(&caps[3])?;
        Extraction::uniform(&caps[1], Some(weight), reps)
    }
}

/// `push-ups BW 15/12/10`, `dips bodyweight 12`.
pub struct BodyweightTagged {
    pattern: Regex,
}

impl BodyweightTagged {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(
                "bodyweight_tagged",
                r"(?i)^(.+?)\s+(?:bw|bodyweight)\s+([0-9]+(?:[/,][0-9]+)*)$",
            )?,
        })
    }
}

impl Matcher for BodyweightTagged {
    fn name(&self) -> &'static str {
        "bodyweight_tagged"
    }

    fn attempt(&self, text: &str) -> Option<Extraction> {
        let caps = self.pattern.captures(text)?;
        let reps = parse_rep_list(&caps[2])?;
        Extraction::uniform(&caps[1], None, reps)
    }
}

/// `squat 3x5 140kg`.
pub struct SetsRepsWeight {
    pattern: Regex,
}

impl SetsRepsWeight {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(
                "sets_reps_weight",
                r"(?i)^(.+?)\s+([0-9]+)[x×]([0-9]+)\s+([0-9]+(?:\.[0-9]+)?)\s*(?:kg|lbs?)?$",
            )?,
        })
    }
}

impl Matcher for SetsRepsWeight {
    fn name(&self) -> &'static str {
        "sets_reps_weight"
    }

    fn attempt(&self, text: &str) -> Option<Extraction> {
        let caps = self.pattern.captures(text)?;
        let set_count = parse_count(&caps[2])?;
        let reps = parse_count(&caps[3])?;
        let weight = parse_weight(&caps[4])?;
        Extraction::uniform(&caps[1], Some(weight), expand(set_count, reps)?)
    }
}

/// `squat 140kg 3x5`.
pub struct WeightSetsReps {
    pattern: Regex,
}

impl WeightSetsReps {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(
                "weight_sets_reps",
                r"(?i)^(.+?)\s+([0-9]+(?:\.[0-9]+)?)\s*(?:kg|lbs?)?\s+([0-9]+)[x×]([0-9]+)$",
            )?,
        })
    }
}

impl Matcher for WeightSetsReps {
    fn name(&self) -> &'static str {
        "weight_sets_reps"
    }

    fn attempt(&self, text: &str) -> Option<Extraction> {
        let caps = self.pattern.captures(text)?;
        let weight = parse_weight(&caps[2])?;
        let set_count = parse_count(&caps[3])?;
        let reps = parse_count(&caps[4])?;
        Extraction::uniform(&caps[1], Some(weight), expand(set_count, reps)?)
    }
}

/// `pull-ups 10/8/7`: reps only, so bodyweight.
pub struct ImplicitBodyweight {
    pattern: Regex,
}

impl ImplicitBodyweight {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(
                "implicit_bodyweight",
                r"^(.+?)\s+([0-9]+(?:[/,][0-9]+)+)$",
            )?,
        })
    }
}

impl Matcher for ImplicitBodyweight {
    fn name(&self) -> &'static str {
        "implicit_bodyweight"
    }

    fn attempt(&self, text: &str) -> Option<Extraction> {
        let caps = self.pattern.captures(text)?;
        let reps = parse_rep_list(&caps[2])?;
        Extraction::uniform(&caps[1], None, reps)
    }
}

/// `bench 80kg 8`. The unit is required: `curl 25 10` is left to the
/// fallback heuristic.
pub struct SingleSet {
    pattern: Regex,
}

impl SingleSet {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(
                "single_set",
                r"(?i)^(.+?)\s+([0-9]+(?:\.[0-9]+)?)\s*(?:kg|lbs?)\s+([0-9]+)$",
            )?,
        })
    }
}

impl Matcher for SingleSet {
    fn name(&self) -> &'static str {
        "single_set"
    }

    fn attempt(&self, text: &str) -> Option<Extraction> {
        let caps = self.pattern.captures(text)?;
        let weight = parse_weight(&caps[2])?;
        let reps = parse_count(&caps[3])?;
        Extraction::uniform(&caps[1], Some(weight), vec![reps])
    }
}

/// `pushups 3x20`: sets × reps with no load.
pub struct BodyweightSetsReps {
    pattern: Regex,
}

impl BodyweightSetsReps {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(
                "bodyweight_sets_reps",
                r"(?i)^(.+?)\s+([0-9]+)[x×]([0-9]+)$",
            )?,
        })
    }
}

impl Matcher for BodyweightSetsReps {
    fn name(&self) -> &'static str {
        "bodyweight_sets_reps"
    }

    fn attempt(&self, text: &str) -> Option<Extraction> {
        let caps = self.pattern.captures(text)?;
        let set_count = parse_count(&caps[2])?;
        let reps = parse_count(&caps[3])?;
        Extraction::uniform(&caps[1], None, expand(set_count, reps)?)
    }
}

/// Last resort: pull every number out of the line and guess.
///
/// One number is a bodyweight rep count. Otherwise a unit anywhere in the
/// line, or a first number above [`WEIGHT_THRESHOLD`], makes the first number
/// the weight and the rest reps; failing both, every number is reps.
pub struct Flexible {
    number: Regex,
}

impl Flexible {
    pub fn new() -> Result<Self> {
        Ok(Self {
            number: compile("flexible", r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(?:kg|lbs?)?")?,
        })
    }
}

impl Matcher for Flexible {
    fn name(&self) -> &'static str {
        "flexible"
    }

    fn attempt(&self, text: &str) -> Option<Extraction> {
        let mut name_end = None;
        let mut numbers = Vec::new();
        for caps in self.number.captures_iter(text) {
            let token = caps.get(1)?;
            name_end.get_or_insert(token.start());
            numbers.push(parse_weight(token.as_str())?);
        }

        let name = &text[..name_end?];
        let lowered = text.to_lowercase();
        let has_unit = lowered.contains("kg") || lowered.contains("lb");

        match numbers.as_slice() {
            [] => None,
            [only] => Extraction::uniform(name, None, vec![whole_reps(*only)?]),
            [first, rest @ ..] if has_unit || *first > WEIGHT_THRESHOLD => {
                let reps = rest.iter().map(|&n| whole_reps(n)).collect::<Option<_>>()?;
                Extraction::uniform(name, Some(*first), reps)
            }
            all => {
                let reps = all.iter().map(|&n| whole_reps(n)).collect::<Option<_>>()?;
                Extraction::uniform(name, None, reps)
            }
        }
    }
}

/// A fallback number used as a rep count must be a positive whole number.
fn whole_reps(n: f64) -> Option<u32> {
    if n.fract() != 0.0 || n < 1.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n as u32)
}
