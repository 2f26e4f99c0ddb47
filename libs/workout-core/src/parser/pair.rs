//! Numeric token helpers and the weight/reps pair parser.

use regex::Regex;

use crate::error::Result;
use crate::types::ParsedSet;

use super::compile;

/// Parse a rep or set count: ASCII digits only, strictly positive.
pub(crate) fn parse_count(token: &str) -> Option<u32> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok().filter(|&n| n > 0)
}

/// Parse a weight token such as `80` or `62.5`; must be finite.
pub(crate) fn parse_weight(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|w| w.is_finite())
}

/// Parse a `/`- or `,`-separated rep list. Any bad entry fails the list.
pub(crate) fn parse_rep_list(list: &str) -> Option<Vec<u32>> {
    let reps = list
        .split(['/', ','])
        .map(parse_count)
        .collect::<Option<Vec<_>>>()?;
    (!reps.is_empty()).then_some(reps)
}

/// Parses one segment of a multi-weight line into a set.
///
/// Accepted shapes, tried in order:
/// - `80kg 8`, `80 8`, `80kg8`: weight, then reps
/// - `8`: reps only
/// - `8x80kg`, `8 × 80`: reps, then weight
pub struct PairParser {
    weight_then_reps: Regex,
    reps_then_weight: Regex,
}

impl PairParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            weight_then_reps: compile(
                "pair",
                r"(?i)^([0-9]+(?:\.[0-9]+)?)(?:\s*(?:kg|lbs?)\s*|\s+)([0-9]+)$",
            )?,
            reps_then_weight: compile(
                "pair",
                r"(?i)^([0-9]+)\s*[x×]\s*([0-9]+(?:\.[0-9]+)?)\s*(?:kg|lbs?)?$",
            )?,
        })
    }

    pub fn parse(&self, text: &str) -> Option<ParsedSet> {
        let text = text.trim();

        if let Some(caps) = self.weight_then_reps.captures(text) {
            let weight = parse_weight(&caps[1])?;
            let reps = parse_count(&caps[2])?;
            return Some(ParsedSet::new(Some(weight), reps));
        }

        if text.bytes().all(|b| b.is_ascii_digit()) {
            return parse_count(text).map(|reps| ParsedSet::new(None, reps));
        }

        let caps = self.reps_then_weight.captures(text)?;
        let reps = parse_count(&caps[1])?;
        let weight = parse_weight(&caps[2])?;
        Some(ParsedSet::new(Some(weight), reps))
    }
}
