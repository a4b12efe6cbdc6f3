//! Letter permutation expansion.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::keypad;
use crate::map::RunMap;
use crate::segment::{Run, segment};

/// Per-run candidate lists for a whole input.
///
/// An empty input produces [`Expansion::Empty`], which serializes as `[]`
/// rather than as an empty object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// The input was empty.
    Empty,
    /// Run key to candidates, in run order.
    Runs(RunMap<Vec<String>>),
}

impl Expansion {
    pub fn is_empty(&self) -> bool {
        match self {
            Expansion::Empty => true,
            Expansion::Runs(runs) => runs.is_empty(),
        }
    }

    /// Candidates for the run keyed `key`.
    pub fn get(&self, key: &str) -> Option<&Vec<String>> {
        match self {
            Expansion::Empty => None,
            Expansion::Runs(runs) => runs.get(key),
        }
    }

    pub fn runs(&self) -> Option<&RunMap<Vec<String>>> {
        match self {
            Expansion::Empty => None,
            Expansion::Runs(runs) => Some(runs),
        }
    }
}

impl Serialize for Expansion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expansion::Empty => serializer.serialize_seq(Some(0))?.end(),
            Expansion::Runs(runs) => runs.serialize(serializer),
        }
    }
}

/// Every candidate for `run`, in table order with later digits varying fastest.
///
/// Literal runs yield themselves. A letter run containing a character with
/// no keypad letters yields nothing.
pub fn expand_run(run: &Run) -> Vec<String> {
    if run.is_literal() {
        return vec![run.as_str().to_string()];
    }

    let mut combinations = vec![String::new()];
    for digit in run.as_str().chars() {
        let Some(letters) = keypad::letters(digit) else {
            return Vec::new();
        };
        let mut next = Vec::with_capacity(combinations.len() * letters.len());
        for prefix in &combinations {
            for &letter in letters {
                let mut candidate = String::with_capacity(prefix.len() + 1);
                candidate.push_str(prefix);
                candidate.push(letter);
                next.push(candidate);
            }
        }
        combinations = next;
    }
    combinations
}

/// Number of candidates [`expand_run`] would produce, without building them.
pub fn permutation_count(run: &Run) -> usize {
    if run.is_literal() {
        return 1;
    }
    run.as_str()
        .chars()
        .map(|c| keypad::letters(c).map_or(0, |l| l.len()))
        .fold(1usize, |acc, n| acc.saturating_mul(n))
}

/// Expand every run of `digits`.
pub fn expand(digits: &str) -> Expansion {
    if digits.is_empty() {
        return Expansion::Empty;
    }
    let runs = segment(digits)
        .iter()
        .map(|run| (run.as_str().to_string(), expand_run(run)))
        .collect();
    Expansion::Runs(runs)
}
