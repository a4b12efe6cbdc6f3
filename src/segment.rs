//! Splitting digit strings into runs.
//!
//! A run is either a maximal stretch of letter digits or a single literal
//! digit (`0` or `1`). Concatenating the runs of an input in order always
//! reconstructs the input.

use serde::{Deserialize, Serialize};

use crate::keypad;

/// The category of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    /// Digits that expand into letters.
    Letters,
    /// A single `0` or `1`, passed through unchanged.
    Literal,
}

/// A non-empty contiguous piece of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    text: String,
    kind: RunKind,
}

impl Run {
    /// Build a letter run. `text` must be non-empty and free of literal digits.
    pub fn letters<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty());
        debug_assert!(!text.chars().any(keypad::is_literal));
        Run {
            text,
            kind: RunKind::Letters,
        }
    }

    /// Build a literal run for `digit`.
    pub fn literal(digit: char) -> Self {
        debug_assert!(keypad::is_literal(digit));
        Run {
            text: digit.to_string(),
            kind: RunKind::Literal,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> RunKind {
        self.kind
    }

    pub fn is_literal(&self) -> bool {
        self.kind == RunKind::Literal
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split a letter run at `floor(len / 2)` characters.
    ///
    /// Returns `None` for literal runs and runs of length 1.
    pub fn bisect(&self) -> Option<(Run, Run)> {
        if self.is_literal() {
            return None;
        }
        let len = self.len();
        if len < 2 {
            return None;
        }
        let mid = len / 2;
        let (split_at, _) = self.text.char_indices().nth(mid)?;
        let (left, right) = self.text.split_at(split_at);
        Some((Run::letters(left), Run::letters(right)))
    }
}

/// Split `digits` into runs, preserving order and exact coverage.
///
/// Any character that is not a literal digit is grouped into letter runs,
/// including characters with no keypad letters at all.
pub fn segment(digits: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut pending = String::new();

    for c in digits.chars() {
        if keypad::is_literal(c) {
            if !pending.is_empty() {
                runs.push(Run::letters(std::mem::take(&mut pending)));
            }
            runs.push(Run::literal(c));
        } else {
            pending.push(c);
        }
    }
    if !pending.is_empty() {
        runs.push(Run::letters(pending));
    }

    runs
}
