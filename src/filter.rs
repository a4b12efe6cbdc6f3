//! Dictionary filtering of expanded candidates.

use crate::dictionary::WordSet;
use crate::permutation::{Expansion, expand_run};
use crate::segment::{Run, segment};

/// Keep the candidates of `run` that are dictionary words, preserving order.
///
/// Literal runs are returned unchanged without any lookup.
pub fn filter_run(run: &Run, candidates: Vec<String>, words: &WordSet) -> Vec<String> {
    if run.is_literal() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|candidate| words.contains(candidate))
        .collect()
}

/// The valid set of a single run: its expansion, filtered.
pub fn valid_set(run: &Run, words: &WordSet) -> Vec<String> {
    filter_run(run, expand_run(run), words)
}

/// Expand `digits` and filter every run against `words`.
pub fn filter_valid_with(digits: &str, words: &WordSet) -> Expansion {
    if digits.is_empty() {
        return Expansion::Empty;
    }
    let runs = segment(digits)
        .iter()
        .map(|run| (run.as_str().to_string(), valid_set(run, words)))
        .collect();
    Expansion::Runs(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::expand;

    fn words() -> WordSet {
        ["wt", "wu", "xu", "yt", "cat", "act", "bat"]
            .into_iter()
            .collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_two_digits() {
        let valid = filter_valid_with("98", &words());
        assert_eq!(valid.get("98"), Some(&strings(&["WT", "WU", "XU", "YT"])));
    }

    #[test]
    fn test_filter_keeps_literal_runs() {
        let valid = filter_valid_with("981", &words());
        assert_eq!(
            serde_json::to_string(&valid).unwrap(),
            r#"{"98":["WT","WU","XU","YT"],"1":["1"]}"#
        );

        let empty = WordSet::new();
        let valid = filter_valid_with("1010", &empty);
        assert_eq!(valid.get("1"), Some(&strings(&["1"])));
        assert_eq!(valid.get("0"), Some(&strings(&["0"])));
    }

    #[test]
    fn test_filter_is_subset_of_expansion() {
        let words = words();
        for digits in ["98", "228", "22812", "7777", "90210"] {
            let expanded = expand(digits);
            let valid = filter_valid_with(digits, &words);
            for (key, candidates) in valid.runs().unwrap() {
                let all = expanded.get(key).unwrap();
                assert!(candidates.iter().all(|c| all.contains(c)), "{digits}/{key}");
            }
        }
    }

    #[test]
    fn test_filter_empty_input() {
        assert_eq!(filter_valid_with("", &words()), Expansion::Empty);
    }

    #[test]
    fn test_filter_preserves_expansion_order() {
        let valid = filter_valid_with("228", &words());
        assert_eq!(valid.get("228"), Some(&strings(&["ACT", "BAT", "CAT"])));
    }
}
