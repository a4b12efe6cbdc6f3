//! Recursive resolution of digit strings into words and phrases.
//!
//! Each run is resolved on its own. A letter run whose candidates contain
//! no dictionary word is bisected at `floor(len / 2)` and both halves are
//! resolved recursively; a single digit with no word is a dead end. The
//! resulting phrases are the Cartesian product of the pieces, joined by a
//! single space, in input order.
//!
//! One descent produces both the [`ResolutionTree`] (which runs were split
//! and how) and the phrase list, so the two always agree.

use log::debug;
use serde::Serialize;
use serde::ser::Serializer;

use crate::dictionary::WordSet;
use crate::filter::valid_set;
use crate::map::RunMap;
use crate::segment::{Run, segment};

/// How a digit string was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionTree {
    /// A resolved list of words (possibly empty).
    Words(Vec<String>),
    /// Sub-strings resolved separately: either the two halves of a bisected
    /// run, or the runs of a multi-run input.
    Segments(RunMap<ResolutionTree>),
}

impl ResolutionTree {
    /// Nesting depth; a plain word list has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            ResolutionTree::Words(_) => 0,
            ResolutionTree::Segments(children) => {
                1 + children.values().map(Self::depth).max().unwrap_or(0)
            }
        }
    }

    /// The word list, if this node is a leaf.
    pub fn words(&self) -> Option<&[String]> {
        match self {
            ResolutionTree::Words(words) => Some(words),
            ResolutionTree::Segments(_) => None,
        }
    }

    /// The child mapping, if this node was split.
    pub fn segments(&self) -> Option<&RunMap<ResolutionTree>> {
        match self {
            ResolutionTree::Words(_) => None,
            ResolutionTree::Segments(children) => Some(children),
        }
    }
}

impl Serialize for ResolutionTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolutionTree::Words(words) => words.serialize(serializer),
            ResolutionTree::Segments(children) => children.serialize(serializer),
        }
    }
}

/// The outcome of resolving a whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Per-run valid words, with the splits that were needed.
    pub valid_permutations: ResolutionTree,
    /// Every complete phrase, in run order.
    pub final_results: Vec<String>,
}

struct Resolved {
    tree: ResolutionTree,
    phrases: Vec<String>,
}

/// Resolve `digits` against `words`.
pub fn resolve_with(digits: &str, words: &WordSet) -> Resolution {
    let runs = segment(digits);
    match runs.as_slice() {
        [] => Resolution {
            valid_permutations: ResolutionTree::Words(Vec::new()),
            final_results: Vec::new(),
        },
        [run] => {
            let resolved = resolve_run(run, words);
            Resolution {
                valid_permutations: resolved.tree,
                final_results: resolved.phrases,
            }
        }
        _ => {
            let mut trees = RunMap::new();
            let mut pieces = Vec::with_capacity(runs.len());
            for run in &runs {
                let resolved = resolve_run(run, words);
                trees.insert(run.as_str(), resolved.tree);
                pieces.push(resolved.phrases);
            }
            Resolution {
                valid_permutations: ResolutionTree::Segments(trees),
                final_results: join_product(&pieces),
            }
        }
    }
}

fn resolve_run(run: &Run, words: &WordSet) -> Resolved {
    let valid = valid_set(run, words);
    if !valid.is_empty() {
        return Resolved {
            tree: ResolutionTree::Words(valid.clone()),
            phrases: valid,
        };
    }

    let Some((left, right)) = run.bisect() else {
        return Resolved {
            tree: ResolutionTree::Words(Vec::new()),
            phrases: Vec::new(),
        };
    };

    debug!(
        "No word for {}, splitting into {} + {}",
        run.as_str(),
        left.as_str(),
        right.as_str()
    );
    let left_resolved = resolve_run(&left, words);
    let right_resolved = resolve_run(&right, words);

    let phrases = join_product(&[left_resolved.phrases, right_resolved.phrases]);
    let mut children = RunMap::new();
    children.insert(left.as_str(), left_resolved.tree);
    children.insert(right.as_str(), right_resolved.tree);

    Resolved {
        tree: ResolutionTree::Segments(children),
        phrases,
    }
}

/// Cartesian product of `pieces`, each combination joined with a space.
///
/// Earlier pieces vary slowest. Any empty piece empties the product.
fn join_product(pieces: &[Vec<String>]) -> Vec<String> {
    let Some((first, rest)) = pieces.split_first() else {
        return Vec::new();
    };

    let mut phrases = first.clone();
    for piece in rest {
        let mut next = Vec::with_capacity(phrases.len() * piece.len());
        for prefix in &phrases {
            for item in piece {
                next.push(format!("{prefix} {item}"));
            }
        }
        phrases = next;
    }
    phrases
}
